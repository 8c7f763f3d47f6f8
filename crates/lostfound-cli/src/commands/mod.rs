use std::path::Path;

use anyhow::{Context, Result};
use lostfound_core::LostFound;
use lostfound_core::models::MatchDecision;

use crate::cli::{Commands, FoundCommand, LostCommand, MatchCommand};

mod items;
mod matches;
mod support;


pub(crate) use self::support::print_failure;
use self::support::print_json;

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = LostFound::open(root)
        .with_context(|| format!("failed to open lost and found root {}", root.display()))?;
    run(&app, command)
}

fn run(app: &LostFound, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            print_json(&serde_json::json!({
                "status": "ok",
                "root": app.root(),
                "db_path": app.config().db_path(app.root()),
                "threshold": app.config().threshold.get(),
            }))?;
        }
        Commands::Lost(args) => match args.command {
            LostCommand::Report {
                fields,
                contact,
                reported_at,
            } => items::report_lost(app, fields, contact, reported_at)?,
            LostCommand::List => print_json(&app.lost_items()?)?,
            LostCommand::Show { id } => items::show_lost(app, id)?,
            LostCommand::Update {
                id,
                fields,
                contact,
            } => items::update_lost(app, id, fields, contact)?,
            LostCommand::Delete { id } => items::delete_lost(app, id)?,
        },
        Commands::Found(args) => match args.command {
            FoundCommand::Report {
                fields,
                finder,
                found_at,
            } => items::report_found(app, fields, finder, found_at)?,
            FoundCommand::List => print_json(&app.found_items()?)?,
            FoundCommand::Show { id } => items::show_found(app, id)?,
            FoundCommand::Update { id, fields, finder } => {
                items::update_found(app, id, fields, finder)?;
            }
            FoundCommand::Delete { id } => items::delete_found(app, id)?,
        },
        Commands::Match(args) => match args.command {
            MatchCommand::List { lost, found } => matches::list(app, lost, found)?,
            MatchCommand::Show { id } => matches::show(app, id)?,
            MatchCommand::Confirm { id } => matches::decide(app, id, MatchDecision::Confirmed)?,
            MatchCommand::Reject { id } => matches::decide(app, id, MatchDecision::Rejected)?,
            MatchCommand::Delete { id } => matches::delete(app, id)?,
        },
        Commands::Export(args) => {
            let files = app.export(&args.out_dir, args.target.into())?;
            print_json(&serde_json::json!({
                "status": "ok",
                "files": files,
            }))?;
        }
        Commands::Stats => print_json(&app.statistics()?)?,
    }
    Ok(())
}
