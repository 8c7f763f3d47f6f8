use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod items;
mod matches;
mod parsers;


pub use args::{ExportArgs, ItemFieldArgs, ItemUpdateArgs};
pub use items::{FoundArgs, FoundCommand, LostArgs, LostCommand};
pub use matches::{MatchArgs, MatchCommand};

#[derive(Debug, Parser)]
#[command(name = "lostfound")]
#[command(about = "Lost and found reports with automatic matching", version)]
pub struct Cli {
    #[arg(long, default_value = ".lostfound")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Init,
    Lost(LostArgs),
    Found(FoundArgs),
    Match(MatchArgs),
    Export(ExportArgs),
    Stats,
}

impl Commands {
    /// Dotted name used as the `operation` of error payloads.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Lost(args) => match args.command {
                LostCommand::Report { .. } => "lost.report",
                LostCommand::List => "lost.list",
                LostCommand::Show { .. } => "lost.show",
                LostCommand::Update { .. } => "lost.update",
                LostCommand::Delete { .. } => "lost.delete",
            },
            Self::Found(args) => match args.command {
                FoundCommand::Report { .. } => "found.report",
                FoundCommand::List => "found.list",
                FoundCommand::Show { .. } => "found.show",
                FoundCommand::Update { .. } => "found.update",
                FoundCommand::Delete { .. } => "found.delete",
            },
            Self::Match(args) => match args.command {
                MatchCommand::List { .. } => "match.list",
                MatchCommand::Show { .. } => "match.show",
                MatchCommand::Confirm { .. } => "match.confirm",
                MatchCommand::Reject { .. } => "match.reject",
                MatchCommand::Delete { .. } => "match.delete",
            },
            Self::Export(_) => "export",
            Self::Stats => "stats",
        }
    }
}
