use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use super::args::{ItemFieldArgs, ItemUpdateArgs};
use super::parsers::{parse_item_id, parse_timestamp};

#[derive(Debug, Args)]
pub struct LostArgs {
    #[command(subcommand)]
    pub command: LostCommand,
}

#[derive(Debug, Subcommand)]
pub enum LostCommand {
    /// Report a lost item and match it against found items.
    Report {
        #[command(flatten)]
        fields: ItemFieldArgs,
        #[arg(long)]
        contact: String,
        #[arg(long, value_parser = parse_timestamp)]
        reported_at: Option<DateTime<Utc>>,
    },
    List,
    Show {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
    Update {
        #[arg(value_parser = parse_item_id)]
        id: i64,
        #[command(flatten)]
        fields: ItemUpdateArgs,
        #[arg(long)]
        contact: Option<String>,
    },
    Delete {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct FoundArgs {
    #[command(subcommand)]
    pub command: FoundCommand,
}

#[derive(Debug, Subcommand)]
pub enum FoundCommand {
    /// Report a found item and match it against lost items.
    Report {
        #[command(flatten)]
        fields: ItemFieldArgs,
        #[arg(long)]
        finder: String,
        #[arg(long, value_parser = parse_timestamp)]
        found_at: Option<DateTime<Utc>>,
    },
    List,
    Show {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
    Update {
        #[arg(value_parser = parse_item_id)]
        id: i64,
        #[command(flatten)]
        fields: ItemUpdateArgs,
        #[arg(long)]
        finder: Option<String>,
    },
    Delete {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
}
