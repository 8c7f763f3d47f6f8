use clap::{Args, Subcommand};

use super::parsers::parse_item_id;

#[derive(Debug, Args)]
pub struct MatchArgs {
    #[command(subcommand)]
    pub command: MatchCommand,
}

#[derive(Debug, Subcommand)]
pub enum MatchCommand {
    /// All matches newest first, or one item's matches best score first.
    List {
        #[arg(long, value_parser = parse_item_id, conflicts_with = "found")]
        lost: Option<i64>,
        #[arg(long, value_parser = parse_item_id)]
        found: Option<i64>,
    },
    Show {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
    Confirm {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
    Reject {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
    Delete {
        #[arg(value_parser = parse_item_id)]
        id: i64,
    },
}
