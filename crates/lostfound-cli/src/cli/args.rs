use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lostfound_core::ExportTarget;

/// Descriptive fields shared by lost and found reports.
#[derive(Debug, Args)]
pub struct ItemFieldArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

/// Fields to change on an existing item. An empty value clears an optional field.
#[derive(Debug, Args)]
pub struct ItemUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTargetArg {
    Lost,
    Found,
    Matches,
    All,
}

impl From<ExportTargetArg> for ExportTarget {
    fn from(value: ExportTargetArg) -> Self {
        match value {
            ExportTargetArg::Lost => Self::Lost,
            ExportTargetArg::Found => Self::Found,
            ExportTargetArg::Matches => Self::Matches,
            ExportTargetArg::All => Self::All,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub target: ExportTargetArg,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}
