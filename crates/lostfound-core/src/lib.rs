// Public fallible APIs in this crate share one concrete error contract (`LostFoundError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod matching;
pub mod models;
pub mod notification;
pub mod state;
pub mod store;
pub(crate) mod text;

pub use client::LostFound;
pub use config::{AppConfig, MatchThreshold};
pub use error::{LostFoundError, Result};
pub use export::ExportTarget;
pub use lifecycle::MatchLifecycle;
pub use matching::MatchFinder;
pub use notification::{ConsoleNotifier, MatchNotifier};
pub use state::SqliteStateStore;
pub use store::{ItemSource, MatchStore};
