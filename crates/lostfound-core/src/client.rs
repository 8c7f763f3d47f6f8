use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::lifecycle::MatchLifecycle;
use crate::matching::MatchFinder;
use crate::notification::{ConsoleNotifier, MatchNotifier};
use crate::state::SqliteStateStore;

mod export_service;
mod item_service;
mod match_service;
mod report_service;

/// Application handle over one lost and found root directory.
///
/// Owns the store, the configured finder and the notifier used for newly
/// recorded matches.
#[derive(Clone)]
pub struct LostFound {
    pub state: SqliteStateStore,
    root: PathBuf,
    config: AppConfig,
    finder: MatchFinder,
    lifecycle: MatchLifecycle<SqliteStateStore>,
    notifier: Arc<dyn MatchNotifier>,
}

impl std::fmt::Debug for LostFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LostFound")
            .field("root", &self.root)
            .field("threshold", &self.config.threshold)
            .finish_non_exhaustive()
    }
}

impl LostFound {
    /// Open `root_dir`, creating it when missing. Configuration comes from
    /// `config.toml` under the root and the environment.
    pub fn open(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let config = AppConfig::load(&root)?;
        Self::with_config(root, config)
    }

    pub fn with_config(root_dir: impl Into<PathBuf>, config: AppConfig) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let state = SqliteStateStore::open(config.db_path(&root))?;
        let finder = MatchFinder::new(config.threshold);
        let lifecycle = MatchLifecycle::new(state.clone());

        Ok(Self {
            state,
            root,
            config,
            finder,
            lifecycle,
            notifier: Arc::new(ConsoleNotifier::stderr()),
        })
    }

    /// Replace the notification channel used for newly recorded matches.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl MatchNotifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn finder(&self) -> &MatchFinder {
        &self.finder
    }
}

#[cfg(test)]
mod tests;
