use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LostFoundError, Result};

mod env;
mod matching;

pub use matching::MatchThreshold;

use self::env::read_non_empty_env;
use self::matching::ENV_MATCH_THRESHOLD;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_DB_FILE: &str = "lostfound.sqlite3";
const ENV_DB_FILE: &str = "LOSTFOUND_DB_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub threshold: MatchThreshold,
    pub db_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            threshold: MatchThreshold::DEFAULT,
            db_file: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default, rename = "match")]
    matching: MatchSection,
    #[serde(default)]
    storage: StorageSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchSection {
    threshold: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StorageSection {
    db_file: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve defaults, then `<root>/config.toml`, then environment overrides.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_with_env(
            root,
            read_non_empty_env(ENV_MATCH_THRESHOLD).as_deref(),
            read_non_empty_env(ENV_DB_FILE).as_deref(),
        )
    }

    pub(crate) fn load_with_env(
        root: &Path,
        threshold_env: Option<&str>,
        db_file_env: Option<&str>,
    ) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let file = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|err| {
                LostFoundError::Configuration(format!("failed to read {}: {err}", path.display()))
            })?;
            Some(raw)
        } else {
            None
        };
        Self::resolve(file.as_deref(), threshold_env, db_file_env)
    }

    pub(crate) fn resolve(
        file: Option<&str>,
        threshold_env: Option<&str>,
        db_file_env: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = file {
            let parsed: ConfigFile = toml::from_str(raw).map_err(|err| {
                LostFoundError::Configuration(format!("invalid {CONFIG_FILE_NAME}: {err}"))
            })?;
            if let Some(threshold) = parsed.matching.threshold {
                config.threshold = MatchThreshold::try_from(threshold)?;
            }
            if let Some(db_file) = parsed.storage.db_file {
                config.db_file = db_file;
            }
        }

        if let Some(raw) = threshold_env {
            config.threshold = MatchThreshold::parse(raw)?;
        }
        if let Some(raw) = db_file_env {
            config.db_file = PathBuf::from(raw);
        }

        Ok(config)
    }

    #[must_use]
    pub fn db_path(&self, root: &Path) -> PathBuf {
        root.join(&self.db_file)
    }
}
