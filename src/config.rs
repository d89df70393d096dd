//! User configuration and data locations

use crate::dictionary::online;
use crate::solver::ScoreWeights;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_NAME: &str = "forca_solver";
const DB_FILE: &str = "learned.db";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Learned-frequency database; `None` uses `default_db_path`
    pub database: Option<PathBuf>,
    /// Word-list file for dictionary checks; `None` uses the embedded list
    pub dictionary: Option<PathBuf>,
    /// Warn when a secret word is not in the dictionary
    pub check_dictionary: bool,
    /// Consult the online dictionary instead of the word list
    pub online_dictionary: bool,
    pub dictionary_url: String,
    pub dictionary_timeout_ms: u64,
    pub strategy: String,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            dictionary: None,
            check_dictionary: true,
            online_dictionary: false,
            dictionary_url: online::DEFAULT_URL.to_string(),
            dictionary_timeout_ms: online::DEFAULT_TIMEOUT.as_millis() as u64,
            strategy: "heuristic".to_string(),
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    /// Database path after applying the default location
    #[must_use]
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.clone().or_else(default_db_path)
    }
}

/// Default learned-frequency database location
///
/// `$HOME/.local/state/forca_solver/learned.db`, or the platform data directory when
/// `HOME` is not set.
#[must_use]
pub fn default_db_path() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let state_dir = PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(APP_NAME);
        Some(state_dir.join(DB_FILE))
    } else {
        ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.data_local_dir().join(DB_FILE))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("forca_solver_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, writing the defaults on first run
    #[must_use]
    pub fn load_or_init(&self) -> Config {
        if self.path.exists() {
            return self.load();
        }
        let cfg = Config::default();
        match self.save(&cfg) {
            Ok(()) => info!(path = %self.path.display(), "wrote default config"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "could not write default config"),
        }
        cfg
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "invalid config, using defaults");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
