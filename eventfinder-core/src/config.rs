//! eventfinder configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventFinderError, EventFinderResult};

static DEFAULT_DATABASE_PATH: &str = "~/.eventfinder/events.db";
static DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_seed_on_first_run() -> bool {
    true
}

/// Configuration at ~/.config/eventfinder/config.toml
///
/// Every key can be overridden with an `EVENTFINDER_`-prefixed environment
/// variable, e.g. `EVENTFINDER_PORT=8080`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventFinderConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Insert the sample events when the database is created
    #[serde(default = "default_seed_on_first_run")]
    pub seed_on_first_run: bool,

    /// Directory holding index.html and add-event.html
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl Default for EventFinderConfig {
    fn default() -> Self {
        EventFinderConfig {
            database_path: default_database_path(),
            host: default_host(),
            port: default_port(),
            seed_on_first_run: default_seed_on_first_run(),
            static_dir: None,
        }
    }
}

impl EventFinderConfig {
    pub fn config_path() -> EventFinderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventFinderError::Config("Could not determine config directory".into()))?
            .join("eventfinder");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented config file on first run.
    pub fn load() -> EventFinderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file (which may be missing), layered with environment overrides.
    pub fn load_from(path: &Path) -> EventFinderResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("EVENTFINDER").try_parsing(true))
            .build()
            .map_err(|e| EventFinderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventFinderError::Config(e.to_string()))
    }

    /// Database location with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand(&self.database_path)
    }

    pub fn static_dir(&self) -> Option<PathBuf> {
        self.static_dir.as_deref().map(expand)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventFinderResult<()> {
        let contents = format!(
            "\
# eventfinder configuration

# Where the SQLite event database lives:
# database_path = \"{DEFAULT_DATABASE_PATH}\"

# Address the HTTP server listens on:
# host = \"{DEFAULT_HOST}\"
# port = {DEFAULT_PORT}

# Insert sample events into a brand-new database:
# seed_on_first_run = true

# Serve index.html and add-event.html from this directory:
# static_dir = \"~/eventfinder/web\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventFinderError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventFinderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
