use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_FILE: &str = "sleeplogger.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    /// External email command (xdg-email style). When unset the share
    /// request is only printed.
    #[serde(default)]
    pub share_command: Option<String>,
}

fn default_export_dir() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            export_dir: default_export_dir(),
            export_file: default_export_file(),
            share_command: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sleeplogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".sleeplogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sleeplogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sleeplogger.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Export medium with `~/` expanded.
    pub fn export_medium(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Where a `--db` value points: `~/` is expanded, absolute paths are
    /// kept, relative names live inside the config directory.
    pub fn resolve_db(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the config directory and write the configuration file.
    /// `database` overrides the default DB location (see [`Config::resolve_db`]).
    pub fn init_all(database: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match database {
            Some(name) => Self::resolve_db(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
