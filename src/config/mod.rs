use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".rworklog";
const CONFIG_FILE: &str = "rworklog.conf";
const DB_FILE: &str = "rworklog.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Names offered by the office picker, in wheel order.
    #[serde(default = "default_offices")]
    pub offices: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_offices() -> Vec<String> {
    ["Bronx", "212A", "308B", "PalmerRd"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            offices: default_offices(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.rworklog`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// First character of `separator_char`, used for table rules.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve the database path for `init`: a relative custom name lands in the config dir.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        let dir = Self::config_dir();
        match custom_name {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join(DB_FILE),
        }
    }

    /// Create the config directory and, unless in test mode, write the config file.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = Self::resolve_db_path(custom_name);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = config.to_yaml()?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
