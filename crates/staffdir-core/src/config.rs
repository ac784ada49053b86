//! Configuration types for staffdir.
//!
//! [`Config::load`] layers the embedded defaults, a TOML file and `STAFFDIR__*`
//! environment variables, in that order. Without an explicit file it reads
//! `~/.config/staffdir/config.toml`, creating it with the defaults if it does
//! not yet exist. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:5000"

[database]
path          = "employees.db"
seed_on_empty = true

[directory]
none_label       = "Нет"
default_position = "Специалист"
"#;

const ENV_PREFIX: &str = "STAFFDIR";
const ENV_SEPARATOR: &str = "__";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// `[database]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    /// Insert the sample cities, departments and employees when the `city`
    /// table is empty at startup.
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

/// `[directory]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Placeholder shown when an employee has no department or a department
    /// has no city.
    #[serde(default = "default_none_label")]
    pub none_label: String,
    /// Position stored when the add form leaves it blank.
    #[serde(default = "default_position")]
    pub default_position: String,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }
fn default_db_path() -> PathBuf { PathBuf::from("employees.db") }
fn default_seed_on_empty() -> bool { true }
fn default_none_label() -> String { "Нет".to_string() }
fn default_position() -> String { crate::store::DEFAULT_POSITION.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            none_label: default_none_label(),
            default_position: default_position(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `explicit = Some(path)` the file must exist. Otherwise the user
    /// config file is used and created with defaults if missing.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = config_path();
                if !path.exists() {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
                }
                path
            }
        };

        Self::build(Some(&path), environment())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn build(file: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }
        builder
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path / environment helpers
// ---------------------------------------------------------------------------

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("staffdir")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
