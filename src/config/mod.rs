use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::error::{Error, Result};

pub const CONFIG_DIR: &str = ".socialgraph";
pub const CONFIG_FILE: &str = "config.json";

pub const ENV_URI: &str = "DATABASE_URI";
pub const ENV_USER: &str = "DATABASE_USER";
pub const ENV_PASS: &str = "DATABASE_PASS";
pub const ENV_NAME: &str = "DATABASE_NAME";

/// Persistent settings for the socialgraph CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub connection: ConnectionSettings,
}

/// Where and how to reach the graph database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>, // None uses the server's default database
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        ConnectionSettings {
            uri: String::from("bolt://localhost:7687"),
            user: String::from("neo4j"),
            password: String::from("neo4j"),
            database: None,
        }
    }
}

/// Explicit overrides, usually taken from command line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub uri: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl ConnectionSettings {
    /// Overwrites fields for which `lookup` yields a value.
    ///
    /// `lookup` maps an environment variable name to its value; pass
    /// `|key| std::env::var(key).ok()` to read the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup(ENV_URI) {
            self.uri = uri;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        if let Some(password) = lookup(ENV_PASS) {
            self.password = password;
        }
        if let Some(database) = lookup(ENV_NAME) {
            self.database = Some(database);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(uri) = &overrides.uri {
            self.uri = uri.clone();
        }
        if let Some(user) = &overrides.user {
            self.user = user.clone();
        }
        if let Some(password) = &overrides.password {
            self.password = password.clone();
        }
        if let Some(database) = &overrides.database {
            self.database = Some(database.clone());
        }
    }
}

/// Returns the config directory under `base` without creating it.
pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

/// Returns the config directory under the current working directory.
pub fn config_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().map_err(|e| {
        Error::Config(format!("Failed to get current directory: {}", e))
    })?;
    Ok(config_dir_in(&current_dir))
}

/// Creates the configuration folder if missing.
pub fn create_config_folder(config_dir: &Path) -> Result<()> {
    fs::create_dir_all(config_dir).map_err(|e| {
        Error::Config(format!(
            "Failed to create config directory {:?}: {}",
            config_dir, e
        ))
    })
}

/// Writes configuration to a JSON file.
pub fn write_config(config: &Config, config_path: &Path) -> Result<()> {
    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_json)?;
    Ok(())
}

/// Reads configuration from the config directory, falling back to defaults.
pub fn read_config(config_dir: &Path) -> Result<Config> {
    let config_path = config_dir.join(CONFIG_FILE);
    if config_path.exists() {
        let config_json = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&config_json).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", config_path.display(), e))
        })?;
        return Ok(config);
    }
    Ok(Config::default())
}

/// Resolves the effective connection settings.
///
/// Later sources win: defaults, then the config file, then the process
/// environment, then `overrides`.
pub fn resolve(config_dir: &Path, overrides: &Overrides) -> Result<ConnectionSettings> {
    let mut settings = read_config(config_dir)?.connection;
    settings.apply_env(|key| env::var(key).ok());
    settings.apply_overrides(overrides);
    Ok(settings)
}

pub fn display_relative_path(path: &Path) -> String {
    match env::current_dir() {
        Ok(current_dir) => path
            .strip_prefix(&current_dir)
            .unwrap_or(path)
            .display()
            .to_string(),
        Err(_) => path.display().to_string(),
    }
}
