use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE_NAME: &str = "jellyadmin.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Address of the server, e.g. "http://192.168.1.20:8096".
    pub server_url: String,
    /// Api key or session token of an administrator.
    pub access_token: String,
    /// Device opened at startup if none is given on the command line.
    pub device_id: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Debug level logging if true and no log_level is set.
    pub debug: Option<bool>,
}

/// Log level understood by the configuration, independent of the logger crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Trace,
}

impl Config {
    pub fn new(server_url: String, access_token: String) -> Self {
        Self {
            server_url,
            access_token,
            device_id: None,
            log_level: None,
            debug: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        config.check()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing configuration file");
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.server_url.is_empty() {
            return Err(ConfigError::InvalidField(
                "server_url",
                "Must not be empty".to_string(),
            ));
        }
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::InvalidField(
                "server_url",
                format!("'{}' is not an http(s) url", self.server_url),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.to_lowercase().as_ref() {
                "info" => Ok(LogLevel::Info),
                "debug" => Ok(LogLevel::Debug),
                "trace" => Ok(LogLevel::Trace),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(LogLevel::Debug)
        } else {
            Ok(LogLevel::Info)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
    Unexpected(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Get the absolute path to the jellyadmin data directory.
///
/// This a "Jellyadmin" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.jellyadmin`. The log file lives next to the
/// configuration file.
pub fn default_datadir() -> Result<PathBuf, ConfigError> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".jellyadmin");

        #[cfg(not(target_os = "linux"))]
        path.push("Jellyadmin");

        return Ok(path);
    }

    Err(ConfigError::Unexpected(
        "Failed to get default data directory".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_config() {
        let toml_str = r#"
            server_url = "http://192.168.1.20:8096"
            access_token = "f2d4c7a1b9e84e0f"
            device_id = "8c9e1f2a"
            log_level = "debug"
            "#
        .trim_start()
        .replace("            ", "");
        let config = toml::from_str::<Config>(&toml_str).expect("Deserializing toml_str");
        config.check().unwrap();
        assert_eq!(config.device_id.as_deref(), Some("8c9e1f2a"));
        assert_eq!(config.log_level(), Ok(LogLevel::Debug));

        // Optional fields can be omitted.
        let toml_str = r#"
            server_url = "https://media.example.org"
            access_token = "f2d4c7a1b9e84e0f"
            "#
        .trim_start()
        .replace("            ", "");
        let config = toml::from_str::<Config>(&toml_str).expect("Deserializing toml_str");
        assert_eq!(config.device_id, None);
        assert_eq!(config.log_level(), Ok(LogLevel::Info));

        // The access token is mandatory.
        let toml_str = r#"
            server_url = "https://media.example.org"
            "#
        .trim_start()
        .replace("            ", "");
        toml::from_str::<Config>(&toml_str).expect_err("Missing access_token");
    }

    #[test]
    fn log_level() {
        let mut config = Config::new(
            "http://localhost:8096".to_string(),
            "token".to_string(),
        );
        config.debug = Some(true);
        assert_eq!(config.log_level(), Ok(LogLevel::Debug));
        config.log_level = Some("TRACE".to_string());
        assert_eq!(config.log_level(), Ok(LogLevel::Trace));
        config.log_level = Some("verbose".to_string());
        assert_eq!(
            config.log_level(),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'verbose'".to_string()
            ))
        );
    }

    #[test]
    fn invalid_server_url() {
        let config = Config::new("192.168.1.20:8096".to_string(), "token".to_string());
        assert!(matches!(
            config.check(),
            Err(ConfigError::InvalidField("server_url", _))
        ));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));

        let mut config = Config::new(
            "http://localhost:8096".to_string(),
            "token".to_string(),
        );
        config.device_id = Some("8c9e1f2a".to_string());
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path), Ok(config));
    }
}
