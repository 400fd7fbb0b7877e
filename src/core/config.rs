//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! All configuration is validated at startup so a misconfigured runner fails
//! before the first request is sent. Account credentials may also come from
//! the environment (`PETFRIENDS_EMAIL` / `PETFRIENDS_PASSWORD`), which takes
//! precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Base URL of the live PetFriends service
const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 25;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccountConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Account credentials used to obtain an API key from the service
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Application configuration loaded from TOML files
///
/// All configuration values are loaded and validated at startup to ensure
/// the runner fails fast if misconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    /// PetFriends API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Logging level
    pub log_level: String,

    /// Account credentials for the test account
    pub credentials: Credentials,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the TOML file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Config {
            base_url: config.service.base_url,
            request_timeout: config.service.request_timeout,
            log_level: config.log_level,
            credentials: Credentials {
                email: config.account.email,
                password: config.account.password,
            },
        })
    }

    /// Load configuration from the config file and environment
    ///
    /// Looks for config.toml in the current directory unless `CONFIG_PATH`
    /// points elsewhere, then applies environment overrides.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = Self::from_file(config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `PETFRIENDS_*` environment overrides on top of file values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("PETFRIENDS_BASE_URL") {
            self.base_url = value;
        }
        if let Ok(value) = std::env::var("PETFRIENDS_EMAIL") {
            self.credentials.email = value;
        }
        if let Ok(value) = std::env::var("PETFRIENDS_PASSWORD") {
            self.credentials.password = value;
        }
    }

    /// Validate account credentials
    ///
    /// The service identifies accounts by email, so the email must at least
    /// look like one; the password only has to be non-empty.
    pub fn validate_credentials(&self) -> bool {
        self.credentials.email.contains('@') && !self.credentials.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            log_level = "debug"

            [service]
            base_url = "https://petfriends.example.org"
            request_timeout = 10

            [account]
            email = "tester@example.com"
            password = "hunter2"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://petfriends.example.org");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.credentials.email, "tester@example.com");
        assert_eq!(config.credentials.password, "hunter2");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[account]\nemail = \"t@example.com\"\npassword = \"pw\"\n").unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides_take_precedence_over_the_file() {
        let file = create_test_config();
        let mut config = Config::from_file(file.path()).unwrap();

        // Unset variables leave the file values alone
        config.apply_env_overrides();
        assert_eq!(config.base_url, "https://petfriends.example.org");
        assert_eq!(config.credentials.email, "tester@example.com");

        // Mutating the environment is unsafe since edition 2024; this is
        // the only test touching these variables.
        unsafe {
            std::env::set_var("PETFRIENDS_BASE_URL", "https://staging.example.org");
            std::env::set_var("PETFRIENDS_EMAIL", "env@example.com");
            std::env::set_var("PETFRIENDS_PASSWORD", "env-secret");
        }
        config.apply_env_overrides();
        unsafe {
            std::env::remove_var("PETFRIENDS_BASE_URL");
            std::env::remove_var("PETFRIENDS_EMAIL");
            std::env::remove_var("PETFRIENDS_PASSWORD");
        }

        assert_eq!(config.base_url, "https://staging.example.org");
        assert_eq!(config.credentials.email, "env@example.com");
        assert_eq!(config.credentials.password, "env-secret");
    }

    #[test]
    fn test_validate_credentials() {
        let file = create_test_config();
        let mut config = Config::from_file(file.path()).unwrap();
        assert!(config.validate_credentials());

        config.credentials.email = "not-an-email".to_string();
        assert!(!config.validate_credentials());

        config.credentials.email = "tester@example.com".to_string();
        config.credentials.password = String::new();
        assert!(!config.validate_credentials());
    }
}
