use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration loaded from teambuild.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Connection defaults for the hosted service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// The URI for the account (https://<account>.visualstudio.com) or
    /// project collection
    #[serde(default)]
    pub instance: Option<String>,
    /// Name or ID of the team project
    #[serde(default)]
    pub project: Option<String>,
    /// Personal access token
    #[serde(default)]
    pub token: Option<String>,
    /// Detect unsupplied values from the current working directory's repo
    #[serde(default = "default_detect")]
    pub detect: bool,
}

fn default_detect() -> bool {
    true
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout in seconds for API requests
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(path.clone(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.clone(), e))
    }

    /// Try to load config from teambuild.toml in the given directory,
    /// falling back to ~/.teambuild/config.toml
    pub fn load_from_dir(dir: &PathBuf) -> Result<Self, ConfigError> {
        let config_path = dir.join("teambuild.toml");
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home).join(".teambuild").join("config.toml");
            if home_path.exists() {
                return Self::load_from_file(&home_path);
            }
        }
        Ok(Self::default())
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        instance: Option<String>,
        project: Option<String>,
        token: Option<String>,
        detect: Option<bool>,
    ) -> Self {
        if instance.is_some() {
            self.connection.instance = instance;
        }
        if project.is_some() {
            self.connection.project = project;
        }
        if token.is_some() {
            self.connection.token = token;
        }
        if let Some(d) = detect {
            self.connection.detect = d;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.connection.instance.is_none());
        assert!(config.connection.project.is_none());
        assert!(config.connection.token.is_none());
        assert_eq!(config.http.timeout_seconds, 30);
    }

    #[test]
    fn test_detect_defaults_on() {
        // An empty [connection] section still detects from the working tree
        let config: Config = toml::from_str("[connection]\n").unwrap();
        assert!(config.connection.detect);
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(
            Some("https://fabrikam.visualstudio.com".to_string()),
            Some("Fabrikam".to_string()),
            None,
            Some(false),
        );
        assert_eq!(
            config.connection.instance.as_deref(),
            Some("https://fabrikam.visualstudio.com")
        );
        assert_eq!(config.connection.project.as_deref(), Some("Fabrikam"));
        assert!(!config.connection.detect);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[connection]
instance = "https://fabrikam.visualstudio.com"
project = "Fabrikam"
detect = false

[http]
timeout_seconds = 120
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.connection.instance.as_deref(),
            Some("https://fabrikam.visualstudio.com")
        );
        assert_eq!(config.connection.project.as_deref(), Some("Fabrikam"));
        assert!(!config.connection.detect);
        assert_eq!(config.http.timeout_seconds, 120);
    }
}
