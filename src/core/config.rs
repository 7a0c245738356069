use std::path::PathBuf;
use tracing::debug;

use crate::core::context::ContextOptions;
use crate::error::TeamBuildError;
use crate::models::Config;

/// Load configuration from the working directory with CLI overrides applied.
///
/// The token falls back to the TEAMBUILD_TOKEN environment variable when
/// neither the CLI nor the config file supplies one.
pub fn load_config(
    dir: &PathBuf,
    instance: Option<String>,
    project: Option<String>,
    token: Option<String>,
    detect: Option<bool>,
) -> Result<Config, TeamBuildError> {
    let config = Config::load_from_dir(dir)?;
    let mut config = config.with_overrides(instance, project, token, detect);

    if config.connection.token.is_none() {
        config.connection.token = std::env::var("TEAMBUILD_TOKEN").ok();
    }

    debug!(
        "Configuration loaded: instance={:?}, project={:?}, detect={}, timeout={}s",
        config.connection.instance,
        config.connection.project,
        config.connection.detect,
        config.http.timeout_seconds
    );

    Ok(config)
}

impl Config {
    /// Connection values to feed into context resolution.
    pub fn context_options(&self) -> ContextOptions {
        ContextOptions {
            instance: self.connection.instance.clone(),
            project: self.connection.project.clone(),
            detect: self.connection.detect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_default() {
        let temp_dir = TempDir::new().unwrap();
        let config =
            load_config(&temp_dir.path().to_path_buf(), None, None, None, None).unwrap();

        assert!(config.connection.instance.is_none());
        assert!(config.connection.detect);
        assert_eq!(config.http.timeout_seconds, 30);
    }

    #[test]
    fn test_load_config_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("teambuild.toml");

        fs::write(
            &config_path,
            r#"
[connection]
instance = "https://fabrikam.visualstudio.com"
project = "Fabrikam"
"#,
        )
        .unwrap();

        let config =
            load_config(&temp_dir.path().to_path_buf(), None, None, None, None).unwrap();

        assert_eq!(
            config.connection.instance.as_deref(),
            Some("https://fabrikam.visualstudio.com")
        );
        assert_eq!(config.connection.project.as_deref(), Some("Fabrikam"));
    }

    #[test]
    fn test_load_config_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("teambuild.toml");

        fs::write(
            &config_path,
            r#"
[connection]
instance = "https://fabrikam.visualstudio.com"
project = "Fabrikam"
"#,
        )
        .unwrap();

        let config = load_config(
            &temp_dir.path().to_path_buf(),
            Some("https://other.visualstudio.com".to_string()),
            None,
            None,
            Some(false),
        )
        .unwrap();

        assert_eq!(
            config.connection.instance.as_deref(),
            Some("https://other.visualstudio.com")
        );
        assert_eq!(config.connection.project.as_deref(), Some("Fabrikam"));
        assert!(!config.connection.detect);
    }
}
