//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, DEFAULT_API_URL, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["twin.toml", ".twin.toml"];

/// Environment variables that override `endpoint.api_url`, lowest priority first
const API_URL_ENV_VARS: [&str; 2] = ["NEXT_PUBLIC_API_URL", "TWIN_API_URL"];

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TWIN_API_URL` / `NEXT_PUBLIC_API_URL` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./twin.toml` or `./.twin.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/twin-chat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(Self::with_env(figment))
    }

    /// Load defaults plus environment overrides, skipping every file (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::extract(Self::with_env(figment))
    }

    fn with_env(mut figment: Figment) -> Figment {
        for var in API_URL_ENV_VARS {
            // An empty variable counts as unset
            if std::env::var(var).map_or(true, |v| v.trim().is_empty()) {
                continue;
            }
            figment = figment.merge(
                Env::raw()
                    .only(&[var])
                    .map(|_| "endpoint.api_url".into()),
            );
        }
        figment
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/twin-chat/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("twin-chat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        for var in API_URL_ENV_VARS.iter().rev() {
            match std::env::var(var) {
                Ok(value) => println!("  [SET  ] Env:     {}={}", var, value),
                Err(_) => println!("  [     ] Env:     {}", var),
            }
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./twin.toml or ./.twin.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults (api_url = {})", DEFAULT_API_URL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.endpoint.api_url, DEFAULT_API_URL);
            assert!(config.repl.show_progress);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("twin-chat"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "twin.toml",
                r#"
[endpoint]
api_url = "http://project:9000"

[display]
title = "Project Twin"
"#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.endpoint.api_url, "http://project:9000");
            assert_eq!(config.display.title, "Project Twin");
            assert!(config.display.color);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("twin.toml", "[endpoint]\napi_url = \"http://project:9000\"\n")?;
            jail.create_file("custom.toml", "[endpoint]\napi_url = \"http://custom:9001\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.endpoint.api_url, "http://custom:9001");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let result = ConfigLoader::load(Some(Path::new("does-not-exist.toml")));
            assert!(matches!(result, Err(ConfigError::NotFound(_))));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("twin.toml", "[endpoint]\napi_url = \"http://project:9000\"\n")?;
            jail.set_env("NEXT_PUBLIC_API_URL", "http://legacy:7000");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.endpoint.api_url, "http://legacy:7000");

            jail.set_env("TWIN_API_URL", "http://preferred:7001");
            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.endpoint.api_url, "http://preferred:7001");
            Ok(())
        });
    }

    #[test]
    fn test_env_applies_without_files() {
        Jail::expect_with(|jail| {
            jail.create_file("twin.toml", "[endpoint]\napi_url = \"http://project:9000\"\n")?;
            jail.set_env("TWIN_API_URL", "http://env-only:7002");

            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.endpoint.api_url, "http://env-only:7002");
            Ok(())
        });
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        Jail::expect_with(|jail| {
            jail.set_env("NEXT_PUBLIC_API_URL", "");
            jail.set_env("TWIN_API_URL", "   ");

            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.endpoint.api_url, DEFAULT_API_URL);
            Ok(())
        });
    }

    #[test]
    fn test_blank_env_keeps_file_value() {
        Jail::expect_with(|jail| {
            jail.create_file("twin.toml", "[endpoint]\napi_url = \"http://project:9000\"\n")?;
            jail.set_env("TWIN_API_URL", "");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.endpoint.api_url, "http://project:9000");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("twin.toml", "[endpoint]\napi_url = \"localhost:8000\"\n")?;

            let result = ConfigLoader::load(None);
            assert!(matches!(
                result,
                Err(ConfigError::Invalid(ConfigValidationError::UnsupportedScheme(_)))
            ));
            Ok(())
        });
    }
}
