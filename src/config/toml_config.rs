use crate::core::assets::{DEFAULT_ASSET_BASE, DEFAULT_ASSET_EXTENSION};
use crate::core::controller::DEFAULT_PLACEHOLDER;
use crate::core::ConfigProvider;
use crate::utils::error::{PlanetError, Result};
use crate::utils::validation::{
    validate_extension, validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// An absent `base_url` deserializes empty and is reported by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_asset_base")]
    pub base_path: String,
    #[serde(default = "default_asset_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_asset_base() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

fn default_asset_extension() -> String {
    DEFAULT_ASSET_EXTENSION.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: default_asset_base(),
            extension: default_asset_extension(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_seconds: None,
            },
            assets: AssetConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanetError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlanetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlanetError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.server.base_url.trim().is_empty() {
            return Err(PlanetError::MissingConfigError {
                field: "server.base_url".to_string(),
            });
        }
        validate_url("server.base_url", &self.server.base_url)?;

        if let Some(timeout) = self.server.timeout_seconds {
            validate_range("server.timeout_seconds", timeout, 1, 300)?;
        }

        validate_non_empty_string("assets.base_path", &self.assets.base_path)?;
        validate_extension("assets.extension", &self.assets.extension)?;
        validate_non_empty_string("page.placeholder", &self.page.placeholder)?;

        Ok(())
    }

    /// Command line flags win over the file.
    #[cfg(feature = "cli")]
    pub fn with_cli_overrides(mut self, cli: &crate::config::CliConfig) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.server.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.server.timeout_seconds = Some(timeout);
        }
        if let Some(base_path) = &cli.asset_base {
            self.assets.base_path = base_path.clone();
        }
        if let Some(extension) = &cli.asset_extension {
            self.assets.extension = extension.clone();
        }
        self
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.server.timeout_seconds
    }

    fn asset_base(&self) -> &str {
        &self.assets.base_path
    }

    fn asset_extension(&self) -> &str {
        &self.assets.extension
    }

    fn placeholder(&self) -> &str {
        &self.page.placeholder
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
