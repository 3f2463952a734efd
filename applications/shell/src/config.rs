/// Shell configuration
use crate::error::{Result, ShellError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use todo_client::{ClientConfig, DEFAULT_API_URL};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "todo.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the REST backend
    #[serde(default = "default_api_url")]
    pub url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default `todo.toml` is optional.
    /// `TODO_API_URL` overrides the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let (config_path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        settings = settings.add_source(config::File::from(config_path).required(required));

        // Override with environment variables (prefixed with TODO_)
        settings = settings.add_source(
            config::Environment::with_prefix("TODO")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ShellError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ShellError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ShellError::Config(
                "API URL is required (set TODO_API_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ShellError::Config(format!(
                "API URL must start with http:// or https:// (got {:?})",
                url
            )));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.url.clone())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
