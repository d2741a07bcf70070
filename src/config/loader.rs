//! Configuration Loader
//!
//! Layers an optional configuration file (TOML, YAML or JSON, picked by
//! extension) under environment overrides such as
//! `CALLBACK_RESOLVER__TYPES__CONNECTION=Session`, then validates the result.

use super::error::{ConfigResult, ConfigurationError};
use super::ResolverConfig;
use crate::constants::env;
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Builder-style loader for [`ResolverConfig`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    /// Replaces the process environment; used by tests.
    env_overrides: Option<HashMap<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: None,
            env_overrides: None,
        }
    }

    /// Read this file before applying environment overrides. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Use `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_overrides(mut self, vars: HashMap<String, String>) -> Self {
        self.env_overrides = Some(vars);
        self
    }

    /// Load, merge and validate.
    pub fn load(&self) -> ConfigResult<ResolverConfig> {
        let mut builder = Config::builder();
        let mut source_name = "defaults".to_string();

        if let Some(path) = &self.file {
            if !path.is_file() {
                return Err(ConfigurationError::config_file_not_found(path.clone()));
            }
            debug!(file = %path.display(), "Loading resolver configuration file");
            source_name = path.display().to_string();
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(env::CONFIG_PREFIX)
                .separator(env::CONFIG_SEPARATOR)
                .source(self.env_overrides.clone()),
        );

        let config: ResolverConfig = builder
            .build()
            .and_then(|c| c.try_deserialize::<ResolverConfig>())
            .map_err(|e| ConfigurationError::parse_error(source_name.as_str(), e))?;

        config.validate()?;

        debug!(
            source = %source_name,
            config = %serde_json::to_string(&config)
                .unwrap_or_else(|_| "[serialization error]".to_string()),
            "Resolver configuration loaded"
        );

        Ok(config)
    }
}
