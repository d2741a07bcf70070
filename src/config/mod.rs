//! # Resolver Configuration
//!
//! Naming conventions the resolution engine uses to recognise well-known types
//! and execution hints. Every field has a default, so an empty or missing
//! configuration file yields a working [`ResolverConfig`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use callback_resolver::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_file("config/callback-resolver.toml")
//!     .load()?;
//!
//! assert_eq!(config.types.reactive_stream, "Multi");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Type names with special meaning to classification and matching
    pub types: TypeConventions,

    /// Method annotations that select the execution model
    pub execution: ExecutionHints,
}

/// Type names recognised by the classifier and the built-in matchers.
///
/// Names are compared after erasure, so `Multi` matches `Multi<String>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConventions {
    pub reactive_single: String,
    pub reactive_stream: String,
    pub connection: String,
    pub handshake_request: String,
    pub close_reason: String,
    /// Payload types a text callback can receive without a codec
    pub raw_text: Vec<String>,
    /// Payload types a binary or pong callback can receive without a codec
    pub raw_binary: Vec<String>,
}

impl Default for TypeConventions {
    fn default() -> Self {
        Self {
            reactive_single: "Uni".to_string(),
            reactive_stream: "Multi".to_string(),
            connection: "WebSocketConnection".to_string(),
            handshake_request: "HandshakeRequest".to_string(),
            close_reason: "CloseReason".to_string(),
            raw_text: vec![
                "String".to_string(),
                "JsonObject".to_string(),
                "JsonArray".to_string(),
                "Buffer".to_string(),
            ],
            raw_binary: vec!["Buffer".to_string(), "byte[]".to_string()],
        }
    }
}

impl TypeConventions {
    #[must_use]
    pub fn is_raw_text(&self, name: &str) -> bool {
        self.raw_text.iter().any(|t| t == name)
    }

    #[must_use]
    pub fn is_raw_binary(&self, name: &str) -> bool {
        self.raw_binary.iter().any(|t| t == name)
    }
}

/// Annotation names that pin a callback's execution model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionHints {
    pub blocking: String,
    pub non_blocking: String,
    pub virtual_thread: String,
}

impl Default for ExecutionHints {
    fn default() -> Self {
        Self {
            blocking: "Blocking".to_string(),
            non_blocking: "NonBlocking".to_string(),
            virtual_thread: "RunOnVirtualThread".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Reject empty names; an empty name would silently match nothing.
    pub fn validate(&self) -> ConfigResult<()> {
        let named = [
            ("types.reactive_single", &self.types.reactive_single),
            ("types.reactive_stream", &self.types.reactive_stream),
            ("types.connection", &self.types.connection),
            ("types.handshake_request", &self.types.handshake_request),
            ("types.close_reason", &self.types.close_reason),
            ("execution.blocking", &self.execution.blocking),
            ("execution.non_blocking", &self.execution.non_blocking),
            ("execution.virtual_thread", &self.execution.virtual_thread),
        ];
        for (field, value) in named {
            if value.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    field,
                    value.as_str(),
                    "type and annotation names must not be empty",
                ));
            }
        }

        if self.types.reactive_single == self.types.reactive_stream {
            return Err(ConfigurationError::invalid_value(
                "types.reactive_stream",
                self.types.reactive_stream.as_str(),
                "reactive single and reactive stream types must differ",
            ));
        }

        for (field, list) in [
            ("types.raw_text", &self.types.raw_text),
            ("types.raw_binary", &self.types.raw_binary),
        ] {
            if list.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigurationError::invalid_value(
                    field,
                    list.join(","),
                    "raw payload type names must not be empty",
                ));
            }
        }

        Ok(())
    }
}
