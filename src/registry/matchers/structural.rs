//! # Structural Matchers
//!
//! Type-driven matchers that supply runtime handles: the connection, the
//! handshake request, and the close reason of an `OnClose` callback.
//!
//! ## Priority
//!
//! Priority: **50** (below marker annotations, above message payloads)

use crate::config::TypeConventions;
use crate::constants::priorities;
use crate::error::Result;
use crate::registry::{ParameterContext, ParameterMatcher};

/// Supplies the connection handle.
#[derive(Debug, Clone)]
pub struct ConnectionMatcher {
    type_name: String,
}

impl ConnectionMatcher {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn from_conventions(types: &TypeConventions) -> Self {
        Self::new(types.connection.as_str())
    }
}

impl ParameterMatcher for ConnectionMatcher {
    fn matcher_name(&self) -> &str {
        "ConnectionMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::STRUCTURAL
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.declared_type().is(&self.type_name))
    }
}

/// Supplies the initial handshake request.
#[derive(Debug, Clone)]
pub struct HandshakeRequestMatcher {
    type_name: String,
}

impl HandshakeRequestMatcher {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn from_conventions(types: &TypeConventions) -> Self {
        Self::new(types.handshake_request.as_str())
    }
}

impl ParameterMatcher for HandshakeRequestMatcher {
    fn matcher_name(&self) -> &str {
        "HandshakeRequestMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::STRUCTURAL
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.declared_type().is(&self.type_name))
    }
}

/// Supplies the close reason; only `OnClose` callbacks have one.
#[derive(Debug, Clone)]
pub struct CloseReasonMatcher {
    type_name: String,
}

impl CloseReasonMatcher {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn from_conventions(types: &TypeConventions) -> Self {
        Self::new(types.close_reason.as_str())
    }
}

impl ParameterMatcher for CloseReasonMatcher {
    fn matcher_name(&self) -> &str {
        "CloseReasonMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::STRUCTURAL
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.kind.is_on_close() && context.declared_type().is(&self.type_name))
    }
}
