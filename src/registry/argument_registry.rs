//! # Argument Provider Registry
//!
//! The ordered set of parameter matchers, queried once per callback parameter.
//!
//! ## Matching Flow
//!
//! ```text
//! ParameterContext ──► every matcher, in registration order
//!                          │
//!                          ├── declined  → dropped
//!                          ├── claimed   → kept with its priority
//!                          └── failed    → error returned immediately
//!                          │
//!                          ▼
//!                stable sort, highest priority first
//! ```
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use callback_resolver::registry::{ArgumentProviderRegistry, matchers::*};
//! use std::sync::Arc;
//!
//! let registry = ArgumentProviderRegistry::new()
//!     .with_matcher(Arc::new(PathParamMatcher::new()))
//!     .with_matcher(Arc::new(ConnectionMatcher::new("WebSocketConnection")))
//!     .with_matcher(Arc::new(DecodedMessageMatcher::new()));
//!
//! let candidates = registry.find_matching(&context)?;
//! ```

use super::matchers::{
    CloseReasonMatcher, ConnectionMatcher, DecodedMessageMatcher, HandshakeRequestMatcher,
    PathParamMatcher, RawMessageMatcher,
};
use super::parameter_matcher::{MatcherCandidate, ParameterContext, ParameterMatcher};
use crate::config::ResolverConfig;
use crate::error::Result;
use std::sync::Arc;
use tracing::trace;

/// Registry of parameter matchers.
///
/// ## Thread Safety
///
/// `ArgumentProviderRegistry` is `Send + Sync` since it only holds `Arc`
/// references to matchers, and querying it never mutates anything. Build it
/// once, then share it read-only.
#[derive(Debug, Default, Clone)]
pub struct ArgumentProviderRegistry {
    /// Matchers in registration order
    matchers: Vec<Arc<dyn ParameterMatcher>>,
}

impl ArgumentProviderRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in matcher, configured from `config`.
    #[must_use]
    pub fn builtin(config: &ResolverConfig) -> Self {
        let types = &config.types;
        Self::new()
            .with_matcher(Arc::new(PathParamMatcher::new()))
            .with_matcher(Arc::new(ConnectionMatcher::from_conventions(types)))
            .with_matcher(Arc::new(HandshakeRequestMatcher::from_conventions(types)))
            .with_matcher(Arc::new(CloseReasonMatcher::from_conventions(types)))
            .with_matcher(Arc::new(RawMessageMatcher::from_conventions(types)))
            .with_matcher(Arc::new(DecodedMessageMatcher::new()))
    }

    /// Add a matcher (builder pattern).
    #[must_use]
    pub fn with_matcher(mut self, matcher: Arc<dyn ParameterMatcher>) -> Self {
        self.add_matcher(matcher);
        self
    }

    /// Add a matcher to an existing registry.
    pub fn add_matcher(&mut self, matcher: Arc<dyn ParameterMatcher>) {
        self.matchers.push(matcher);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Matcher names in registration order.
    #[must_use]
    pub fn matcher_names(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.matcher_name()).collect()
    }

    #[must_use]
    pub fn has_matcher(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matcher_name() == name)
    }

    /// Query every matcher exactly once and return the claims, highest
    /// priority first. Equal priorities keep registration order.
    ///
    /// A matcher failure aborts the query and is returned as-is.
    pub fn find_matching(&self, context: &ParameterContext<'_>) -> Result<Vec<MatcherCandidate>> {
        let mut candidates = Vec::new();

        for matcher in &self.matchers {
            match matcher.claim(context)? {
                Some(claim) => {
                    trace!(
                        matcher = matcher.matcher_name(),
                        priority = claim.priority,
                        parameter = %context.parameter.display_name(),
                        "Matcher claimed parameter"
                    );
                    candidates.push(MatcherCandidate {
                        matcher: Arc::clone(matcher),
                        claim,
                    });
                }
                None => {
                    trace!(
                        matcher = matcher.matcher_name(),
                        parameter = %context.parameter.display_name(),
                        "Matcher declined parameter"
                    );
                }
            }
        }

        // sort_by is stable
        candidates.sort_by(|a, b| b.priority().cmp(&a.priority()));
        Ok(candidates)
    }

    /// Get statistics about the registered matchers.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            matcher_count: self.matchers.len(),
            matcher_names: self
                .matcher_names()
                .into_iter()
                .map(String::from)
                .collect(),
            priorities: self.matchers.iter().map(|m| m.priority()).collect(),
        }
    }
}

/// Statistics about a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of registered matchers
    pub matcher_count: usize,

    /// Names of matchers in registration order
    pub matcher_names: Vec<String>,

    /// Priorities of matchers in registration order
    pub priorities: Vec<i32>,
}
