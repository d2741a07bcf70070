//! # Parameter Matchers
//!
//! A parameter matcher is a pluggable rule that claims responsibility for
//! supplying the runtime value of one callback parameter.
//!
//! ## Example: Custom Matcher
//!
//! ```rust,ignore
//! use callback_resolver::registry::{ParameterContext, ParameterMatcher};
//!
//! #[derive(Debug)]
//! struct UserIdMatcher;
//!
//! impl ParameterMatcher for UserIdMatcher {
//!     fn matcher_name(&self) -> &str {
//!         "UserIdMatcher"
//!     }
//!
//!     fn priority(&self) -> i32 {
//!         100 // annotation-driven, same rank as path parameters
//!     }
//!
//!     fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
//!         Ok(context.has_annotation("UserId"))
//!     }
//! }
//! ```

use crate::constants::priorities;
use crate::error::Result;
use crate::models::{
    Annotation, CallbackKind, Classification, Parameter, PathTemplate, ProviderCandidate, TypeRef,
};
use std::fmt;
use std::sync::Arc;

/// Everything a matcher may inspect about one parameter.
///
/// Built once per parameter and shared by reference with every matcher.
#[derive(Debug, Clone, Copy)]
pub struct ParameterContext<'a> {
    pub parameter: &'a Parameter,
    pub kind: CallbackKind,
    pub callback_annotation: &'a Annotation,
    pub classification: &'a Classification,
    pub endpoint_path: &'a PathTemplate,
    /// `Class#method()` of the enclosing callback
    pub callback: &'a str,
}

impl<'a> ParameterContext<'a> {
    #[must_use]
    pub fn declared_type(&self) -> &'a TypeRef {
        &self.parameter.declared_type
    }

    #[must_use]
    pub fn parameter_annotations(&self) -> &'a [Annotation] {
        &self.parameter.annotations
    }

    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.parameter.has_annotation(name)
    }

    #[must_use]
    pub fn accepts_message(&self) -> bool {
        self.classification.accepts_message()
    }

    #[must_use]
    pub fn accepts_binary_payload(&self) -> bool {
        self.classification.accepts_binary_payload()
    }
}

/// A non-declining answer from a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub priority: i32,
    /// Matcher-specific detail forwarded into the resolved argument
    pub binding: Option<String>,
}

impl Claim {
    #[must_use]
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            binding: None,
        }
    }

    #[must_use]
    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }
}

/// Strategy trait for supplying callback arguments.
///
/// ## Matcher Responsibilities
///
/// - **DO**: Decline (`Ok(false)`) when the applicability condition fails
/// - **DO**: Fail (`Err`) when the parameter is clearly meant for you but is
///   malformed, e.g. a path parameter naming an unknown variable
/// - **DON'T**: Depend on how other parameters were resolved
/// - **DON'T**: Mutate state; matchers are shared across threads
///
/// ## Priority System
///
/// Higher priorities win. Marker-annotated matchers rank above structural,
/// type-only matchers. See [`priorities`].
pub trait ParameterMatcher: Send + Sync + fmt::Debug {
    /// Unique, descriptive name used in diagnostics and resolved arguments.
    fn matcher_name(&self) -> &str;

    /// Fixed priority of every claim this matcher makes.
    fn priority(&self) -> i32 {
        priorities::DEFAULT
    }

    /// Whether the supplied value is the message payload.
    fn provides_message(&self) -> bool {
        false
    }

    /// Applicability check.
    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool>;

    /// Claim the parameter or decline it.
    ///
    /// The default claims with [`priority`](Self::priority) whenever
    /// [`matches`](Self::matches) holds. Override to attach a binding.
    fn claim(&self, context: &ParameterContext<'_>) -> Result<Option<Claim>> {
        Ok(self
            .matches(context)?
            .then(|| Claim::new(self.priority())))
    }
}

/// A matcher together with the claim it made for one parameter.
#[derive(Debug, Clone)]
pub struct MatcherCandidate {
    pub matcher: Arc<dyn ParameterMatcher>,
    pub claim: Claim,
}

impl MatcherCandidate {
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.claim.priority
    }

    #[must_use]
    pub fn matcher_name(&self) -> &str {
        self.matcher.matcher_name()
    }

    #[must_use]
    pub fn to_provider_candidate(&self) -> ProviderCandidate {
        ProviderCandidate::new(self.matcher_name(), self.priority())
    }
}
