//! # Message Matchers
//!
//! Supply the message payload to an unannotated parameter of a text, binary or
//! pong callback. The raw matcher hands over wire-level types without a codec;
//! the decoded matcher is the catch-all that routes everything else through
//! the callback's input codec.
//!
//! ## Priority
//!
//! - `RawMessageMatcher`: **20**
//! - `DecodedMessageMatcher`: **10**

use crate::config::TypeConventions;
use crate::constants::priorities;
use crate::error::Result;
use crate::registry::{ParameterContext, ParameterMatcher};

/// Supplies the payload as received, for raw text or binary payload types.
#[derive(Debug, Clone)]
pub struct RawMessageMatcher {
    types: TypeConventions,
}

impl RawMessageMatcher {
    #[must_use]
    pub fn new(types: TypeConventions) -> Self {
        Self { types }
    }

    #[must_use]
    pub fn from_conventions(types: &TypeConventions) -> Self {
        Self::new(types.clone())
    }
}

impl ParameterMatcher for RawMessageMatcher {
    fn matcher_name(&self) -> &str {
        "RawMessageMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::RAW_MESSAGE
    }

    fn provides_message(&self) -> bool {
        true
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        if !context.accepts_message() || !context.parameter_annotations().is_empty() {
            return Ok(false);
        }

        let name = &context.declared_type().name;
        Ok(if context.accepts_binary_payload() {
            self.types.is_raw_binary(name)
        } else {
            self.types.is_raw_text(name)
        })
    }
}

/// Supplies the payload decoded into the parameter's declared type.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodedMessageMatcher;

impl DecodedMessageMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ParameterMatcher for DecodedMessageMatcher {
    fn matcher_name(&self) -> &str {
        "DecodedMessageMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::DECODED_MESSAGE
    }

    fn provides_message(&self) -> bool {
        true
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.accepts_message() && context.parameter_annotations().is_empty())
    }
}
