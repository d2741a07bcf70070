//! # Path Parameter Matcher
//!
//! Supplies the value of an endpoint path variable to a parameter marked with
//! `PathParam`. The variable name is the annotation's `value` member, or the
//! parameter name when the member is absent.
//!
//! ## Priority
//!
//! Priority: **100** (explicit marker annotation)

use crate::constants::{annotations, members, priorities};
use crate::error::{ResolutionError, Result};
use crate::registry::{Claim, ParameterContext, ParameterMatcher};
use tracing::warn;

#[derive(Debug, Default, Clone, Copy)]
pub struct PathParamMatcher;

impl PathParamMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The path variable a parameter refers to.
    fn variable_name(context: &ParameterContext<'_>) -> Result<String> {
        let explicit = context
            .parameter
            .annotation(annotations::PATH_PARAM)
            .and_then(|a| a.string_value(members::VALUE));

        explicit
            .or(context.parameter.name.as_deref())
            .map(str::to_string)
            .ok_or_else(|| {
                let error = ResolutionError::MissingPathParameterName {
                    parameter: context.parameter.display_name(),
                    callback: context.callback.to_string(),
                };
                warn!(
                    error = error.kind_name(),
                    callback = context.callback,
                    "Path parameter has no variable name"
                );
                error
            })
    }
}

impl ParameterMatcher for PathParamMatcher {
    fn matcher_name(&self) -> &str {
        "PathParamMatcher"
    }

    fn priority(&self) -> i32 {
        priorities::ANNOTATED
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(self.claim(context)?.is_some())
    }

    fn claim(&self, context: &ParameterContext<'_>) -> Result<Option<Claim>> {
        if !context.has_annotation(annotations::PATH_PARAM) {
            return Ok(None);
        }

        let name = Self::variable_name(context)?;
        if !context.endpoint_path.contains(&name) {
            let error = ResolutionError::InvalidPathParameterReference {
                name,
                path: context.endpoint_path.to_string(),
                parameter: context.parameter.display_name(),
                callback: context.callback.to_string(),
            };
            warn!(
                error = error.kind_name(),
                callback = context.callback,
                parameter = %context.parameter.display_name(),
                path = %context.endpoint_path,
                "Path parameter does not occur in the endpoint path"
            );
            return Err(error);
        }

        Ok(Some(Claim::new(self.priority()).with_binding(name)))
    }
}
