//! # Resolution Errors
//!
//! Every failure the resolution engine can report. These are build-time
//! configuration defects in an endpoint class, never transient faults, so no
//! variant is retried or downgraded to a default.

use crate::models::{CallbackKind, ProviderCandidate};
use thiserror::Error;

/// Errors raised while resolving callbacks or assembling endpoint descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No registered matcher claimed the parameter.
    #[error(
        "Unable to inject @{kind} callback parameter '{parameter}' declared on {callback}: no injector found"
    )]
    NoProviderFound {
        kind: CallbackKind,
        parameter: String,
        callback: String,
    },

    /// Two or more matchers share the top priority for one parameter.
    #[error(
        "Unable to inject @{kind} callback parameter '{parameter}' declared on {callback}: ambiguous injectors found: [{}]",
        format_candidates(.candidates)
    )]
    AmbiguousProviders {
        kind: CallbackKind,
        parameter: String,
        callback: String,
        priority: i32,
        candidates: Vec<ProviderCandidate>,
    },

    /// A path-parameter argument names a variable absent from the endpoint path.
    #[error("@PathParam name [{name}] must be used in the endpoint path [{path}]: parameter '{parameter}' declared on {callback}")]
    InvalidPathParameterReference {
        name: String,
        path: String,
        parameter: String,
        callback: String,
    },

    /// A path-parameter argument has neither an explicit name nor a parameter name.
    #[error("Unable to determine the name of @PathParam parameter '{parameter}' declared on {callback}: set the annotation value explicitly")]
    MissingPathParameterName { parameter: String, callback: String },

    /// The endpoint path template cannot be parsed.
    #[error("Invalid endpoint path [{path}] on {endpoint}: {reason}")]
    InvalidPathTemplate {
        endpoint: String,
        path: String,
        reason: String,
    },

    /// Two methods of one endpoint class claim the same callback kind.
    #[error("Multiple @{kind} callbacks declared on {endpoint}: {first} and {second}")]
    DuplicateCallbackKind {
        endpoint: String,
        kind: CallbackKind,
        first: String,
        second: String,
    },

    /// One method carries more than one callback marker.
    #[error("{callback} declares conflicting callback annotations: {}", join_kinds(.kinds))]
    ConflictingCallbackAnnotations {
        callback: String,
        kinds: Vec<CallbackKind>,
    },

    /// A message callback has no parameter receiving the message payload.
    #[error("@{kind} callback {callback} must accept a message parameter")]
    MissingMessageParameter { kind: CallbackKind, callback: String },

    /// A message callback has more than one parameter receiving the message payload.
    #[error("@{kind} callback {callback} accepts more than one message parameter: {}", .parameters.join(", "))]
    MultipleMessageParameters {
        kind: CallbackKind,
        callback: String,
        parameters: Vec<String>,
    },
}

impl ResolutionError {
    /// Identity of the callback the error was raised for, if it concerns a single callback.
    #[must_use]
    pub fn callback(&self) -> Option<&str> {
        match self {
            Self::NoProviderFound { callback, .. }
            | Self::AmbiguousProviders { callback, .. }
            | Self::InvalidPathParameterReference { callback, .. }
            | Self::MissingPathParameterName { callback, .. }
            | Self::ConflictingCallbackAnnotations { callback, .. }
            | Self::MissingMessageParameter { callback, .. }
            | Self::MultipleMessageParameters { callback, .. } => Some(callback),
            Self::InvalidPathTemplate { .. } | Self::DuplicateCallbackKind { .. } => None,
        }
    }

    /// Short machine-friendly name of the error kind, used in structured logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::NoProviderFound { .. } => "no_provider_found",
            Self::AmbiguousProviders { .. } => "ambiguous_providers",
            Self::InvalidPathParameterReference { .. } => "invalid_path_parameter_reference",
            Self::MissingPathParameterName { .. } => "missing_path_parameter_name",
            Self::InvalidPathTemplate { .. } => "invalid_path_template",
            Self::DuplicateCallbackKind { .. } => "duplicate_callback_kind",
            Self::ConflictingCallbackAnnotations { .. } => "conflicting_callback_annotations",
            Self::MissingMessageParameter { .. } => "missing_message_parameter",
            Self::MultipleMessageParameters { .. } => "multiple_message_parameters",
        }
    }
}

fn format_candidates(candidates: &[ProviderCandidate]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_kinds(kinds: &[CallbackKind]) -> String {
    kinds
        .iter()
        .map(|k| format!("@{k}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
