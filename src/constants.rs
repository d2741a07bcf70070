//! # Constants
//!
//! Annotation names, annotation members and matcher priorities shared by the
//! resolution engine. Callback marker names live on
//! [`CallbackKind`](crate::models::CallbackKind).

/// Parameter and method annotation names
pub mod annotations {
    pub const PATH_PARAM: &str = "PathParam";
}

/// Members read from annotations
pub mod members {
    /// Explicit name on a path-parameter annotation
    pub const VALUE: &str = "value";
    pub const BROADCAST: &str = "broadcast";
    pub const CODEC: &str = "codec";
    pub const OUTPUT_CODEC: &str = "outputCodec";
}

/// Priorities of the built-in matchers. Higher wins.
///
/// | Priority | Matcher |
/// |----------|---------|
/// | 100 | `PathParamMatcher` (explicit marker annotation) |
/// | 50 | `ConnectionMatcher`, `HandshakeRequestMatcher`, `CloseReasonMatcher` |
/// | 20 | `RawMessageMatcher` |
/// | 10 | `DecodedMessageMatcher` (catch-all for message callbacks) |
pub mod priorities {
    pub const ANNOTATED: i32 = 100;
    pub const STRUCTURAL: i32 = 50;
    pub const RAW_MESSAGE: i32 = 20;
    pub const DECODED_MESSAGE: i32 = 10;
    /// Default for host-contributed matchers that do not override `priority()`
    pub const DEFAULT: i32 = STRUCTURAL;
}

/// Environment variables read at startup
pub mod env {
    pub const ENVIRONMENT: &str = "CALLBACK_RESOLVER_ENV";
    pub const FALLBACK_ENVIRONMENT: &str = "APP_ENV";
    pub const LOG_FORMAT: &str = "CALLBACK_RESOLVER_LOG_FORMAT";
    /// Prefix for configuration overrides, e.g. `CALLBACK_RESOLVER__TYPES__CONNECTION`
    pub const CONFIG_PREFIX: &str = "CALLBACK_RESOLVER";
    pub const CONFIG_SEPARATOR: &str = "__";
}
