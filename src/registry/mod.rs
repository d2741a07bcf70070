//! # Registry Infrastructure
//!
//! Pluggable argument providers for callback parameters.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── ParameterMatcher          (strategy trait, one per provider kind)
//! ├── ArgumentProviderRegistry  (ordered matcher set, priority-sorted claims)
//! └── matchers/
//!     ├── PathParamMatcher         (Priority 100: PathParam annotation)
//!     ├── ConnectionMatcher        (Priority 50: connection handle type)
//!     ├── HandshakeRequestMatcher  (Priority 50: handshake request type)
//!     ├── CloseReasonMatcher       (Priority 50: close reason in OnClose)
//!     ├── RawMessageMatcher        (Priority 20: raw payload types)
//!     └── DecodedMessageMatcher    (Priority 10: decoded payload)
//! ```

pub mod argument_registry;
pub mod matchers;
pub mod parameter_matcher;

pub use argument_registry::{ArgumentProviderRegistry, RegistryStats};
pub use parameter_matcher::{Claim, MatcherCandidate, ParameterContext, ParameterMatcher};
