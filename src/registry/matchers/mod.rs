//! # Built-in Parameter Matchers
//!
//! | Priority | Matcher | Claims |
//! |----------|---------|--------|
//! | 100 | `PathParamMatcher` | parameters marked `PathParam` |
//! | 50 | `ConnectionMatcher` | the connection handle type |
//! | 50 | `HandshakeRequestMatcher` | the handshake request type |
//! | 50 | `CloseReasonMatcher` | the close reason type in `OnClose` |
//! | 20 | `RawMessageMatcher` | raw payload types in message callbacks |
//! | 10 | `DecodedMessageMatcher` | any other unannotated message parameter |
//!
//! Hosts add their own matchers with
//! [`ArgumentProviderRegistry::with_matcher`](crate::registry::ArgumentProviderRegistry::with_matcher).

mod message;
mod path_param;
mod structural;

pub use message::{DecodedMessageMatcher, RawMessageMatcher};
pub use path_param::PathParamMatcher;
pub use structural::{CloseReasonMatcher, ConnectionMatcher, HandshakeRequestMatcher};
