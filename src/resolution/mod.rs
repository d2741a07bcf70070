//! # Resolution Engine
//!
//! Classification, codec selection, per-parameter argument resolution and
//! endpoint assembly.
//!
//! ```text
//! EndpointAssembler ──► CallbackResolver ──► CallbackClassifier
//!                              │         └──► CodecResolver
//!                              ▼
//!                   ArgumentProviderRegistry
//! ```

pub mod callback_resolver;
pub mod classifier;
pub mod codec;
pub mod endpoint_assembler;

pub use callback_resolver::CallbackResolver;
pub use classifier::CallbackClassifier;
pub use codec::CodecResolver;
pub use endpoint_assembler::EndpointAssembler;
