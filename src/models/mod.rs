//! # Models
//!
//! Immutable value types for the resolution engine.
//!
//! - [`signature`] - the method/parameter/type/annotation view consumed as input
//! - [`path_template`] - parsed endpoint paths
//! - [`callback`] - callback kinds, classifications, codecs and resolved arguments
//! - [`endpoint`] - endpoint classes and the descriptors handed to code generation

pub mod callback;
pub mod endpoint;
pub mod path_template;
pub mod signature;

pub use callback::{
    Callback, CallbackKind, Classification, CodecRef, CodecSelection, ExecutionModel, MessageKind,
    ProviderCandidate, ResolvedArgument, ReturnShape,
};
pub use endpoint::{EndpointClass, EndpointDescriptor, ExecutionMode};
pub use path_template::PathTemplate;
pub use signature::{Annotation, AnnotationValue, MethodSignature, Parameter, TypeKind, TypeRef};
