#![allow(clippy::doc_markdown)] // Allow technical terms like WebSocket, OnTextMessage in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Callback Resolver
//!
//! Build-time resolution of WebSocket endpoint callbacks.
//!
//! ## Overview
//!
//! An endpoint class declares up to five callbacks (`OnOpen`, `OnTextMessage`,
//! `OnBinaryMessage`, `OnPongMessage`, `OnClose`). For each of them this crate
//! decides which runtime value feeds every declared parameter, how an incoming
//! payload is decoded and how a return value is encoded. The result is an
//! immutable [`EndpointDescriptor`] that a code generator can turn into
//! invocation logic.
//!
//! ## Architecture
//!
//! Parameters are bound by a **priority-ordered matcher registry**. Every
//! matcher is asked once per parameter; the highest claim wins, no claim is an
//! error, and a tie at the top is an error. Lower-ranked duplicates behind a
//! clear winner are fine.
//!
//! ## Module Organization
//!
//! - [`models`] - Method signatures, path templates, callbacks, descriptors
//! - [`registry`] - Parameter matcher trait, built-in matchers, the registry
//! - [`resolution`] - Classifier, codec resolver, callback resolver, assembler
//! - [`config`] - Type naming conventions and their loader
//! - [`error`] - Resolution errors
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use callback_resolver::config::ResolverConfig;
//! use callback_resolver::models::{Annotation, EndpointClass, MethodSignature, TypeRef};
//! use callback_resolver::resolution::EndpointAssembler;
//!
//! let endpoint = EndpointClass::new("Echo", "/echo/{room}").with_method(
//!     MethodSignature::new("Echo", "process")
//!         .with_annotation(Annotation::new("OnTextMessage"))
//!         .with_parameter("message", TypeRef::class("String"))
//!         .returning(TypeRef::class("String")),
//! );
//!
//! let assembler = EndpointAssembler::from_config(&ResolverConfig::default());
//! let descriptor = assembler.assemble(&endpoint).unwrap();
//! assert!(descriptor.on_text_message.is_some());
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # Unit, integration and property tests
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod resolution;

pub use config::{ConfigLoader, ResolverConfig};
pub use error::{ResolutionError, Result};
pub use models::{
    Callback, CallbackKind, CodecRef, EndpointClass, EndpointDescriptor, MessageKind,
    MethodSignature, PathTemplate, ResolvedArgument,
};
pub use registry::{ArgumentProviderRegistry, ParameterMatcher};
pub use resolution::{CallbackResolver, EndpointAssembler};
