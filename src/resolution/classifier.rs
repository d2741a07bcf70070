//! # Callback Classifier
//!
//! Derives everything that depends only on the callback kind and the method
//! signature: message kind, reactive shapes and the execution model. Runs
//! before any parameter is resolved because matchers consult the result.
//!
//! The message type is the exception. It is taken from the argument resolved
//! as the message, see [`CallbackClassifier::message_type`].

use crate::config::{ExecutionHints, ResolverConfig, TypeConventions};
use crate::models::{
    CallbackKind, Classification, ExecutionModel, MessageKind, MethodSignature, ResolvedArgument,
    ReturnShape, TypeRef,
};

#[derive(Debug, Clone, Default)]
pub struct CallbackClassifier {
    types: TypeConventions,
    execution: ExecutionHints,
}

impl CallbackClassifier {
    #[must_use]
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            types: config.types.clone(),
            execution: config.execution.clone(),
        }
    }

    /// Binary → BINARY, Text → TEXT, Pong → PONG, anything else → NONE.
    #[must_use]
    pub fn classify(kind: CallbackKind) -> MessageKind {
        MessageKind::of(kind)
    }

    /// Classification before resolution; `message_type` is still unset.
    #[must_use]
    pub fn classification(&self, method: &MethodSignature, kind: CallbackKind) -> Classification {
        let message_kind = Self::classify(kind);
        let accepts_reactive_stream = message_kind.accepts_message()
            && method
                .parameter_type(0)
                .is_some_and(|ty| ty.is(&self.types.reactive_stream));

        Classification {
            message_kind,
            accepts_reactive_stream,
            return_shape: self.return_shape(&method.return_type),
            message_type: None,
        }
    }

    #[must_use]
    pub fn return_shape(&self, return_type: &TypeRef) -> ReturnShape {
        if return_type.is_void() {
            ReturnShape::Void
        } else if return_type.is(&self.types.reactive_single) {
            ReturnShape::ReactiveSingle
        } else if return_type.is(&self.types.reactive_stream) {
            ReturnShape::ReactiveStream
        } else {
            ReturnShape::Value
        }
    }

    /// Explicit hint annotations win; otherwise reactive signatures run on the
    /// event loop and everything else blocks.
    #[must_use]
    pub fn execution_model(
        &self,
        method: &MethodSignature,
        classification: &Classification,
    ) -> ExecutionModel {
        if method.has_annotation(&self.execution.virtual_thread) {
            ExecutionModel::VirtualThread
        } else if method.has_annotation(&self.execution.blocking) {
            ExecutionModel::Blocking
        } else if method.has_annotation(&self.execution.non_blocking) {
            ExecutionModel::NonBlocking
        } else if classification.accepts_reactive_stream
            || matches!(
                classification.return_shape,
                ReturnShape::ReactiveSingle | ReturnShape::ReactiveStream
            )
        {
            ExecutionModel::NonBlocking
        } else {
            ExecutionModel::Blocking
        }
    }

    /// Declared type of the first argument resolved as the message, unwrapped
    /// to its item type only when the callback accepts a reactive stream.
    #[must_use]
    pub fn message_type(
        &self,
        classification: &Classification,
        arguments: &[ResolvedArgument],
    ) -> Option<TypeRef> {
        if !classification.accepts_message() {
            return None;
        }
        let declared = &arguments.iter().find(|a| a.message)?.declared_type;

        if classification.accepts_reactive_stream {
            Some(
                declared
                    .first_argument()
                    .cloned()
                    .unwrap_or_else(|| declared.clone()),
            )
        } else {
            Some(declared.clone())
        }
    }
}
