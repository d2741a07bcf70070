//! # Codec Resolution
//!
//! Picks the codecs that translate between wire payloads and method-level
//! types. The input codec is the explicit `codec` member of the callback
//! annotation, or the default codec for the declared message type. The output
//! codec is the explicit `outputCodec` member, or else whatever the input
//! resolved to, never a default chosen for the return type.

use crate::constants::members;
use crate::models::{Annotation, Classification, CodecRef, CodecSelection};

#[derive(Debug, Default, Clone, Copy)]
pub struct CodecResolver;

impl CodecResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn resolve_input(
        &self,
        annotation: &Annotation,
        classification: &Classification,
    ) -> CodecRef {
        explicit_codec(annotation, members::CODEC).unwrap_or_else(|| CodecRef::Default {
            message_type: classification.message_type.clone(),
        })
    }

    #[must_use]
    pub fn resolve_output(
        &self,
        annotation: &Annotation,
        classification: &Classification,
    ) -> CodecRef {
        explicit_codec(annotation, members::OUTPUT_CODEC)
            .unwrap_or_else(|| self.resolve_input(annotation, classification))
    }

    #[must_use]
    pub fn resolve(&self, annotation: &Annotation, classification: &Classification) -> CodecSelection {
        CodecSelection {
            input: self.resolve_input(annotation, classification),
            output: self.resolve_output(annotation, classification),
        }
    }
}

/// Class literal, or a non-empty string naming the codec.
fn explicit_codec(annotation: &Annotation, member: &str) -> Option<CodecRef> {
    annotation
        .class_value(member)
        .or_else(|| annotation.string_value(member))
        .map(CodecRef::named)
}
