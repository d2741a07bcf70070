//! # Callback Descriptors
//!
//! Value types describing one resolved endpoint callback: its kind, the
//! message kind it handles, how its return value is shaped, the codecs that
//! translate payloads, and one resolved argument per declared parameter.

use super::signature::{MethodSignature, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker annotation kinds that turn a method into a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CallbackKind {
    OnOpen,
    OnTextMessage,
    OnBinaryMessage,
    OnPongMessage,
    OnClose,
}

impl CallbackKind {
    pub const ALL: [CallbackKind; 5] = [
        CallbackKind::OnOpen,
        CallbackKind::OnTextMessage,
        CallbackKind::OnBinaryMessage,
        CallbackKind::OnPongMessage,
        CallbackKind::OnClose,
    ];

    /// Name of the marker annotation for this kind.
    #[must_use]
    pub fn annotation_name(self) -> &'static str {
        match self {
            CallbackKind::OnOpen => "OnOpen",
            CallbackKind::OnTextMessage => "OnTextMessage",
            CallbackKind::OnBinaryMessage => "OnBinaryMessage",
            CallbackKind::OnPongMessage => "OnPongMessage",
            CallbackKind::OnClose => "OnClose",
        }
    }

    #[must_use]
    pub fn from_annotation_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.annotation_name() == name)
    }

    #[must_use]
    pub fn is_on_open(self) -> bool {
        self == CallbackKind::OnOpen
    }

    #[must_use]
    pub fn is_on_close(self) -> bool {
        self == CallbackKind::OnClose
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation_name())
    }
}

/// Wire message variety a callback handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    None,
    Pong,
    Text,
    Binary,
}

impl MessageKind {
    /// Total mapping from callback kind to message kind.
    #[must_use]
    pub fn of(kind: CallbackKind) -> Self {
        match kind {
            CallbackKind::OnBinaryMessage => MessageKind::Binary,
            CallbackKind::OnTextMessage => MessageKind::Text,
            CallbackKind::OnPongMessage => MessageKind::Pong,
            CallbackKind::OnOpen | CallbackKind::OnClose => MessageKind::None,
        }
    }

    #[must_use]
    pub fn accepts_message(self) -> bool {
        self != MessageKind::None
    }

    /// Pong payloads are always binary.
    #[must_use]
    pub fn is_binary(self) -> bool {
        matches!(self, MessageKind::Binary | MessageKind::Pong)
    }
}

/// How the generated invoker runs the callback. Passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionModel {
    Blocking,
    NonBlocking,
    VirtualThread,
}

/// Structural category of a callback's declared return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnShape {
    Void,
    ReactiveSingle,
    ReactiveStream,
    Value,
}

/// Everything derived from the callback kind and signature before any
/// parameter is resolved. Matchers see this through their parameter context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub message_kind: MessageKind,
    pub accepts_reactive_stream: bool,
    pub return_shape: ReturnShape,
    /// Declared type of the message parameter, unwrapped from a reactive
    /// stream to its item type.
    pub message_type: Option<TypeRef>,
}

impl Classification {
    #[must_use]
    pub fn accepts_message(&self) -> bool {
        self.message_kind.accepts_message()
    }

    #[must_use]
    pub fn accepts_binary_payload(&self) -> bool {
        self.message_kind.is_binary()
    }
}

/// Opaque reference to an encode/decode strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodecRef {
    /// A codec named explicitly on the callback annotation.
    Named { codec: String },
    /// The default codec registered for the declared message type.
    Default { message_type: Option<TypeRef> },
}

impl CodecRef {
    pub fn named(codec: impl Into<String>) -> Self {
        CodecRef::Named {
            codec: codec.into(),
        }
    }

    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, CodecRef::Named { .. })
    }
}

impl fmt::Display for CodecRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecRef::Named { codec } => f.write_str(codec),
            CodecRef::Default {
                message_type: Some(ty),
            } => write!(f, "default<{ty}>"),
            CodecRef::Default { message_type: None } => f.write_str("default"),
        }
    }
}

/// Input and output codecs selected for one callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodecSelection {
    pub input: CodecRef,
    pub output: CodecRef,
}

/// A matcher's claim on a parameter as reported in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderCandidate {
    pub matcher: String,
    pub priority: i32,
}

impl ProviderCandidate {
    pub fn new(matcher: impl Into<String>, priority: i32) -> Self {
        Self {
            matcher: matcher.into(),
            priority,
        }
    }
}

impl fmt::Display for ProviderCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.matcher, self.priority)
    }
}

/// The provider chosen for one declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedArgument {
    /// Index into the callback's declared parameters.
    pub position: usize,
    pub parameter_name: Option<String>,
    pub declared_type: TypeRef,
    pub matcher: String,
    pub priority: i32,
    /// Matcher-specific detail code generation needs, e.g. a path variable name.
    pub binding: Option<String>,
    /// Whether the value is the (raw or decoded) message payload.
    pub message: bool,
}

/// A fully resolved callback.
///
/// `arguments` is index-aligned with `method.parameters`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Callback {
    pub method: MethodSignature,
    pub kind: CallbackKind,
    pub classification: Classification,
    pub execution_model: ExecutionModel,
    pub broadcast: bool,
    pub codecs: CodecSelection,
    pub arguments: Vec<ResolvedArgument>,
}

impl Callback {
    #[must_use]
    pub fn message_kind(&self) -> MessageKind {
        self.classification.message_kind
    }

    #[must_use]
    pub fn is_on_open(&self) -> bool {
        self.kind.is_on_open()
    }

    #[must_use]
    pub fn is_on_close(&self) -> bool {
        self.kind.is_on_close()
    }

    #[must_use]
    pub fn accepts_message(&self) -> bool {
        self.classification.accepts_message()
    }

    #[must_use]
    pub fn accepts_binary_payload(&self) -> bool {
        self.classification.accepts_binary_payload()
    }

    #[must_use]
    pub fn accepts_reactive_stream(&self) -> bool {
        self.classification.accepts_reactive_stream
    }

    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        &self.method.return_type
    }

    #[must_use]
    pub fn is_return_void(&self) -> bool {
        self.classification.return_shape == ReturnShape::Void
    }

    #[must_use]
    pub fn is_return_reactive_single(&self) -> bool {
        self.classification.return_shape == ReturnShape::ReactiveSingle
    }

    #[must_use]
    pub fn is_return_reactive_stream(&self) -> bool {
        self.classification.return_shape == ReturnShape::ReactiveStream
    }

    #[must_use]
    pub fn message_param_type(&self) -> Option<&TypeRef> {
        self.classification.message_type.as_ref()
    }

    #[must_use]
    pub fn input_codec(&self) -> &CodecRef {
        &self.codecs.input
    }

    #[must_use]
    pub fn output_codec(&self) -> &CodecRef {
        &self.codecs.output
    }

    /// Arguments that receive the message payload.
    pub fn message_arguments(&self) -> impl Iterator<Item = &ResolvedArgument> {
        self.arguments.iter().filter(|a| a.message)
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.method.callback_description()
    }
}
