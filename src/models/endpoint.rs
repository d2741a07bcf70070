//! Endpoint classes (input) and endpoint descriptors (output).

use super::callback::{Callback, CallbackKind};
use super::signature::MethodSignature;
use serde::{Deserialize, Serialize};

/// Whether the runtime may invoke an endpoint's callbacks concurrently for one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Serial,
    Concurrent,
}

/// An endpoint class as discovered by the host build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointClass {
    /// Bean identity of the endpoint, usually its class name.
    pub bean: String,
    pub path: String,
    #[serde(default)]
    pub execution_mode: ExecutionMode,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
}

impl EndpointClass {
    pub fn new(bean: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bean: bean.into(),
            path: path.into(),
            execution_mode: ExecutionMode::default(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }
}

/// The complete resolution plan for one endpoint, consumed by code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub bean: String,
    pub path: String,
    pub execution_mode: ExecutionMode,
    pub on_open: Option<Callback>,
    pub on_text_message: Option<Callback>,
    pub on_binary_message: Option<Callback>,
    pub on_pong_message: Option<Callback>,
    pub on_close: Option<Callback>,
}

impl EndpointDescriptor {
    /// The callback registered for `kind`, if any.
    #[must_use]
    pub fn callback(&self, kind: CallbackKind) -> Option<&Callback> {
        match kind {
            CallbackKind::OnOpen => self.on_open.as_ref(),
            CallbackKind::OnTextMessage => self.on_text_message.as_ref(),
            CallbackKind::OnBinaryMessage => self.on_binary_message.as_ref(),
            CallbackKind::OnPongMessage => self.on_pong_message.as_ref(),
            CallbackKind::OnClose => self.on_close.as_ref(),
        }
    }

    /// Present callbacks in kind order.
    pub fn callbacks(&self) -> impl Iterator<Item = &Callback> {
        CallbackKind::ALL
            .into_iter()
            .filter_map(move |kind| self.callback(kind))
    }

    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks().count()
    }
}
