//! Builders for endpoint classes and callback methods used across integration tests.

#![allow(dead_code)] // Each test binary uses a different subset

use callback_resolver::config::ResolverConfig;
use callback_resolver::models::{
    Annotation, AnnotationValue, CallbackKind, EndpointClass, MethodSignature, Parameter, TypeRef,
};
use callback_resolver::resolution::{CallbackResolver, EndpointAssembler};

/// Builder for one callback method carrying its marker annotation.
pub struct CallbackBuilder {
    kind: CallbackKind,
    marker: Annotation,
    method: MethodSignature,
}

impl CallbackBuilder {
    pub fn new(class: &str, name: &str, kind: CallbackKind) -> Self {
        Self {
            kind,
            marker: Annotation::new(kind.annotation_name()),
            method: MethodSignature::new(class, name),
        }
    }

    pub fn connection(self) -> Self {
        self.parameter("connection", TypeRef::class("WebSocketConnection"))
    }

    pub fn handshake(self) -> Self {
        self.parameter("handshake", TypeRef::class("HandshakeRequest"))
    }

    pub fn parameter(mut self, name: &str, declared_type: TypeRef) -> Self {
        self.method = self.method.with_parameter(name, declared_type);
        self
    }

    /// `@PathParam` parameter, optionally naming the variable explicitly.
    pub fn path_param(mut self, name: &str, variable: Option<&str>) -> Self {
        let mut annotation = Annotation::new("PathParam");
        if let Some(variable) = variable {
            annotation = annotation.with_value("value", AnnotationValue::String(variable.to_string()));
        }
        self.method = self.method.with_built_parameter(
            Parameter::new(0, name, TypeRef::class("String")).with_annotation(annotation),
        );
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.method = self.method.returning(return_type);
        self
    }

    pub fn marker_value(mut self, key: &str, value: AnnotationValue) -> Self {
        self.marker = self.marker.with_value(key, value);
        self
    }

    pub fn kind(&self) -> CallbackKind {
        self.kind
    }

    pub fn build(self) -> MethodSignature {
        self.method.with_annotation(self.marker)
    }
}

pub fn endpoint(bean: &str, path: &str, methods: Vec<MethodSignature>) -> EndpointClass {
    methods
        .into_iter()
        .fold(EndpointClass::new(bean, path), EndpointClass::with_method)
}

pub fn default_assembler() -> EndpointAssembler {
    EndpointAssembler::from_config(&ResolverConfig::default())
}

pub fn default_resolver() -> CallbackResolver {
    CallbackResolver::with_builtin_matchers(&ResolverConfig::default())
}
