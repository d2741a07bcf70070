//! # Method Signatures
//!
//! The queryable view of a callback method that the resolution engine consumes:
//! declared types, per-parameter annotations and method-level annotations.
//! Signatures are produced by the host's metadata introspection and are treated
//! as immutable values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structural category of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Void,
    Primitive,
    #[default]
    Class,
    Array,
    Parameterized,
}

/// A declared parameter or return type.
///
/// Comparisons against well-known types use the erased `name` only, so
/// `Multi<String>` and `Multi<Buffer>` are both the reactive stream type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// A plain class type such as `String` or `WebSocketConnection`.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            arguments: Vec::new(),
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Primitive,
            arguments: Vec::new(),
        }
    }

    /// An array type; the name carries the `[]` suffix, e.g. `byte[]`.
    pub fn array(component: impl Into<String>) -> Self {
        Self {
            name: format!("{}[]", component.into()),
            kind: TypeKind::Array,
            arguments: Vec::new(),
        }
    }

    /// A generic type such as `Multi<String>`.
    pub fn parameterized(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Parameterized,
            arguments,
        }
    }

    #[must_use]
    pub fn void() -> Self {
        Self {
            name: "void".to_string(),
            kind: TypeKind::Void,
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
    }

    /// Erased-name comparison.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// First type argument, if any.
    #[must_use]
    pub fn first_argument(&self) -> Option<&TypeRef> {
        self.arguments.first()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// A single annotation member value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    String(String),
    Bool(bool),
    Int(i64),
    /// A class literal, e.g. a codec implementation.
    Class(String),
}

/// An annotation attached to a method or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add a member value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&AnnotationValue> {
        self.values.get(key)
    }

    /// String member; empty strings count as absent.
    #[must_use]
    pub fn string_value(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(AnnotationValue::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn bool_value(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(AnnotationValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn class_value(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(AnnotationValue::Class(name)) => Some(name),
            _ => None,
        }
    }
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub position: usize,
    /// Absent when the metadata was compiled without parameter names.
    #[serde(default)]
    pub name: Option<String>,
    pub declared_type: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(position: usize, name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            position,
            name: Some(name.into()),
            declared_type,
            annotations: Vec::new(),
        }
    }

    /// A parameter whose name is not available in the metadata.
    #[must_use]
    pub fn unnamed(position: usize, declared_type: TypeRef) -> Self {
        Self {
            position,
            name: None,
            declared_type,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The name used in diagnostics: the declared name or `#<position>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.position),
        }
    }

    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }
}

/// A callback method as seen through metadata introspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub declaring_class: String,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl MethodSignature {
    pub fn new(declaring_class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeRef::void(),
            annotations: Vec::new(),
        }
    }

    /// Append a parameter; its position is the current parameter count.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, declared_type: TypeRef) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(Parameter::new(position, name, declared_type));
        self
    }

    /// Append a fully built parameter, renumbering it to the next position.
    #[must_use]
    pub fn with_built_parameter(mut self, mut parameter: Parameter) -> Self {
        parameter.position = self.parameters.len();
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }

    #[must_use]
    pub fn parameter_type(&self, position: usize) -> Option<&TypeRef> {
        self.parameters.get(position).map(|p| &p.declared_type)
    }

    /// `Class#method()`, the identity used in every diagnostic.
    #[must_use]
    pub fn callback_description(&self) -> String {
        format!("{}#{}()", self.declaring_class, self.name)
    }
}
