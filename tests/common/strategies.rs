#![allow(dead_code)]

use callback_resolver::models::{Annotation, AnnotationValue, Parameter, TypeRef};
use proptest::prelude::*;
use proptest::sample::select;

/// Strategy for path variable names
pub fn variable_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// Strategy for 1-4 distinct path variables
pub fn path_variables_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(variable_name_strategy(), 1..=4)
        .prop_map(|set| set.into_iter().collect())
}

/// Endpoint path built from the given variables, e.g. `/ws/{room}/{user}`
pub fn path_for(variables: &[String]) -> String {
    variables
        .iter()
        .fold(String::from("/ws"), |path, v| format!("{path}/{{{v}}}"))
}

/// Payload class names that never collide with a built-in handle or raw type
pub fn payload_type_strategy() -> impl Strategy<Value = String> {
    "Payload[A-Z][a-z0-9]{0,8}"
}

/// Shapes of parameters the built-in matchers resolve in a text callback.
#[derive(Debug, Clone)]
pub enum ParameterShape {
    Connection,
    Handshake,
    PathParam(usize),
    RawText(&'static str),
    Decoded(String),
}

impl ParameterShape {
    pub fn to_parameter(&self, position: usize, variables: &[String]) -> Parameter {
        let name = format!("p{position}");
        match self {
            Self::Connection => Parameter::new(position, name, TypeRef::class("WebSocketConnection")),
            Self::Handshake => Parameter::new(position, name, TypeRef::class("HandshakeRequest")),
            Self::PathParam(index) => {
                let variable = &variables[index % variables.len()];
                Parameter::new(position, name, TypeRef::class("String")).with_annotation(
                    Annotation::new("PathParam")
                        .with_value("value", AnnotationValue::String(variable.clone())),
                )
            }
            Self::RawText(type_name) => Parameter::new(position, name, TypeRef::class(*type_name)),
            Self::Decoded(type_name) => Parameter::new(position, name, TypeRef::class(type_name.clone())),
        }
    }

    pub fn expected_matcher(&self) -> &'static str {
        match self {
            Self::Connection => "ConnectionMatcher",
            Self::Handshake => "HandshakeRequestMatcher",
            Self::PathParam(_) => "PathParamMatcher",
            Self::RawText(_) => "RawMessageMatcher",
            Self::Decoded(_) => "DecodedMessageMatcher",
        }
    }
}

pub fn parameter_shape_strategy() -> impl Strategy<Value = ParameterShape> {
    prop_oneof![
        Just(ParameterShape::Connection),
        Just(ParameterShape::Handshake),
        (0usize..4).prop_map(ParameterShape::PathParam),
        select(vec!["String", "JsonObject", "JsonArray", "Buffer"]).prop_map(ParameterShape::RawText),
        payload_type_strategy().prop_map(ParameterShape::Decoded),
    ]
}

pub fn parameter_shapes_strategy() -> impl Strategy<Value = Vec<ParameterShape>> {
    prop::collection::vec(parameter_shape_strategy(), 0..8)
}

/// A top priority plus lower priorities strictly beneath it
pub fn priority_ladder_strategy() -> impl Strategy<Value = (i32, Vec<i32>)> {
    (-1000i32..1000).prop_flat_map(|top| {
        (
            Just(top),
            prop::collection::vec((top - 500)..top, 0..4),
        )
    })
}
