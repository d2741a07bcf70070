//! Type naming conventions loaded from a file drive the built-in matchers.

mod common;

use callback_resolver::config::{ConfigLoader, ConfigurationError};
use callback_resolver::models::{CallbackKind, ExecutionModel, TypeRef};
use callback_resolver::resolution::EndpointAssembler;
use common::{endpoint, CallbackBuilder};
use std::collections::HashMap;
use std::io::Write;

fn load_yaml(contents: &str) -> Result<callback_resolver::ResolverConfig, ConfigurationError> {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    ConfigLoader::new()
        .with_file(file.path())
        .with_env_overrides(HashMap::new())
        .load()
}

#[test]
fn test_renamed_connection_type_is_injected() {
    let config = load_yaml("types:\n  connection: Session\n").unwrap();
    let assembler = EndpointAssembler::from_config(&config);

    let method = CallbackBuilder::new("Chat", "open", CallbackKind::OnOpen)
        .parameter("session", TypeRef::class("Session"))
        .build();
    let descriptor = assembler
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .unwrap();

    assert_eq!(
        descriptor.on_open.unwrap().arguments[0].matcher,
        "ConnectionMatcher"
    );
}

#[test]
fn test_default_connection_type_no_longer_matches_after_rename() {
    let config = load_yaml("types:\n  connection: Session\n").unwrap();
    let assembler = EndpointAssembler::from_config(&config);

    let method = CallbackBuilder::new("Chat", "open", CallbackKind::OnOpen)
        .connection()
        .build();

    assert!(assembler
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .is_err());
}

#[test]
fn test_renamed_execution_hint() {
    let config = load_yaml("execution:\n  virtual_thread: Loom\n").unwrap();
    let assembler = EndpointAssembler::from_config(&config);

    let method = CallbackBuilder::new("Chat", "message", CallbackKind::OnTextMessage)
        .parameter("message", TypeRef::class("String"))
        .build()
        .with_annotation(callback_resolver::models::Annotation::new("Loom"));
    let descriptor = assembler
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .unwrap();

    assert_eq!(
        descriptor.on_text_message.unwrap().execution_model,
        ExecutionModel::VirtualThread
    );
}

#[test]
fn test_empty_type_name_rejected() {
    let result = load_yaml("types:\n  handshake_request: \"\"\n");
    assert!(matches!(result, Err(ConfigurationError::InvalidValue { .. })));
}
