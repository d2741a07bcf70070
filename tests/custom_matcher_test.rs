//! Hosts contribute their own matchers next to the built-in set.

mod common;

use callback_resolver::config::ResolverConfig;
use callback_resolver::error::Result;
use callback_resolver::models::{Annotation, CallbackKind, Parameter, TypeRef};
use callback_resolver::registry::{
    ArgumentProviderRegistry, Claim, ParameterContext, ParameterMatcher,
};
use callback_resolver::resolution::{CallbackResolver, EndpointAssembler};
use callback_resolver::ResolutionError;
use common::{endpoint, CallbackBuilder};
use std::sync::Arc;

/// Supplies the authenticated user for parameters marked `UserId`.
#[derive(Debug)]
struct UserIdMatcher;

impl ParameterMatcher for UserIdMatcher {
    fn matcher_name(&self) -> &str {
        "UserIdMatcher"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.has_annotation("UserId"))
    }

    fn claim(&self, context: &ParameterContext<'_>) -> Result<Option<Claim>> {
        Ok(self
            .matches(context)?
            .then(|| Claim::new(self.priority()).with_binding("principal")))
    }
}

/// Supplies the security principal by type, without a marker annotation.
#[derive(Debug)]
struct PrincipalMatcher;

impl ParameterMatcher for PrincipalMatcher {
    fn matcher_name(&self) -> &str {
        "PrincipalMatcher"
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.declared_type().is("Principal"))
    }
}

/// Claims connection handles at the same rank as the built-in matcher.
#[derive(Debug)]
struct ShadowConnectionMatcher;

impl ParameterMatcher for ShadowConnectionMatcher {
    fn matcher_name(&self) -> &str {
        "ShadowConnectionMatcher"
    }

    fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
        Ok(context.declared_type().is("WebSocketConnection"))
    }
}

fn assembler_with(matcher: Arc<dyn ParameterMatcher>) -> EndpointAssembler {
    let config = ResolverConfig::default();
    let registry = ArgumentProviderRegistry::builtin(&config).with_matcher(matcher);
    EndpointAssembler::new(CallbackResolver::new(Arc::new(registry), &config))
}

#[test]
fn test_custom_matcher_claims_annotated_parameter() {
    let mut method = CallbackBuilder::new("Chat", "open", CallbackKind::OnOpen)
        .connection()
        .build();
    method = method.with_built_parameter(
        Parameter::new(0, "user", TypeRef::class("String")).with_annotation(Annotation::new("UserId")),
    );

    let descriptor = assembler_with(Arc::new(UserIdMatcher))
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .unwrap();
    let open = descriptor.on_open.unwrap();

    assert_eq!(open.arguments[1].matcher, "UserIdMatcher");
    assert_eq!(open.arguments[1].binding.as_deref(), Some("principal"));
}

#[test]
fn test_unannotated_custom_parameter_does_not_become_message_type() {
    let method = CallbackBuilder::new("Chat", "message", CallbackKind::OnTextMessage)
        .parameter("user", TypeRef::class("Principal"))
        .parameter("message", TypeRef::class("ChatMessage"))
        .build();

    let descriptor = assembler_with(Arc::new(PrincipalMatcher))
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .unwrap();
    let callback = descriptor.on_text_message.unwrap();

    let message_types: Vec<_> = callback
        .message_arguments()
        .map(|a| a.declared_type.name.as_str())
        .collect();
    assert_eq!(message_types, vec!["ChatMessage"]);
    assert_eq!(
        callback.message_param_type(),
        Some(&TypeRef::class("ChatMessage"))
    );
    assert_eq!(callback.input_codec().to_string(), "default<ChatMessage>");
}

#[test]
fn test_custom_matcher_tying_builtin_is_ambiguous() {
    let method = CallbackBuilder::new("Chat", "open", CallbackKind::OnOpen)
        .connection()
        .build();

    let error = assembler_with(Arc::new(ShadowConnectionMatcher))
        .assemble(&endpoint("Chat", "/chat", vec![method]))
        .unwrap_err();

    match &error {
        ResolutionError::AmbiguousProviders {
            priority,
            candidates,
            parameter,
            ..
        } => {
            assert_eq!(*priority, 50);
            assert_eq!(parameter, "connection");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
    assert!(error.to_string().contains("ambiguous injectors found"));
    assert!(error.to_string().contains("ConnectionMatcher:50"));
}

#[test]
fn test_shared_assembler_across_threads() {
    let assembler = Arc::new(EndpointAssembler::from_config(&ResolverConfig::default()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let assembler = Arc::clone(&assembler);
            std::thread::spawn(move || {
                let method = CallbackBuilder::new("Chat", "open", CallbackKind::OnOpen)
                    .connection()
                    .build();
                assembler
                    .assemble(&endpoint(&format!("Chat{i}"), "/chat", vec![method]))
                    .map(|d| d.callback_count())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(1));
    }
}
