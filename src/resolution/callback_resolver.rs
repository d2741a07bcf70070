//! # Callback Resolver
//!
//! Turns one callback method into a resolved [`Callback`]: every parameter
//! bound to exactly one argument provider, plus the message classification and
//! codec selection.
//!
//! ## Resolution Flow
//!
//! ```text
//! MethodSignature + CallbackKind
//!         │
//!    ┌────▼──────────┐
//!    │ Classify      │  message kind, reactive shapes, execution model
//!    └────┬──────────┘
//!         │ for each parameter, in declaration order
//!    ┌────▼──────────┐
//!    │ find_matching │  every matcher queried once, sorted by priority
//!    └────┬──────────┘
//!         │
//!         ├── no claims                  → NoProviderFound
//!         ├── top two share a priority   → AmbiguousProviders
//!         ├── clear winner               → ResolvedArgument
//!         │
//!    ┌────▼──────────┐
//!    │ Codecs        │  keyed to the argument bound as the message
//!    └───────────────┘
//! ```
//!
//! The first failing parameter aborts resolution; a partially resolved
//! callback is never returned.

use super::classifier::CallbackClassifier;
use super::codec::CodecResolver;
use crate::config::ResolverConfig;
use crate::constants::members;
use crate::error::{ResolutionError, Result};
use crate::models::{
    Annotation, Callback, CallbackKind, MethodSignature, Parameter, PathTemplate, ResolvedArgument,
};
use crate::registry::{ArgumentProviderRegistry, MatcherCandidate, ParameterContext};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resolves callbacks against an injected matcher registry.
///
/// Holds no mutable state, so one resolver can be shared across threads and
/// resolving the same method twice yields equal results.
#[derive(Debug, Clone)]
pub struct CallbackResolver {
    registry: Arc<ArgumentProviderRegistry>,
    classifier: CallbackClassifier,
    codecs: CodecResolver,
}

impl CallbackResolver {
    #[must_use]
    pub fn new(registry: Arc<ArgumentProviderRegistry>, config: &ResolverConfig) -> Self {
        Self {
            registry,
            classifier: CallbackClassifier::new(config),
            codecs: CodecResolver::new(),
        }
    }

    /// Resolver backed by the built-in matchers.
    #[must_use]
    pub fn with_builtin_matchers(config: &ResolverConfig) -> Self {
        Self::new(Arc::new(ArgumentProviderRegistry::builtin(config)), config)
    }

    #[must_use]
    pub fn registry(&self) -> &ArgumentProviderRegistry {
        &self.registry
    }

    #[must_use]
    pub fn classifier(&self) -> &CallbackClassifier {
        &self.classifier
    }

    /// Resolve `method` as a callback of `kind` on an endpoint mapped to
    /// `endpoint_path`.
    ///
    /// The marker annotation for `kind` is read from the method for its
    /// `broadcast` and codec members; a method without it resolves with
    /// defaults.
    #[instrument(
        skip_all,
        fields(callback = %method.callback_description(), kind = %kind, path = %endpoint_path)
    )]
    pub fn resolve(
        &self,
        method: &MethodSignature,
        kind: CallbackKind,
        endpoint_path: &PathTemplate,
    ) -> Result<Callback> {
        let annotation = method
            .annotation(kind.annotation_name())
            .cloned()
            .unwrap_or_else(|| Annotation::new(kind.annotation_name()));

        let mut classification = self.classifier.classification(method, kind);
        let execution_model = self.classifier.execution_model(method, &classification);
        let callback = method.callback_description();

        let arguments = method
            .parameters
            .iter()
            .map(|parameter| {
                let context = ParameterContext {
                    parameter,
                    kind,
                    callback_annotation: &annotation,
                    classification: &classification,
                    endpoint_path,
                    callback: &callback,
                };
                self.resolve_parameter(&context)
            })
            .collect::<Result<Vec<_>>>()?;

        // the default codec is keyed to the argument actually bound as the message
        classification.message_type = self.classifier.message_type(&classification, &arguments);
        let codecs = self.codecs.resolve(&annotation, &classification);

        debug!(
            arguments = arguments.len(),
            message_kind = ?classification.message_kind,
            execution_model = ?execution_model,
            input_codec = %codecs.input,
            output_codec = %codecs.output,
            "Callback resolved"
        );

        Ok(Callback {
            method: method.clone(),
            kind,
            broadcast: annotation.bool_value(members::BROADCAST).unwrap_or(false),
            classification,
            execution_model,
            codecs,
            arguments,
        })
    }

    fn resolve_parameter(&self, context: &ParameterContext<'_>) -> Result<ResolvedArgument> {
        let candidates = self.registry.find_matching(context)?;
        let parameter = context.parameter;

        let Some(winner) = candidates.first() else {
            let error = ResolutionError::NoProviderFound {
                kind: context.kind,
                parameter: parameter.display_name(),
                callback: context.callback.to_string(),
            };
            warn!(
                error = error.kind_name(),
                parameter = %parameter.display_name(),
                declared_type = %parameter.declared_type,
                "No matcher claimed callback parameter"
            );
            return Err(error);
        };

        if candidates
            .get(1)
            .is_some_and(|runner_up| runner_up.priority() == winner.priority())
        {
            let tied: Vec<_> = candidates
                .iter()
                .take_while(|c| c.priority() == winner.priority())
                .map(MatcherCandidate::to_provider_candidate)
                .collect();
            let error = ResolutionError::AmbiguousProviders {
                kind: context.kind,
                parameter: parameter.display_name(),
                callback: context.callback.to_string(),
                priority: winner.priority(),
                candidates: tied,
            };
            warn!(
                error = error.kind_name(),
                parameter = %parameter.display_name(),
                priority = winner.priority(),
                "Matchers tied at the top priority"
            );
            return Err(error);
        }

        debug!(
            parameter = %parameter.display_name(),
            matcher = winner.matcher_name(),
            priority = winner.priority(),
            "Parameter resolved"
        );

        Ok(resolved_argument(parameter, winner))
    }
}

fn resolved_argument(parameter: &Parameter, winner: &MatcherCandidate) -> ResolvedArgument {
    ResolvedArgument {
        position: parameter.position,
        parameter_name: parameter.name.clone(),
        declared_type: parameter.declared_type.clone(),
        matcher: winner.matcher_name().to_string(),
        priority: winner.priority(),
        binding: winner.claim.binding.clone(),
        message: winner.matcher.provides_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnnotationValue, CodecRef, ExecutionModel, MessageKind, TypeRef};
    use crate::registry::ParameterMatcher;

    #[derive(Debug)]
    struct FixedMatcher {
        name: &'static str,
        priority: i32,
        type_name: &'static str,
    }

    impl ParameterMatcher for FixedMatcher {
        fn matcher_name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn matches(&self, context: &ParameterContext<'_>) -> Result<bool> {
            Ok(context.declared_type().is(self.type_name))
        }
    }

    fn fixed(name: &'static str, priority: i32, type_name: &'static str) -> Arc<FixedMatcher> {
        Arc::new(FixedMatcher {
            name,
            priority,
            type_name,
        })
    }

    fn resolver_with(registry: ArgumentProviderRegistry) -> CallbackResolver {
        CallbackResolver::new(Arc::new(registry), &ResolverConfig::default())
    }

    fn builtin() -> CallbackResolver {
        CallbackResolver::with_builtin_matchers(&ResolverConfig::default())
    }

    fn path(raw: &str) -> PathTemplate {
        PathTemplate::parse(raw).unwrap()
    }

    fn text_method() -> MethodSignature {
        MethodSignature::new("Echo", "process")
            .with_annotation(Annotation::new("OnTextMessage"))
            .with_parameter("connection", TypeRef::class("WebSocketConnection"))
            .with_parameter("message", TypeRef::class("String"))
            .returning(TypeRef::class("String"))
    }

    #[test]
    fn test_resolves_every_parameter_in_order() {
        let callback = builtin()
            .resolve(&text_method(), CallbackKind::OnTextMessage, &path("/echo"))
            .unwrap();

        assert_eq!(callback.arguments.len(), 2);
        assert_eq!(callback.arguments[0].position, 0);
        assert_eq!(callback.arguments[0].matcher, "ConnectionMatcher");
        assert!(!callback.arguments[0].message);
        assert_eq!(callback.arguments[1].position, 1);
        assert_eq!(callback.arguments[1].matcher, "RawMessageMatcher");
        assert!(callback.arguments[1].message);
        assert_eq!(callback.message_kind(), MessageKind::Text);
        assert_eq!(callback.execution_model, ExecutionModel::Blocking);
        assert!(!callback.broadcast);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = builtin();
        let endpoint = path("/echo");
        let first = resolver
            .resolve(&text_method(), CallbackKind::OnTextMessage, &endpoint)
            .unwrap();
        let second = resolver
            .resolve(&text_method(), CallbackKind::OnTextMessage, &endpoint)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_candidate_selected_regardless_of_priority() {
        let resolver = resolver_with(
            ArgumentProviderRegistry::new().with_matcher(fixed("Lonely", -5, "Item")),
        );
        let method = MethodSignature::new("Echo", "open").with_parameter("item", TypeRef::class("Item"));

        let callback = resolver
            .resolve(&method, CallbackKind::OnOpen, &path("/echo"))
            .unwrap();
        assert_eq!(callback.arguments[0].matcher, "Lonely");
        assert_eq!(callback.arguments[0].priority, -5);
    }

    #[test]
    fn test_no_provider_found() {
        let method = MethodSignature::new("Echo", "open")
            .with_parameter("connection", TypeRef::class("WebSocketConnection"))
            .with_parameter("mystery", TypeRef::class("Mystery"));

        let error = builtin()
            .resolve(&method, CallbackKind::OnOpen, &path("/echo"))
            .unwrap_err();

        assert_eq!(
            error,
            ResolutionError::NoProviderFound {
                kind: CallbackKind::OnOpen,
                parameter: "mystery".to_string(),
                callback: "Echo#open()".to_string(),
            }
        );
    }

    #[test]
    fn test_top_priority_tie_is_ambiguous() {
        let resolver = resolver_with(
            ArgumentProviderRegistry::new()
                .with_matcher(fixed("Alpha", 30, "Item"))
                .with_matcher(fixed("Beta", 30, "Item"))
                .with_matcher(fixed("Gamma", 5, "Item")),
        );
        let method = MethodSignature::new("Echo", "open").with_parameter("item", TypeRef::class("Item"));

        match resolver.resolve(&method, CallbackKind::OnOpen, &path("/echo")) {
            Err(ResolutionError::AmbiguousProviders {
                priority,
                candidates,
                ..
            }) => {
                assert_eq!(priority, 30);
                let names: Vec<_> = candidates.iter().map(|c| c.matcher.as_str()).collect();
                assert_eq!(names, vec!["Alpha", "Beta"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_lower_priority_duplicate_tolerated() {
        let resolver = resolver_with(
            ArgumentProviderRegistry::new()
                .with_matcher(fixed("Low", 5, "Item"))
                .with_matcher(fixed("LowToo", 5, "Item"))
                .with_matcher(fixed("High", 30, "Item")),
        );
        let method = MethodSignature::new("Echo", "open").with_parameter("item", TypeRef::class("Item"));

        let callback = resolver
            .resolve(&method, CallbackKind::OnOpen, &path("/echo"))
            .unwrap();
        assert_eq!(callback.arguments[0].matcher, "High");
    }

    #[test]
    fn test_fail_fast_on_first_bad_parameter() {
        let method = MethodSignature::new("Echo", "open")
            .with_parameter("first", TypeRef::class("Unknown1"))
            .with_parameter("second", TypeRef::class("Unknown2"));

        let error = builtin()
            .resolve(&method, CallbackKind::OnOpen, &path("/echo"))
            .unwrap_err();
        assert!(matches!(
            error,
            ResolutionError::NoProviderFound { ref parameter, .. } if parameter == "first"
        ));
    }

    #[test]
    fn test_default_codec_keyed_to_message_argument() {
        // Principal is unannotated but claimed by a host matcher ahead of the payload
        let registry = ArgumentProviderRegistry::builtin(&ResolverConfig::default())
            .with_matcher(fixed("PrincipalMatcher", 50, "Principal"));
        let method = MethodSignature::new("Chat", "onMessage")
            .with_parameter("user", TypeRef::class("Principal"))
            .with_parameter("message", TypeRef::class("ChatMessage"));

        let callback = resolver_with(registry)
            .resolve(&method, CallbackKind::OnTextMessage, &path("/chat"))
            .unwrap();

        assert_eq!(callback.arguments[0].matcher, "PrincipalMatcher");
        assert!(!callback.arguments[0].message);
        assert_eq!(
            callback.message_param_type(),
            Some(&TypeRef::class("ChatMessage"))
        );
        assert_eq!(callback.input_codec().to_string(), "default<ChatMessage>");
        assert_eq!(callback.output_codec(), callback.input_codec());
    }

    #[test]
    fn test_stream_behind_connection_decodes_whole_stream_type() {
        let stream = TypeRef::parameterized("Multi", vec![TypeRef::class("Item")]);
        let method = MethodSignature::new("Feed", "onMessage")
            .with_parameter("connection", TypeRef::class("WebSocketConnection"))
            .with_parameter("items", stream.clone());

        let callback = builtin()
            .resolve(&method, CallbackKind::OnTextMessage, &path("/feed"))
            .unwrap();

        assert!(!callback.accepts_reactive_stream());
        assert_eq!(callback.message_param_type(), Some(&stream));
        assert_eq!(
            callback.input_codec(),
            &CodecRef::Default {
                message_type: Some(stream)
            }
        );
    }

    #[test]
    fn test_broadcast_and_codecs_from_annotation() {
        let method = MethodSignature::new("Chat", "onMessage")
            .with_annotation(
                Annotation::new("OnTextMessage")
                    .with_value("broadcast", AnnotationValue::Bool(true))
                    .with_value("codec", AnnotationValue::Class("ChatCodec".to_string())),
            )
            .with_parameter("message", TypeRef::class("ChatMessage"))
            .returning(TypeRef::class("ChatMessage"));

        let callback = builtin()
            .resolve(&method, CallbackKind::OnTextMessage, &path("/chat"))
            .unwrap();

        assert!(callback.broadcast);
        assert_eq!(callback.input_codec(), &CodecRef::named("ChatCodec"));
        assert_eq!(callback.output_codec(), callback.input_codec());
        assert_eq!(callback.arguments[0].matcher, "DecodedMessageMatcher");
    }

    #[test]
    fn test_path_param_binding_recorded() {
        let method = MethodSignature::new("Echo", "process")
            .with_built_parameter(
                Parameter::new(0, "grail", TypeRef::class("String"))
                    .with_annotation(Annotation::new("PathParam")),
            )
            .with_parameter("message", TypeRef::class("String"));

        let callback = builtin()
            .resolve(&method, CallbackKind::OnTextMessage, &path("/echo/{grail}"))
            .unwrap();

        assert_eq!(callback.arguments[0].matcher, "PathParamMatcher");
        assert_eq!(callback.arguments[0].binding.as_deref(), Some("grail"));
        assert_eq!(callback.message_arguments().count(), 1);
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CallbackResolver>();
    }
}
