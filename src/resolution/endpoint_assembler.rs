//! # Endpoint Assembler
//!
//! Collects the callbacks of one endpoint class into an immutable
//! [`EndpointDescriptor`].
//!
//! ## Assembly Steps
//!
//! 1. Parse the endpoint path template
//! 2. Discover callback methods by their marker annotation, rejecting methods
//!    with several markers and kinds claimed by several methods
//! 3. Resolve each discovered callback
//! 4. Check that every message callback receives exactly one message argument
//!
//! Absent callback kinds are legal; an endpoint may implement any subset.

use super::callback_resolver::CallbackResolver;
use crate::config::ResolverConfig;
use crate::error::{ResolutionError, Result};
use crate::log_resolution;
use crate::models::{
    Callback, CallbackKind, EndpointClass, EndpointDescriptor, MethodSignature, PathTemplate,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct EndpointAssembler {
    resolver: CallbackResolver,
}

impl EndpointAssembler {
    #[must_use]
    pub fn new(resolver: CallbackResolver) -> Self {
        Self { resolver }
    }

    /// Assembler over the built-in matchers.
    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(CallbackResolver::with_builtin_matchers(config))
    }

    #[must_use]
    pub fn resolver(&self) -> &CallbackResolver {
        &self.resolver
    }

    #[instrument(skip_all, fields(endpoint = %endpoint.bean, path = %endpoint.path))]
    pub fn assemble(&self, endpoint: &EndpointClass) -> Result<EndpointDescriptor> {
        let template = PathTemplate::parse(&endpoint.path).map_err(|reason| {
            let error = ResolutionError::InvalidPathTemplate {
                endpoint: endpoint.bean.clone(),
                path: endpoint.path.clone(),
                reason,
            };
            warn!(error = error.kind_name(), "Endpoint path rejected: {error}");
            error
        })?;

        let discovered = discover_callbacks(endpoint)?;
        debug!(callbacks = discovered.len(), "Callback methods discovered");

        let mut resolved: BTreeMap<CallbackKind, Callback> = BTreeMap::new();
        for (kind, method) in discovered {
            let callback = self.resolver.resolve(method, kind, &template)?;
            validate_message_arguments(&callback)?;
            resolved.insert(kind, callback);
        }

        let descriptor = EndpointDescriptor {
            bean: endpoint.bean.clone(),
            path: endpoint.path.clone(),
            execution_mode: endpoint.execution_mode,
            on_open: resolved.remove(&CallbackKind::OnOpen),
            on_text_message: resolved.remove(&CallbackKind::OnTextMessage),
            on_binary_message: resolved.remove(&CallbackKind::OnBinaryMessage),
            on_pong_message: resolved.remove(&CallbackKind::OnPongMessage),
            on_close: resolved.remove(&CallbackKind::OnClose),
        };

        log_resolution!(
            info,
            "endpoint_assembled",
            endpoint: &descriptor.bean,
            path: &descriptor.path,
            callbacks: descriptor.callback_count()
        );

        Ok(descriptor)
    }

    /// Assemble several endpoints in order, stopping at the first failure.
    pub fn assemble_all(&self, endpoints: &[EndpointClass]) -> Result<Vec<EndpointDescriptor>> {
        endpoints
            .iter()
            .map(|endpoint| self.assemble(endpoint))
            .collect()
    }
}

/// Map each callback kind to the single method declaring it.
fn discover_callbacks(
    endpoint: &EndpointClass,
) -> Result<BTreeMap<CallbackKind, &MethodSignature>> {
    let mut found: BTreeMap<CallbackKind, &MethodSignature> = BTreeMap::new();

    for method in &endpoint.methods {
        let kinds: Vec<CallbackKind> = method
            .annotations
            .iter()
            .filter_map(|a| CallbackKind::from_annotation_name(&a.name))
            .collect();

        let kind = match kinds.as_slice() {
            [] => continue,
            [kind] => *kind,
            _ => {
                let error = ResolutionError::ConflictingCallbackAnnotations {
                    callback: method.callback_description(),
                    kinds,
                };
                warn!(
                    error = error.kind_name(),
                    method = %method.name,
                    "Method carries several callback markers"
                );
                return Err(error);
            }
        };

        if let Some(first) = found.get(&kind) {
            let error = ResolutionError::DuplicateCallbackKind {
                endpoint: endpoint.bean.clone(),
                kind,
                first: first.callback_description(),
                second: method.callback_description(),
            };
            warn!(error = error.kind_name(), kind = %kind, "Callback kind declared twice");
            return Err(error);
        }
        found.insert(kind, method);
    }

    Ok(found)
}

fn validate_message_arguments(callback: &Callback) -> Result<()> {
    if !callback.accepts_message() {
        return Ok(());
    }

    let parameters: Vec<String> = callback
        .message_arguments()
        .map(|argument| {
            argument
                .parameter_name
                .clone()
                .unwrap_or_else(|| format!("#{}", argument.position))
        })
        .collect();

    let error = match parameters.len() {
        1 => return Ok(()),
        0 => ResolutionError::MissingMessageParameter {
            kind: callback.kind,
            callback: callback.description(),
        },
        _ => ResolutionError::MultipleMessageParameters {
            kind: callback.kind,
            callback: callback.description(),
            parameters,
        },
    };
    warn!(
        error = error.kind_name(),
        kind = %callback.kind,
        "Message callback must bind exactly one message argument"
    );
    Err(error)
}
