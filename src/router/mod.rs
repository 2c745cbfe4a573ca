//! Resource router
//!
//! [`RestRouter`] registers controllers under path prefixes and serves the
//! resulting routes. Each registered capability gets exactly one route:
//!
//! ```text
//! GET    {prefix}/      list
//! GET    {prefix}/{id}  get
//! POST   {prefix}/      add
//! PUT    {prefix}/{id}  replace
//! DELETE {prefix}/{id}  delete
//! ```
//!
//! Verbs a resource does not provide are answered by axum itself (`404` or
//! `405`) and never reach a controller.

mod builder;
mod route;

pub use builder::ResourceBuilder;
pub use route::{RouteInfo, Target};

use crate::capability::{CapabilitySet, Resource};
use crate::config::RestConfig;
use crate::controller::Controller;
use crate::error::{RequestError, RestError, Result};
use crate::exception::ExceptionFilter;
use crate::handler::ResourceState;
use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    response::Response,
};
use std::any::{Any, type_name};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Record of one `add_resource` call.
pub struct Registration {
    prefix: String,
    controller_name: &'static str,
    controller: Arc<dyn Any + Send + Sync>,
    capabilities: CapabilitySet,
    routes: Vec<RouteInfo>,
}

impl Registration {
    /// Normalized prefix; empty for the root.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn controller_name(&self) -> &'static str {
        self.controller_name
    }

    /// The registered controller, if it is a `C`.
    pub fn controller<C: Send + Sync + 'static>(&self) -> Option<Arc<C>> {
        Arc::clone(&self.controller).downcast::<C>().ok()
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("prefix", &self.prefix)
            .field("controller", &self.controller_name)
            .field("capabilities", &self.capabilities)
            .field("routes", &self.routes)
            .finish()
    }
}

/// Router exposing controllers as REST resources
///
/// # Example
/// ```rust,ignore
/// let mut router = RestRouter::new();
/// router.add_controller("/api/toys", Arc::new(Toys::default()))?;
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router.into_router()).await?;
/// ```
pub struct RestRouter {
    router: Router,
    registrations: Vec<Registration>,
    filter: Arc<dyn ExceptionFilter>,
    config: RestConfig,
    /// `router` with the request layers applied; reset on registration.
    service: OnceLock<Router>,
}

impl fmt::Debug for RestRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestRouter")
            .field("registrations", &self.registrations)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for RestRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RestRouter {
    pub fn new() -> Self {
        Self::with_config(RestConfig::default())
    }

    pub fn with_config(config: RestConfig) -> Self {
        Self {
            router: Router::new(),
            registrations: Vec::new(),
            filter: config.exception_filter(),
            config,
            service: OnceLock::new(),
        }
    }

    /// Replace the exception filter.
    ///
    /// Resources keep the filter that was current when they were registered,
    /// so set it before adding any.
    pub fn exception_filter<F: ExceptionFilter>(mut self, filter: F) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Register the capabilities collected in `resource` under `prefix`.
    ///
    /// # Errors
    ///
    /// Fails when the builder names no capability, when `prefix` is malformed,
    /// or when `prefix` is already taken. Nothing is registered on failure.
    pub fn add_resource<C: Resource>(
        &mut self,
        prefix: &str,
        resource: ResourceBuilder<C>,
    ) -> Result<&mut Self> {
        let prefix = normalize_prefix(prefix)?;
        let (controller, handlers) = resource.into_parts();

        if handlers.is_empty() {
            return Err(RestError::NoCapabilities {
                prefix,
                controller: type_name::<C>(),
            });
        }
        if self.registrations.iter().any(|r| r.prefix == prefix) {
            return Err(RestError::DuplicatePrefix { prefix });
        }

        let state = ResourceState::new(Arc::clone(&controller), Arc::clone(&self.filter));
        let mut router = self.router.clone();
        let mut capabilities = CapabilitySet::new();
        let mut routes = Vec::with_capacity(handlers.len());

        for (capability, handler) in handlers {
            let route = RouteInfo::new(capability, &prefix);
            tracing::debug!(%route, "registering route");
            router = router.route(&route.path, handler.with_state(state.clone()));
            capabilities.insert(capability);
            routes.push(route);
        }
        self.router = router;
        self.service = OnceLock::new();

        tracing::info!(
            prefix = %display_prefix(&prefix),
            controller = type_name::<C>(),
            %capabilities,
            "registered resource"
        );

        self.registrations.push(Registration {
            prefix,
            controller_name: type_name::<C>(),
            controller,
            capabilities,
            routes,
        });
        Ok(self)
    }

    /// Register a controller with the capabilities it declares through
    /// [`Controller::capabilities`].
    pub fn add_controller<C: Controller>(
        &mut self,
        prefix: &str,
        controller: Arc<C>,
    ) -> Result<&mut Self> {
        let resource = C::capabilities(ResourceBuilder::new(controller));
        self.add_resource(prefix, resource)
    }

    /// Route one request through the registered resources.
    pub async fn serve(&self, request: Request<Body>) -> Response {
        let service = self.service.get_or_init(|| self.layered()).clone();
        match service.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// The axum router serving every registered resource, ready for
    /// `axum::serve` or nesting into a larger application.
    pub fn into_router(mut self) -> Router {
        match self.service.take() {
            Some(service) => service,
            None => self.layered(),
        }
    }

    fn layered(&self) -> Router {
        let mut router = self
            .router
            .clone()
            .layer(DefaultBodyLimit::max(self.config.body_limit));

        if self.config.catch_panics {
            let filter = Arc::clone(&self.filter);
            router = router.layer(CatchPanicLayer::custom(
                move |panic: Box<dyn Any + Send + 'static>| {
                    let message = panic_message(&*panic);
                    tracing::error!(%message, "controller panicked");
                    filter.catch(RequestError::Panicked(message))
                },
            ));
        }

        router.layer(TraceLayer::new_for_http())
    }
}

fn normalize_prefix(prefix: &str) -> Result<String> {
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return Err(RestError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "must start with `/`",
        });
    }
    if prefix.contains(['{', '}', '*'])
        || prefix.split('/').any(|segment| segment.starts_with(':'))
    {
        return Err(RestError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "must not contain path parameters or wildcards",
        });
    }
    Ok(prefix.trim_end_matches('/').to_string())
}

fn display_prefix(prefix: &str) -> &str {
    if prefix.is_empty() { "/" } else { prefix }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
