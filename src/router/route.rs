//! Fixed verb and path convention for each capability

use crate::capability::Capability;
use axum::http::Method;
use axum::routing::MethodFilter;
use std::fmt;

/// Which of a resource's two paths a route lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `{prefix}/`
    Collection,
    /// `{prefix}/{id}`
    Item,
}

impl Target {
    /// Full route path under an already normalized prefix.
    pub fn path(self, prefix: &str) -> String {
        match self {
            Target::Collection => format!("{prefix}/"),
            Target::Item => format!("{prefix}/{{id}}"),
        }
    }
}

impl Capability {
    pub fn method(self) -> Method {
        match self {
            Capability::List | Capability::Get => Method::GET,
            Capability::Add => Method::POST,
            Capability::Replace => Method::PUT,
            Capability::Delete => Method::DELETE,
        }
    }

    pub fn target(self) -> Target {
        match self {
            Capability::List | Capability::Add => Target::Collection,
            Capability::Get | Capability::Replace | Capability::Delete => Target::Item,
        }
    }

    pub(crate) fn method_filter(self) -> MethodFilter {
        match self {
            Capability::List | Capability::Get => MethodFilter::GET,
            Capability::Add => MethodFilter::POST,
            Capability::Replace => MethodFilter::PUT,
            Capability::Delete => MethodFilter::DELETE,
        }
    }
}

/// One registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub capability: Capability,
    pub method: Method,
    pub path: String,
}

impl RouteInfo {
    pub(crate) fn new(capability: Capability, prefix: &str) -> Self {
        Self {
            capability,
            method: capability.method(),
            path: capability.target().path(prefix),
        }
    }
}

impl fmt::Display for RouteInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.capability)
    }
}
