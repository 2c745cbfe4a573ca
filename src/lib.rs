//! # Restful
//!
//! Expose controllers as RESTful JSON resources on top of axum.
//!
//! A controller opts into REST operations by implementing any subset of five
//! capability traits. The router wires each implemented capability to a fixed
//! verb and path under the resource's prefix:
//!
//! | Capability | Route | Response |
//! |---|---|---|
//! | [`Lister`] | `GET {prefix}/` | `{"<id>": item, ...}` |
//! | [`Getter`] | `GET {prefix}/{id}` | `{"<id>": item}` |
//! | [`Creator`] | `POST {prefix}/` | `{"<new id>": item}` |
//! | [`Replacer`] | `PUT {prefix}/{id}` | `{"<id>": item}` |
//! | [`Deleter`] | `DELETE {prefix}/{id}` | `{"ok": bool}` |
//!
//! Request failures (bad ids, malformed bodies, broken controllers) end the
//! request with a server error and never take the process down.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restful::prelude::*;
//! use std::collections::BTreeMap;
//! use tokio::sync::RwLock;
//!
//! #[derive(Default)]
//! pub struct Toys {
//!     storage: RwLock<BTreeMap<String, i64>>,
//! }
//!
//! impl Resource for Toys {
//!     type Id = String;
//!     type Item = i64;
//! }
//!
//! #[async_trait]
//! impl Lister for Toys {
//!     async fn list(&self) -> Option<BTreeMap<String, i64>> {
//!         Some(self.storage.read().await.clone())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> restful::Result<()> {
//!     let mut router = RestRouter::new();
//!     router.add_resource("/api/toys", ResourceBuilder::new(Arc::new(Toys::default())).list())?;
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router.into_router()).await.unwrap();
//!     Ok(())
//! }
//! ```

pub mod capability;
pub mod config;
pub mod controller;
pub mod error;
pub mod exception;
pub mod handler;
pub mod router;

// Re-export core types
pub use capability::{
    Blank, Capability, CapabilitySet, Collection, Creator, Deleter, Getter, IdKind, Lister,
    Replacer, Resource, ResourceId,
};
pub use config::{ConfigService, RestConfig};
pub use controller::Controller;
pub use error::{RequestError, RestError, Result};
pub use router::{Registration, ResourceBuilder, RestRouter, RouteInfo};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use restful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{
        Blank, Capability, CapabilitySet, Collection, Creator, Deleter, Getter, Lister, Replacer,
        Resource, ResourceId,
    };
    pub use crate::config::{ConfigService, RestConfig};
    pub use crate::controller::Controller;
    pub use crate::error::{RequestError, RestError, Result};
    pub use crate::exception::{ExceptionFilter, JsonExceptionFilter, PlainExceptionFilter};
    pub use crate::router::{ResourceBuilder, RestRouter};
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
