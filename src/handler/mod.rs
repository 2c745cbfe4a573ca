//! Handler factory
//!
//! One axum handler per capability. Each handler is generic over the
//! controller and reaches its instance through [`ResourceState`], so binding a
//! handler to a controller is a matter of `with_state`:
//!
//! ```rust,ignore
//! let route = axum::routing::get(handler::list::<Toys>)
//!     .with_state(ResourceState::new(toys, filter));
//! ```
//!
//! Every handler follows the same steps: extract the `{id}` segment if the
//! route has one, decode the body into a blank instance for add and replace,
//! call the controller, encode the result. Any failure is logged and handed to
//! the router's [`ExceptionFilter`]; it never escapes the request.

pub mod codec;

use crate::capability::{
    Blank, Creator, Deleter, Getter, Lister, Replacer, Resource, ResourceId,
};
use crate::error::RequestError;
use crate::exception::ExceptionFilter;
use axum::{
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    response::Response,
};
use serde_json::json;
use std::any::type_name;
use std::sync::Arc;

/// Path parameter as extracted by axum, rejection included.
pub type IdSegment = Result<Path<String>, PathRejection>;

/// Request body as extracted by axum, rejection included.
pub type RequestBody = Result<Bytes, BytesRejection>;

/// State bound to every handler of one resource.
pub struct ResourceState<C> {
    controller: Arc<C>,
    filter: Arc<dyn ExceptionFilter>,
}

impl<C> Clone for ResourceState<C> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            filter: Arc::clone(&self.filter),
        }
    }
}

impl<C: Resource> ResourceState<C> {
    pub fn new(controller: Arc<C>, filter: Arc<dyn ExceptionFilter>) -> Self {
        Self { controller, filter }
    }

    pub fn controller(&self) -> &Arc<C> {
        &self.controller
    }

    /// The request boundary: failures stop here.
    fn respond(&self, result: Result<Response, RequestError>) -> Response {
        match result {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(controller = type_name::<C>(), %error, "request failed");
                self.filter.catch(error)
            }
        }
    }

    fn blank(&self) -> Result<C::Item, RequestError>
    where
        C: Blank,
    {
        self.controller
            .blank()
            .ok_or(RequestError::BlankUnavailable {
                controller: type_name::<C>(),
            })
    }
}

fn resource_id<I: ResourceId>(segment: IdSegment) -> Result<I, RequestError> {
    let Path(segment) =
        segment.map_err(|rejection| RequestError::MissingId(rejection.body_text()))?;
    I::from_segment(&segment).ok_or(RequestError::InvalidId {
        segment,
        kind: I::KIND,
    })
}

fn request_body(body: RequestBody) -> Result<Bytes, RequestError> {
    body.map_err(|rejection| RequestError::UnreadableBody(rejection.body_text()))
}

/// `GET {prefix}/`
pub async fn list<C: Lister>(State(state): State<ResourceState<C>>) -> Response {
    state.respond(try_list(&state).await)
}

async fn try_list<C: Lister>(state: &ResourceState<C>) -> Result<Response, RequestError> {
    let items = state
        .controller
        .list()
        .await
        .ok_or(RequestError::MissingCollection {
            controller: type_name::<C>(),
        })?;
    codec::encode(&items)
}

/// `GET {prefix}/{id}`
pub async fn get<C: Getter>(State(state): State<ResourceState<C>>, id: IdSegment) -> Response {
    state.respond(try_get(&state, id).await)
}

async fn try_get<C: Getter>(
    state: &ResourceState<C>,
    id: IdSegment,
) -> Result<Response, RequestError> {
    let id = resource_id::<C::Id>(id)?;
    let item = state.controller.get(&id).await;
    codec::encode(&codec::keyed(&id, item))
}

/// `POST {prefix}/`
pub async fn add<C: Creator>(State(state): State<ResourceState<C>>, body: RequestBody) -> Response {
    state.respond(try_add(&state, body).await)
}

async fn try_add<C: Creator>(
    state: &ResourceState<C>,
    body: RequestBody,
) -> Result<Response, RequestError> {
    let body = request_body(body)?;
    let item = codec::decode_into(state.blank()?, &body)?;
    let id = state.controller.add(item.clone()).await;
    codec::encode(&codec::keyed(&id, item))
}

/// `PUT {prefix}/{id}`
pub async fn replace<C: Replacer>(
    State(state): State<ResourceState<C>>,
    id: IdSegment,
    body: RequestBody,
) -> Response {
    state.respond(try_replace(&state, id, body).await)
}

async fn try_replace<C: Replacer>(
    state: &ResourceState<C>,
    id: IdSegment,
    body: RequestBody,
) -> Result<Response, RequestError> {
    let id = resource_id::<C::Id>(id)?;
    let body = request_body(body)?;
    let item = codec::decode_into(state.blank()?, &body)?;
    state.controller.replace(&id, item.clone()).await;
    codec::encode(&codec::keyed(&id, item))
}

/// `DELETE {prefix}/{id}`
pub async fn delete<C: Deleter>(State(state): State<ResourceState<C>>, id: IdSegment) -> Response {
    state.respond(try_delete(&state, id).await)
}

async fn try_delete<C: Deleter>(
    state: &ResourceState<C>,
    id: IdSegment,
) -> Result<Response, RequestError> {
    let id = resource_id::<C::Id>(id)?;
    let ok = state.controller.delete(&id).await;
    codec::encode(&json!({ "ok": ok }))
}
