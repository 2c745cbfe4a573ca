use crate::capability::{
    Capability, CapabilitySet, Creator, Deleter, Getter, Lister, Replacer, Resource,
};
use crate::handler::{self, ResourceState};
use axum::routing::{MethodRouter, on};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builder for the set of capabilities one controller exposes
///
/// Each method is only available when the controller implements the matching
/// trait, so a route can never be wired to an operation the controller lacks.
///
/// # Example
/// ```rust,ignore
/// let toys = ResourceBuilder::new(Arc::new(Toys::default()))
///     .list()
///     .get()
///     .delete();
///
/// router.add_resource("/api/toys", toys)?;
/// ```
pub struct ResourceBuilder<C: Resource> {
    controller: Arc<C>,
    handlers: BTreeMap<Capability, MethodRouter<ResourceState<C>>>,
}

impl<C: Resource> ResourceBuilder<C> {
    /// Create a builder exposing nothing yet
    pub fn new(controller: Arc<C>) -> Self {
        Self {
            controller,
            handlers: BTreeMap::new(),
        }
    }

    /// Expose `GET {prefix}/`
    pub fn list(self) -> Self
    where
        C: Lister,
    {
        self.with(Capability::List, on(Capability::List.method_filter(), handler::list::<C>))
    }

    /// Expose `GET {prefix}/{id}`
    pub fn get(self) -> Self
    where
        C: Getter,
    {
        self.with(Capability::Get, on(Capability::Get.method_filter(), handler::get::<C>))
    }

    /// Expose `POST {prefix}/`
    pub fn add(self) -> Self
    where
        C: Creator,
    {
        self.with(Capability::Add, on(Capability::Add.method_filter(), handler::add::<C>))
    }

    /// Expose `PUT {prefix}/{id}`
    pub fn replace(self) -> Self
    where
        C: Replacer,
    {
        self.with(
            Capability::Replace,
            on(Capability::Replace.method_filter(), handler::replace::<C>),
        )
    }

    /// Expose `DELETE {prefix}/{id}`
    pub fn delete(self) -> Self
    where
        C: Deleter,
    {
        self.with(
            Capability::Delete,
            on(Capability::Delete.method_filter(), handler::delete::<C>),
        )
    }

    pub fn controller(&self) -> &Arc<C> {
        &self.controller
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.handlers.keys().copied().collect()
    }

    fn with(mut self, capability: Capability, handler: MethodRouter<ResourceState<C>>) -> Self {
        self.handlers.insert(capability, handler);
        self
    }

    /// Handlers in registration order.
    pub(crate) fn into_parts(
        self,
    ) -> (
        Arc<C>,
        BTreeMap<Capability, MethodRouter<ResourceState<C>>>,
    ) {
        (self.controller, self.handlers)
    }
}
