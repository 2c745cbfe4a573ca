use crate::capability::Resource;
use crate::router::ResourceBuilder;

/// A controller that declares its own capability set
///
/// Implementing this trait lets a controller be registered as a whole with
/// [`RestRouter::add_controller`](crate::router::RestRouter::add_controller)
/// instead of listing its capabilities at every registration site.
///
/// The default declares nothing, and registering such a controller fails with
/// [`RestError::NoCapabilities`](crate::error::RestError::NoCapabilities).
///
/// # Example
/// ```rust,ignore
/// impl Controller for Toys {
///     fn capabilities(resource: ResourceBuilder<Self>) -> ResourceBuilder<Self> {
///         resource.list().get().add().replace().delete()
///     }
/// }
/// ```
pub trait Controller: Resource + Sized {
    fn capabilities(resource: ResourceBuilder<Self>) -> ResourceBuilder<Self> {
        resource
    }
}
