//! Capability contracts
//!
//! A controller opts into REST operations by implementing any subset of the
//! traits in this module. Every trait extends [`Resource`], which fixes the
//! identifier and item types shared by all of a controller's operations.
//!
//! | Trait | Operation | Route |
//! |---|---|---|
//! | [`Lister`] | list the whole collection | `GET {prefix}/` |
//! | [`Getter`] | fetch one item | `GET {prefix}/{id}` |
//! | [`Blank`] + [`Creator`] | add an item | `POST {prefix}/` |
//! | [`Blank`] + [`Replacer`] | replace an item | `PUT {prefix}/{id}` |
//! | [`Deleter`] | delete an item | `DELETE {prefix}/{id}` |
//!
//! Controllers must be safe to call concurrently: the router never serializes
//! calls, so any storage behind a controller needs its own synchronization.
//!
//! # Example
//!
//! ```rust,ignore
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
//! ```

mod id;

pub use id::{IdKind, ResourceId};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Whole collection of a resource, keyed by identifier.
pub type Collection<C> = BTreeMap<<C as Resource>::Id, <C as Resource>::Item>;

/// Base contract shared by every capability.
pub trait Resource: Send + Sync + 'static {
    /// Key distinguishing items in the collection.
    type Id: ResourceId;

    /// Value stored under each key. Decoded from request bodies and encoded
    /// into responses.
    type Item: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
}

/// Lists every item of the resource.
#[async_trait]
pub trait Lister: Resource {
    /// Returns the current collection.
    ///
    /// `None` means the controller has no collection at all and fails the
    /// request. An empty map is a valid, empty collection.
    async fn list(&self) -> Option<BTreeMap<Self::Id, Self::Item>>;
}

/// Returns a single item by identifier.
#[async_trait]
pub trait Getter: Resource {
    /// Returns the item stored under `id`, or `None` when there is none.
    ///
    /// A missing item is not an error: the response carries `null` under the
    /// requested identifier.
    async fn get(&self, id: &Self::Id) -> Option<Self::Item>;
}

/// Produces the blank instance a request body is decoded into.
///
/// Shared by [`Creator`] and [`Replacer`]. Fields missing from a request body
/// keep the values of the blank instance.
pub trait Blank: Resource {
    /// Returns a fresh blank item. `None` is a controller bug and fails the
    /// request.
    fn blank(&self) -> Option<Self::Item>;
}

/// Adds items to the resource.
#[async_trait]
pub trait Creator: Blank {
    /// Stores `item` and returns the identifier assigned to it.
    async fn add(&self, item: Self::Item) -> Self::Id;
}

/// Replaces items of the resource in place.
#[async_trait]
pub trait Replacer: Blank {
    /// Replaces whatever is stored under `id` with `item`.
    async fn replace(&self, id: &Self::Id, item: Self::Item);
}

/// Deletes items from the resource.
#[async_trait]
pub trait Deleter: Resource {
    /// Removes the item stored under `id`, reporting whether anything was
    /// removed.
    async fn delete(&self, id: &Self::Id) -> bool;
}

/// A REST operation a controller may provide.
///
/// Declaration order is the registration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    List,
    Get,
    Add,
    Replace,
    Delete,
}

impl Capability {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of capabilities provided by one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    bits: u8,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `capability`, returning `false` if it was already present.
    pub fn insert(&mut self, capability: Capability) -> bool {
        let present = self.contains(capability);
        self.bits |= capability.bit();
        !present
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.bits & capability.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::iter().filter(|capability| self.contains(*capability))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::new();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|capability| capability.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}
