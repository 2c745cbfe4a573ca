use restful::prelude::*;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Integers keyed by sequential ids.
#[derive(Default)]
pub struct ToysController {
    storage: RwLock<BTreeMap<u64, i64>>,
    next_key: AtomicU64,
}

impl Resource for ToysController {
    type Id = u64;
    type Item = i64;
}

#[async_trait]
impl Lister for ToysController {
    async fn list(&self) -> Option<BTreeMap<u64, i64>> {
        Some(self.storage.read().await.clone())
    }
}

#[async_trait]
impl Getter for ToysController {
    async fn get(&self, id: &u64) -> Option<i64> {
        self.storage.read().await.get(id).copied()
    }
}

impl Blank for ToysController {
    fn blank(&self) -> Option<i64> {
        Some(0)
    }
}

#[async_trait]
impl Creator for ToysController {
    async fn add(&self, toy: i64) -> u64 {
        let key = self.next_key.fetch_add(1, Ordering::SeqCst);
        self.storage.write().await.insert(key, toy);
        key
    }
}

#[async_trait]
impl Replacer for ToysController {
    async fn replace(&self, id: &u64, toy: i64) {
        self.storage.write().await.insert(*id, toy);
    }
}

#[async_trait]
impl Deleter for ToysController {
    async fn delete(&self, id: &u64) -> bool {
        self.storage.write().await.remove(id).is_some()
    }
}

impl Controller for ToysController {
    fn capabilities(resource: ResourceBuilder<Self>) -> ResourceBuilder<Self> {
        resource.list().get().add().replace().delete()
    }
}
