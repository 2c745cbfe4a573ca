use chrono::{DateTime, Utc};
use restful::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only notes keyed by UUID. Notes can be deleted but never edited.
#[derive(Default)]
pub struct NotesController {
    storage: RwLock<BTreeMap<String, Note>>,
}

impl Resource for NotesController {
    type Id = String;
    type Item = Note;
}

#[async_trait]
impl Lister for NotesController {
    async fn list(&self) -> Option<BTreeMap<String, Note>> {
        Some(self.storage.read().await.clone())
    }
}

#[async_trait]
impl Getter for NotesController {
    async fn get(&self, id: &String) -> Option<Note> {
        self.storage.read().await.get(id).cloned()
    }
}

impl Blank for NotesController {
    fn blank(&self) -> Option<Note> {
        Some(Note {
            title: "Untitled".to_string(),
            body: String::new(),
            created_at: Utc::now(),
        })
    }
}

#[async_trait]
impl Creator for NotesController {
    async fn add(&self, note: Note) -> String {
        let id = Uuid::new_v4().to_string();
        self.storage.write().await.insert(id.clone(), note);
        id
    }
}

#[async_trait]
impl Deleter for NotesController {
    async fn delete(&self, id: &String) -> bool {
        self.storage.write().await.remove(id).is_some()
    }
}
