//! # Item Repository
//!
//! [`Repository`] owns the canonical ordered collection: newest item
//! first, insertion order otherwise. It enforces identity and ordering
//! and nothing else; display ordering is the query pipeline's concern.
//!
//! Every mutation writes the full collection through to the backend
//! before returning. A failed write is logged and swallowed: the
//! in-memory state stays authoritative for the session and the caller
//! never sees a persistence error from a mutation. This is a deliberate
//! trade inherited from the write-through design: worst case, the session
//! ends without its last changes on disk.

use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, TrakzError};
use crate::model::{normalize_tags, Category, HobbyItem, ItemPatch};
use crate::store::StorageBackend;

pub struct Repository<B: StorageBackend> {
    backend: B,
    items: Vec<HobbyItem>,
}

impl<B: StorageBackend> Repository<B> {
    /// Load the initial collection. An unreadable store degrades to an
    /// empty, memory-only session rather than failing startup.
    pub fn load(backend: B) -> Self {
        let items = match backend.load_collection() {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "could not load collection, starting empty");
                Vec::new()
            }
        };
        Self { backend, items }
    }

    pub fn items(&self) -> &[HobbyItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&HobbyItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&HobbyItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Insert a new item at the front of the collection (newest-first).
    /// Fills in the category's default status when none is set.
    pub fn create(&mut self, mut item: HobbyItem) -> Result<HobbyItem> {
        if item.title.trim().is_empty() {
            return Err(TrakzError::Validation(
                "Title must not be empty".to_string(),
            ));
        }
        if item.status.is_none() {
            item.status = item.category.policy().default_status;
        }
        item.tags = normalize_tags(item.tags);

        self.items.insert(0, item.clone());
        self.persist();
        Ok(item)
    }

    /// Merge a patch into the item matching `id`. Unknown ids are a
    /// silent no-op (a list view may race a delete against an in-flight
    /// edit); `None` tells the caller nothing was there.
    pub fn update(&mut self, id: Uuid, patch: &ItemPatch) -> Option<HobbyItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        if patch.is_empty() {
            return Some(item.clone());
        }
        item.apply(patch);
        let updated = item.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the item matching `id`. Idempotent: deleting twice leaves
    /// the collection as after the first call.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save_collection(&self.items) {
            warn!(error = %e, "could not persist collection, continuing in memory");
        }
    }
}
