use std::cell::RefCell;

use super::StorageBackend;
use crate::error::{Result, TrakzError};
use crate::model::HobbyItem;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since trakz is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without dragging in
/// a lock.
pub struct MemBackend {
    items: RefCell<Vec<HobbyItem>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing degraded persistence.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// What the backend currently holds, for asserting on write-through.
    pub fn stored(&self) -> Vec<HobbyItem> {
        self.items.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_collection(&self) -> Result<Vec<HobbyItem>> {
        Ok(self.items.borrow().clone())
    }

    fn save_collection(&self, items: &[HobbyItem]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TrakzError::Store("Simulated write error".to_string()));
        }
        *self.items.borrow_mut() = items.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Category, HobbyItem, Status};

    pub fn item(title: &str, category: Category) -> HobbyItem {
        HobbyItem::new(title, category)
    }

    pub fn with_status(title: &str, category: Category, status: Status) -> HobbyItem {
        let mut item = HobbyItem::new(title, category);
        item.status = Some(status);
        item
    }

    pub fn rated(title: &str, category: Category, rating: f32) -> HobbyItem {
        let policy = category.policy();
        let mut item = HobbyItem::new(title, category);
        item.status = policy.terminal_status;
        item.rating = Some(rating);
        item
    }

    pub fn tagged(title: &str, category: Category, tags: &[&str]) -> HobbyItem {
        let mut item = HobbyItem::new(title, category);
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        item
    }
}
