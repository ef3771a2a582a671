//! # API Facade
//!
//! The single entry point for all trakz operations, regardless of the UI
//! in front of it. The facade dispatches to the command modules,
//! normalizes user-facing selectors, and returns structured
//! `Result<CmdResult>` values. Business logic lives in `commands/*`;
//! I/O and presentation live in the client.
//!
//! `TrakzApi<B>` is generic over the storage backend: production runs on
//! [`crate::store::fs::FsBackend`], tests on
//! [`crate::store::mem::MemBackend`], so the whole surface can be tested
//! without touching the filesystem.

use crate::commands::{self, helpers::parse_selector, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::repo::Repository;
use crate::store::StorageBackend;

pub use crate::commands::add::AddOptions;
pub use crate::commands::edit::EditOptions;
pub use crate::commands::list::ListOptions;
pub use crate::commands::mark::MarkAction;
pub use crate::commands::{CmdMessage, DisplayItem, MessageLevel};

pub struct TrakzApi<B: StorageBackend> {
    repo: Repository<B>,
}

impl<B: StorageBackend> TrakzApi<B> {
    /// Load the collection from the backend and wrap it.
    pub fn open(backend: B) -> Self {
        Self {
            repo: Repository::load(backend),
        }
    }

    pub fn list(
        &self,
        category: Category,
        options: &ListOptions,
        tag_cloud_size: usize,
    ) -> Result<CmdResult> {
        commands::list::run(&self.repo, category, options, tag_cloud_size)
    }

    pub fn add(&mut self, category: Category, options: AddOptions) -> Result<CmdResult> {
        commands::add::run(&mut self.repo, category, options)
    }

    pub fn edit(
        &mut self,
        category: Category,
        selector: &str,
        options: EditOptions,
    ) -> Result<CmdResult> {
        let selector = parse_selector(selector);
        commands::edit::run(&mut self.repo, category, &selector, options)
    }

    pub fn mark(
        &mut self,
        category: Category,
        selector: &str,
        action: MarkAction,
    ) -> Result<CmdResult> {
        let selector = parse_selector(selector);
        commands::mark::run(&mut self.repo, category, &selector, action)
    }

    pub fn remove(&mut self, category: Category, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector);
        commands::remove::run(&mut self.repo, category, &selector)
    }

    pub fn tags(&self, category: Category) -> Result<CmdResult> {
        commands::tags::run(&self.repo, category)
    }

    pub fn repo(&self) -> &Repository<B> {
        &self.repo
    }
}
