//! Delete an item. Deletion is terminal; there is no trash to restore
//! from, so the CLI asks for confirmation before calling this.

use crate::commands::helpers::{resolve_selector, ItemSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::repo::Repository;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    repo: &mut Repository<B>,
    category: Category,
    selector: &ItemSelector,
) -> Result<CmdResult> {
    let id = resolve_selector(repo, category, selector)?;
    let title = repo
        .get(id)
        .map(|item| item.title.clone())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    if repo.delete(id) {
        result.add_message(CmdMessage::success(format!("Deleted: {}", title)));
    } else {
        // Somebody got there first; nothing to do.
        result.add_message(CmdMessage::info("Already gone"));
    }
    Ok(result)
}
