//! Quick status transitions: the "mark watched" / "start watching"
//! buttons of the list views.
//!
//! Marking done never writes a placeholder rating; a real rating goes in
//! through the edit form. Moving back to a non-terminal status clears
//! rating and watch date, same as the form would.

use crate::commands::helpers::{resolve_selector, ItemSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrakzError};
use crate::model::{Category, ItemPatch};
use crate::repo::Repository;
use crate::store::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction {
    /// Move to the category's terminal status (watched / completed).
    Done,
    /// Move to the category's in-progress status (watching / reading).
    Start,
}

pub fn run<B: StorageBackend>(
    repo: &mut Repository<B>,
    category: Category,
    selector: &ItemSelector,
    action: MarkAction,
) -> Result<CmdResult> {
    let policy = category.policy();
    let target = match action {
        MarkAction::Done => policy.terminal_status.ok_or_else(|| {
            TrakzError::Api(format!("{} have no status to mark", category.plural()))
        })?,
        MarkAction::Start => policy.start_status().ok_or_else(|| {
            TrakzError::Api(format!(
                "{} have no in-progress status",
                category.plural()
            ))
        })?,
    };

    let id = resolve_selector(repo, category, selector)?;
    let item = repo.get(id).ok_or(TrakzError::ItemNotFound(id))?;

    let mut result = CmdResult::default();
    if item.status == Some(target) {
        result.add_message(CmdMessage::info(format!(
            "{} is already {}",
            item.title,
            target.label()
        )));
        return Ok(result);
    }

    let mut patch = ItemPatch {
        status: Some(Some(target)),
        ..Default::default()
    };
    if !policy.is_terminal(target) {
        // Leaving the terminal state invalidates rating and watch date.
        patch.rating = Some(None);
        patch.date_watched = Some(None);
    }

    // The selector just resolved, so the update cannot miss.
    if let Some(updated) = repo.update(id, &patch) {
        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            updated.title,
            target.label()
        )));
        result.affected_items.push(updated);
    }
    Ok(result)
}
