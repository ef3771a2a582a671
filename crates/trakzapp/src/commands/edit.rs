//! Edit an item through the form; only changed fields reach the store.

use chrono::NaiveDate;

use crate::commands::helpers::{resolve_selector, ItemSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrakzError};
use crate::form::ItemForm;
use crate::model::{Category, Status};
use crate::repo::Repository;
use crate::store::StorageBackend;

#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub title: Option<String>,
    pub status: Option<Status>,
    pub rating: Option<f32>,
    pub date_watched: Option<NaiveDate>,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    /// Text fields: an empty string clears the field.
    pub memo: Option<String>,
    pub url: Option<String>,
    pub cover_url: Option<String>,
    pub channel_name: Option<String>,
}

pub fn run<B: StorageBackend>(
    repo: &mut Repository<B>,
    category: Category,
    selector: &ItemSelector,
    options: EditOptions,
) -> Result<CmdResult> {
    let id = resolve_selector(repo, category, selector)?;
    let item = repo
        .get(id)
        .cloned()
        .ok_or(TrakzError::ItemNotFound(id))?;

    let mut form = ItemForm::edit(&item);
    if let Some(title) = options.title {
        form.set_title(title);
    }
    // Status first: it decides whether rating and date survive.
    if let Some(status) = options.status {
        form.set_status(Some(status))?;
    }
    if let Some(rating) = options.rating {
        form.set_rating(Some(rating))?;
    }
    if let Some(date) = options.date_watched {
        form.set_date_watched(Some(date));
    }
    for tag in &options.add_tags {
        form.add_tag(tag);
    }
    for tag in &options.remove_tags {
        form.remove_tag(tag);
    }
    if let Some(memo) = options.memo {
        form.set_memo(memo);
    }
    if let Some(url) = options.url {
        form.set_url(url);
    }
    if let Some(cover_url) = options.cover_url {
        form.set_cover_url(cover_url);
    }
    if let Some(channel_name) = options.channel_name {
        form.set_channel_name(channel_name);
    }

    let updated = form.submit(repo)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated: {}", updated.title)));
    result.affected_items.push(updated);
    Ok(result)
}
