//! Create an item through the form, exactly as the add modal would.

use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::ItemForm;
use crate::model::{Category, Status};
use crate::repo::Repository;
use crate::store::StorageBackend;

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub title: String,
    pub status: Option<Status>,
    pub rating: Option<f32>,
    pub date_watched: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub memo: Option<String>,
    pub url: Option<String>,
    pub cover_url: Option<String>,
    pub channel_name: Option<String>,
}

pub fn run<B: StorageBackend>(
    repo: &mut Repository<B>,
    category: Category,
    options: AddOptions,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut form = ItemForm::create(category);

    form.set_title(options.title);
    if let Some(status) = options.status {
        form.set_status(Some(status))?;
    }
    if let Some(rating) = options.rating {
        form.set_rating(Some(rating))?;
        if !form.rating_visible() {
            result.add_message(CmdMessage::warning(format!(
                "Rating ignored: status is not {}",
                category
                    .policy()
                    .terminal_status
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "applicable".to_string())
            )));
        }
    }
    if let Some(date) = options.date_watched {
        form.set_date_watched(Some(date));
        if !form.date_watched_visible() {
            result.add_message(CmdMessage::warning(
                "Watch date ignored: status is not terminal",
            ));
        }
    }
    for tag in &options.tags {
        form.add_tag(tag);
    }
    if let Some(memo) = options.memo {
        form.set_memo(memo);
    }
    if let Some(url) = options.url {
        form.set_url(url);
        if !form.url_visible() {
            result.add_message(CmdMessage::warning(format!(
                "URL ignored: not applicable to {}",
                category.plural()
            )));
        }
    }
    if let Some(cover_url) = options.cover_url {
        form.set_cover_url(cover_url);
    }
    if let Some(channel_name) = options.channel_name {
        form.set_channel_name(channel_name);
        if !form.channel_visible() {
            result.add_message(CmdMessage::warning(format!(
                "Channel ignored: not applicable to {}",
                category.plural()
            )));
        }
    }

    let item = form.submit(repo)?;
    result.add_message(CmdMessage::success(format!(
        "Added to {}: {}",
        category.plural(),
        item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}
