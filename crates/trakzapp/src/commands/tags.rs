//! Frequency-ranked tag listing for a category.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::repo::Repository;
use crate::store::StorageBackend;
use crate::tags::tag_frequency;

pub fn run<B: StorageBackend>(repo: &Repository<B>, category: Category) -> Result<CmdResult> {
    let items = repo.by_category(category);
    let cloud = tag_frequency(&items);

    let mut result = CmdResult::default();
    if cloud.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No tags on any {} yet",
            category.plural()
        )));
    }
    Ok(result.with_tag_cloud(cloud))
}
