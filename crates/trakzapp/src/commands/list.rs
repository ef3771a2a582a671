//! The category list view: tab, tag filter, search, sort, tag cloud.

use std::collections::HashMap;

use uuid::Uuid;

use crate::commands::{helpers, CmdResult, DisplayItem};
use crate::error::{Result, TrakzError};
use crate::model::{Category, Status};
use crate::query::{run_query, ListQuery, SortKey};
use crate::repo::Repository;
use crate::store::StorageBackend;
use crate::tags::top_tags;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Tab to show. `None` falls back to the category's default tab;
    /// `all` bypasses tab filtering entirely.
    pub tab: Option<Status>,
    pub all: bool,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub sort: SortKey,
}

pub fn run<B: StorageBackend>(
    repo: &Repository<B>,
    category: Category,
    options: &ListOptions,
    tag_cloud_size: usize,
) -> Result<CmdResult> {
    let policy = category.policy();

    if let Some(tab) = options.tab {
        if !policy.allows_status(tab) {
            return Err(TrakzError::Api(format!(
                "{} have no '{}' tab",
                capitalized_plural(category),
                tab
            )));
        }
    }
    let tab = if options.all {
        None
    } else {
        options.tab.or(policy.default_tab)
    };

    let items = repo.by_category(category);

    // Display indexes come from the canonical listing so that what `list`
    // prints is what the mutation commands resolve.
    let index_of: HashMap<Uuid, usize> = helpers::canonical_listing(repo, category)
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.id, pos + 1))
        .collect();

    let query = ListQuery {
        tab,
        search: options.search.clone(),
        tag: options.tag.clone(),
        sort: options.sort,
    };
    let listed: Vec<DisplayItem> = run_query(items.iter().copied(), &query)
        .into_iter()
        .map(|item| DisplayItem {
            index: index_of[&item.id],
            item: item.clone(),
        })
        .collect();

    let cloud = top_tags(&items, tag_cloud_size);

    let mut result = CmdResult::default()
        .with_listed_items(listed)
        .with_tag_cloud(cloud);
    if result.listed_items.is_empty() {
        result.add_message(crate::commands::CmdMessage::info(format!(
            "No {} in this view",
            category.plural()
        )));
    }
    Ok(result)
}

fn capitalized_plural(category: Category) -> String {
    let plural = category.plural();
    let mut chars = plural.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
