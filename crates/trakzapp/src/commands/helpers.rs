//! Shared command utilities: the canonical listing and item selectors.

use uuid::Uuid;

use crate::error::{Result, TrakzError};
use crate::model::{Category, HobbyItem};
use crate::query::{run_query, ListQuery};
use crate::repo::Repository;
use crate::store::StorageBackend;

/// How commands address an item: a 1-based display index into the
/// category's canonical listing, or a case-insensitive title substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(usize),
    Title(String),
}

/// Bare numbers are indexes; anything else is a title search.
pub fn parse_selector(input: &str) -> ItemSelector {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = trimmed.parse::<usize>() {
            return ItemSelector::Index(n);
        }
    }
    ItemSelector::Title(trimmed.to_string())
}

/// The canonical listing of a category: all its items, newest first.
/// Display indexes printed by `list` and resolved by the mutation
/// commands both come from this ordering.
pub fn canonical_listing<B: StorageBackend>(
    repo: &Repository<B>,
    category: Category,
) -> Vec<&HobbyItem> {
    run_query(repo.by_category(category), &ListQuery::default())
}

/// Resolve a selector to an item id within a category.
///
/// Index selectors must be in range; title selectors must match exactly
/// one item (mutating several items on a fuzzy match would be a trap).
pub fn resolve_selector<B: StorageBackend>(
    repo: &Repository<B>,
    category: Category,
    selector: &ItemSelector,
) -> Result<Uuid> {
    let listing = canonical_listing(repo, category);
    match selector {
        ItemSelector::Index(n) => listing
            .get(n.checked_sub(1).ok_or_else(|| {
                TrakzError::Api("Indexes start at 1".to_string())
            })?)
            .map(|item| item.id)
            .ok_or_else(|| {
                TrakzError::Api(format!(
                    "No {} at index {} (have {})",
                    category,
                    n,
                    listing.len()
                ))
            }),
        ItemSelector::Title(term) => {
            if term.is_empty() {
                return Err(TrakzError::Api("Empty selector".to_string()));
            }
            let term_lower = term.to_lowercase();
            let matches: Vec<&&HobbyItem> = listing
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&term_lower))
                .collect();
            match matches.len() {
                0 => Err(TrakzError::Api(format!(
                    "No {} found matching \"{}\"",
                    category, term
                ))),
                1 => Ok(matches[0].id),
                n => Err(TrakzError::Api(format!(
                    "\"{}\" matches {} {}; pick one by index",
                    term,
                    n,
                    category.plural()
                ))),
            }
        }
    }
}
