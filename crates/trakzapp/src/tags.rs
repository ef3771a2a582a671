//! Derived tag frequencies.
//!
//! The tag cloud shown at the top of each view is not stored anywhere: it
//! is recomputed from the collection on demand. At the expected scale
//! (hundreds of items) a linear scan per call is cheaper than any cache
//! and has no invalidation to get wrong.
//!
//! Tags are compared case-sensitively; `"SF"` and `"sf"` are two tags.

use serde::Serialize;

use crate::model::HobbyItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Distinct tags with occurrence counts, most frequent first. Ties keep
/// first-seen order across the input.
pub fn tag_frequency(items: &[&HobbyItem]) -> Vec<TagCount> {
    let mut entries: Vec<TagCount> = Vec::new();
    for item in items {
        for tag in &item.tags {
            match entries.iter_mut().find(|e| e.tag == *tag) {
                Some(entry) => entry.count += 1,
                None => entries.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }
    // Stable sort: equal counts stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// The presentation truncation: the views show at most `limit` tags.
pub fn top_tags(items: &[&HobbyItem], limit: usize) -> Vec<TagCount> {
    let mut entries = tag_frequency(items);
    entries.truncate(limit);
    entries
}
