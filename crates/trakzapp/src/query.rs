//! # The List Pipeline
//!
//! Every list view is the same four-stage pipeline over a category's
//! items: tab filter, tag filter, text search, sort. The stages are pure
//! and the whole pipeline is recomputed per call; nothing is cached. At
//! hundreds of items this is O(n log n) per keystroke, which is fine, and
//! a cache here would only buy invalidation bugs.
//!
//! Tab membership uses the *effective* status: an item without a status
//! counts as its category's want bucket (see [`crate::category`]).
//!
//! All sorts are stable: items comparing equal under the chosen key keep
//! their pre-sort relative order.

use std::cmp::Ordering;

use crate::model::{HobbyItem, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    RatingDesc,
    RatingAsc,
    TitleAsc,
}

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Status bucket to show; `None` shows everything (the video view,
    /// or an explicit "all" listing).
    pub tab: Option<Status>,
    /// Case-insensitive substring over title, memo and tags.
    pub search: Option<String>,
    /// Exact-match tag filter.
    pub tag: Option<String>,
    pub sort: SortKey,
}

/// Run the pipeline. Input order is the collection order; output order is
/// the sort order with stable tie-breaking.
pub fn run_query<'a, I>(items: I, query: &ListQuery) -> Vec<&'a HobbyItem>
where
    I: IntoIterator<Item = &'a HobbyItem>,
{
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut out: Vec<&HobbyItem> = items
        .into_iter()
        .filter(|item| matches_tab(item, query.tab))
        .filter(|item| matches_tag(item, query.tag.as_deref()))
        .filter(|item| matches_search(item, needle.as_deref()))
        .collect();

    sort_items(&mut out, query.sort);
    out
}

fn matches_tab(item: &HobbyItem, tab: Option<Status>) -> bool {
    match tab {
        None => true,
        Some(tab) => item.effective_status() == Some(tab),
    }
}

fn matches_tag(item: &HobbyItem, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => item.tags.iter().any(|t| t == tag),
    }
}

fn matches_search(item: &HobbyItem, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    if item.title.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(memo) = &item.memo {
        if memo.to_lowercase().contains(needle) {
            return true;
        }
    }
    item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

pub fn sort_items(items: &mut [&HobbyItem], sort: SortKey) {
    match sort {
        SortKey::DateDesc => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::DateAsc => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::RatingDesc => items.sort_by(|a, b| compare_ratings(b, a)),
        SortKey::RatingAsc => items.sort_by(|a, b| compare_ratings(a, b)),
        SortKey::TitleAsc => {
            items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
}

fn compare_ratings(a: &HobbyItem, b: &HobbyItem) -> Ordering {
    // Ratings are validated finite, so partial_cmp cannot actually fail.
    a.sort_rating()
        .partial_cmp(&b.sort_rating())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::{DateTime, Utc};

    fn at(title: &str, date: &str) -> HobbyItem {
        let mut item = HobbyItem::new(title, Category::Movie);
        item.created_at = date.parse::<DateTime<Utc>>().unwrap();
        item
    }

    fn titles(results: &[&HobbyItem]) -> Vec<String> {
        results.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_tab_filter_uses_want_bucket_for_absent_status() {
        let mut wished = HobbyItem::new("No status yet", Category::Movie);
        wished.status = None;
        let mut watched = HobbyItem::new("Seen", Category::Movie);
        watched.status = Some(Status::Watched);
        let items = vec![wished, watched];

        let query = ListQuery {
            tab: Some(Status::WantToWatch),
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["No status yet"]);

        let query = ListQuery {
            tab: Some(Status::Watched),
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["Seen"]);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let mut a = HobbyItem::new("A", Category::Movie);
        a.tags = vec!["SF".to_string(), "Drama".to_string()];
        let mut b = HobbyItem::new("B", Category::Movie);
        b.tags = vec!["sf".to_string()];
        let items = vec![a, b];

        let query = ListQuery {
            tab: Some(Status::WantToWatch),
            tag: Some("SF".to_string()),
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["A"]);
    }

    #[test]
    fn test_search_matches_title_memo_or_tags() {
        let mut by_title = at("Dune Part Two", "2024-04-01T00:00:00Z");
        by_title.status = Some(Status::Watched);
        let mut by_memo = at("Arrival", "2024-03-01T00:00:00Z");
        by_memo.status = Some(Status::Watched);
        by_memo.memo = Some("liked the dune-like pacing".to_string());
        let mut by_tag = at("Stalker", "2024-02-01T00:00:00Z");
        by_tag.status = Some(Status::Watched);
        by_tag.tags = vec!["Dune-adjacent".to_string()];
        let mut miss = at("Heat", "2024-01-01T00:00:00Z");
        miss.status = Some(Status::Watched);
        let items = vec![by_title, by_memo, by_tag, miss];

        let query = ListQuery {
            tab: Some(Status::Watched),
            search: Some("dune".to_string()),
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(
            titles(&results),
            vec!["Dune Part Two", "Arrival", "Stalker"]
        );
    }

    #[test]
    fn test_tag_and_search_compose_as_intersection() {
        // Tag filter requires "Drama" membership; the search for "sf" must
        // then still match title/memo/tags on its own.
        let mut item = HobbyItem::new("Gattaca", Category::Movie);
        item.status = Some(Status::Watched);
        item.tags = vec!["SF".to_string(), "Drama".to_string()];
        let items = vec![item];

        let query = ListQuery {
            tab: Some(Status::Watched),
            tag: Some("Drama".to_string()),
            search: Some("sf".to_string()),
            ..Default::default()
        };
        // "sf" matches the tag "SF" case-insensitively, so it survives.
        assert_eq!(run_query(&items, &query).len(), 1);

        let query = ListQuery {
            tab: Some(Status::Watched),
            tag: Some("Comedy".to_string()),
            search: Some("sf".to_string()),
            ..Default::default()
        };
        // Tag filter excludes it regardless of the search match.
        assert_eq!(run_query(&items, &query).len(), 0);
    }

    #[test]
    fn test_filter_composition_equals_independent_intersection() {
        let mut items = Vec::new();
        for (title, status, tags, memo) in [
            ("A", Some(Status::Watched), vec!["SF"], Some("great")),
            ("B", Some(Status::Watched), vec!["SF", "Drama"], None),
            ("C", Some(Status::WantToWatch), vec!["SF"], Some("great")),
            ("D", Some(Status::Watched), vec!["Drama"], Some("great SF")),
            ("E", None, vec![], None),
        ] {
            let mut item = HobbyItem::new(title, Category::Movie);
            item.status = status;
            item.tags = tags.iter().map(|t| t.to_string()).collect();
            item.memo = memo.map(str::to_string);
            items.push(item);
        }

        let tab = Some(Status::Watched);
        let combined = run_query(
            &items,
            &ListQuery {
                tab,
                tag: Some("SF".to_string()),
                search: Some("great".to_string()),
                ..Default::default()
            },
        );

        let base = run_query(&items, &ListQuery { tab, ..Default::default() });
        let by_tag: Vec<&str> = run_query(
            &items,
            &ListQuery {
                tab,
                tag: Some("SF".to_string()),
                ..Default::default()
            },
        )
        .iter()
        .map(|i| i.title.as_str())
        .collect();
        let by_search: Vec<&str> = run_query(
            &items,
            &ListQuery {
                tab,
                search: Some("great".to_string()),
                ..Default::default()
            },
        )
        .iter()
        .map(|i| i.title.as_str())
        .collect();

        let expected: Vec<&str> = base
            .iter()
            .map(|i| i.title.as_str())
            .filter(|t| by_tag.contains(t) && by_search.contains(t))
            .collect();
        let got: Vec<&str> = combined.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_date_sort_directions() {
        let items = vec![at("Old", "2024-01-01T00:00:00Z"), at("New", "2024-02-01T00:00:00Z")];

        let results = run_query(&items, &ListQuery::default());
        assert_eq!(titles(&results), vec!["New", "Old"]);

        let query = ListQuery {
            sort: SortKey::DateAsc,
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["Old", "New"]);
    }

    #[test]
    fn test_rating_sort_is_stable_on_ties() {
        let mut a = at("A", "2024-01-01T00:00:00Z");
        a.rating = Some(3.0);
        let mut b = at("B", "2024-02-01T00:00:00Z");
        b.rating = Some(3.0);
        let items = vec![a, b];

        let query = ListQuery {
            sort: SortKey::RatingDesc,
            ..Default::default()
        };
        // Equal ratings: collection order is preserved.
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["A", "B"]);

        let query = ListQuery {
            sort: SortKey::DateDesc,
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["B", "A"]);
    }

    #[test]
    fn test_absent_rating_sorts_as_zero() {
        let mut rated = at("Rated", "2024-01-01T00:00:00Z");
        rated.rating = Some(0.5);
        let unrated = at("Unrated", "2024-02-01T00:00:00Z");
        let items = vec![unrated, rated];

        let query = ListQuery {
            sort: SortKey::RatingDesc,
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["Rated", "Unrated"]);

        let query = ListQuery {
            sort: SortKey::RatingAsc,
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["Unrated", "Rated"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let items = vec![
            at("banana", "2024-01-01T00:00:00Z"),
            at("Apple", "2024-02-01T00:00:00Z"),
            at("cherry", "2024-03-01T00:00:00Z"),
        ];
        let query = ListQuery {
            sort: SortKey::TitleAsc,
            ..Default::default()
        };
        let results = run_query(&items, &query);
        assert_eq!(titles(&results), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_pipeline_does_not_mutate_input() {
        let items = vec![at("B", "2024-01-01T00:00:00Z"), at("A", "2024-02-01T00:00:00Z")];
        let before: Vec<String> = items.iter().map(|i| i.title.clone()).collect();
        let _ = run_query(&items, &ListQuery::default());
        let after: Vec<String> = items.iter().map(|i| i.title.clone()).collect();
        assert_eq!(before, after);
    }
}
