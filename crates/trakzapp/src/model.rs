//! # Domain Model: Items and Patches
//!
//! This module defines the core data structures for trakz: [`HobbyItem`],
//! [`Category`], [`Status`] and [`ItemPatch`]. It also handles loading
//! legacy records, which is crucial for data integrity.
//!
//! ## The Shape
//!
//! An item is one flat record with category-dependent optional fields.
//! Which optional fields are legal for a given category is NOT decided
//! here: all gating goes through the policy table in [`crate::category`],
//! so no consumer re-implements the rules with ad-hoc category checks.
//!
//! ## Legacy Data
//!
//! The persisted collection may contain records written by two historical
//! variants of the app. Loading normalizes them:
//!
//! 1. **Tags**: the old variant stored tags as one comma-joined string;
//!    the current representation is an ordered list of distinct entries.
//!    Joined strings are split, trimmed, and deduplicated on load.
//! 2. **Category**: videos used to be stored under `"youtube"`.
//! 3. **Rating**: quick actions used to write a placeholder rating of `0`.
//!    Zero is not a rating; it becomes absent on load.
//! 4. **Field names**: camelCase keys (`dateWatched`, `createdAt`, ...)
//!    are accepted as aliases of the current snake_case keys.
//!
//! Records are always written back in the current representation.
//!
//! ## Patches
//!
//! [`ItemPatch`] is the partial-update shape consumed by
//! [`crate::repo::Repository::update`]. Clearable fields are doubly
//! optional: outer `None` leaves the field untouched, inner `None` clears
//! it. The patch has no `id`, `category` or `created_at` field, so those
//! cannot change after creation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TrakzError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Movie,
    Anime,
    Book,
    Video,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Movie,
        Category::Anime,
        Category::Book,
        Category::Video,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Anime => "anime",
            Category::Book => "book",
            Category::Video => "video",
        }
    }

    /// Plural view name, used in messages and headers.
    pub fn plural(self) -> &'static str {
        match self {
            Category::Movie => "movies",
            Category::Anime => "anime",
            Category::Book => "books",
            Category::Video => "videos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrakzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Category::Movie),
            "anime" => Ok(Category::Anime),
            "book" => Ok(Category::Book),
            "video" => Ok(Category::Video),
            other => Err(TrakzError::Validation(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}

/// Lifecycle label of an item. The union of all categories' vocabularies;
/// which values are legal for a category comes from its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    WantToWatch,
    Watching,
    Watched,
    WantToRead,
    Reading,
    Completed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::WantToWatch => "want_to_watch",
            Status::Watching => "watching",
            Status::Watched => "watched",
            Status::WantToRead => "want_to_read",
            Status::Reading => "reading",
            Status::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::WantToWatch => "want to watch",
            Status::Watching => "watching",
            Status::Watched => "watched",
            Status::WantToRead => "want to read",
            Status::Reading => "reading",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrakzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "want_to_watch" => Ok(Status::WantToWatch),
            "watching" => Ok(Status::Watching),
            "watched" => Ok(Status::Watched),
            "want_to_read" => Ok(Status::WantToRead),
            "reading" => Ok(Status::Reading),
            "completed" => Ok(Status::Completed),
            other => Err(TrakzError::Validation(format!("Unknown status '{}'", other))),
        }
    }
}

/// Ratings run from 0.5 to 5 in half-star steps. Zero is "no rating".
pub fn valid_rating(rating: f32) -> bool {
    (0.0..=5.0).contains(&rating) && (rating * 2.0).fract() == 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HobbyItem {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_watched: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Custom deserializer to normalize records written by historical variants
// of the app: comma-joined tags, the "youtube" category name, placeholder
// zero ratings and camelCase field names.
impl<'de> Deserialize<'de> for HobbyItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ItemHelper::deserialize(deserializer)?;

        let category = match helper.category.as_str() {
            // Pre-rename category value for videos.
            "youtube" => Category::Video,
            other => other.parse().map_err(serde::de::Error::custom)?,
        };

        let tags = match helper.tags {
            Some(TagsField::List(list)) => normalize_tags(list),
            Some(TagsField::Joined(joined)) => {
                normalize_tags(joined.split(',').map(str::to_string))
            }
            None => Vec::new(),
        };

        Ok(HobbyItem {
            id: helper.id,
            title: helper.title,
            category,
            status: helper.status,
            // Zero was a quick-action placeholder, not a rating.
            rating: helper.rating.filter(|r| *r > 0.0 && *r <= 5.0),
            date_watched: helper.date_watched,
            tags,
            memo: helper.memo,
            url: helper.url,
            cover_url: helper.cover_url,
            channel_name: helper.channel_name,
            created_at: helper.created_at,
        })
    }
}

#[derive(Deserialize)]
struct ItemHelper {
    id: Uuid,
    title: String,
    category: String,
    #[serde(default)]
    status: Option<Status>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default, alias = "dateWatched")]
    date_watched: Option<NaiveDate>,
    #[serde(default)]
    tags: Option<TagsField>,
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, alias = "coverUrl")]
    cover_url: Option<String>,
    #[serde(default, alias = "channelName")]
    channel_name: Option<String>,
    #[serde(alias = "createdAt")]
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsField {
    List(Vec<String>),
    Joined(String),
}

impl HobbyItem {
    /// A fresh item with only identity and the required fields set.
    /// Status defaulting is the repository's job on insert.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category,
            status: None,
            rating: None,
            date_watched: None,
            tags: Vec::new(),
            memo: None,
            url: None,
            cover_url: None,
            channel_name: None,
            created_at: Utc::now(),
        }
    }

    /// The status used by filtering: the explicit status, or the
    /// category's "want" bucket when absent.
    pub fn effective_status(&self) -> Option<Status> {
        self.status.or(self.category.policy().want_status)
    }

    /// The rating as shown to the user: present only when the category
    /// rates at all and the item has reached its terminal status.
    pub fn effective_rating(&self) -> Option<f32> {
        let policy = self.category.policy();
        if !policy.rating_applicable {
            return None;
        }
        match (self.status, policy.terminal_status) {
            (Some(s), Some(t)) if s == t => self.rating.filter(|r| *r > 0.0),
            _ => None,
        }
    }

    /// The rating as compared by sorting: absent counts as zero.
    pub fn sort_rating(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    /// Merge a patch over this item. Outer `None` preserves a field,
    /// inner `None` clears it.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(date_watched) = patch.date_watched {
            self.date_watched = date_watched;
        }
        if let Some(tags) = &patch.tags {
            self.tags = normalize_tags(tags.clone());
        }
        if let Some(memo) = &patch.memo {
            self.memo = memo.clone();
        }
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
        if let Some(cover_url) = &patch.cover_url {
            self.cover_url = cover_url.clone();
        }
        if let Some(channel_name) = &patch.channel_name {
            self.channel_name = channel_name.clone();
        }
    }
}

/// Partial update for one item. `id`, `category` and `created_at` are
/// deliberately absent: they never change.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub status: Option<Option<Status>>,
    pub rating: Option<Option<f32>>,
    pub date_watched: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub memo: Option<Option<String>>,
    pub url: Option<Option<String>>,
    pub cover_url: Option<Option<String>>,
    pub channel_name: Option<Option<String>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.rating.is_none()
            && self.date_watched.is_none()
            && self.tags.is_none()
            && self.memo.is_none()
            && self.url.is_none()
            && self.cover_url.is_none()
            && self.channel_name.is_none()
    }
}

/// Trim, drop blanks, and deduplicate (exact match) while preserving the
/// first occurrence's position.
pub fn normalize_tags<I: IntoIterator<Item = String>>(tags: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
