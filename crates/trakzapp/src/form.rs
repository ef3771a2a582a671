//! # The Add/Edit Form
//!
//! [`ItemForm`] manages the draft for one item. The form's states map
//! onto ownership: no form value means the form is closed; constructing
//! one (via [`ItemForm::create`] or [`ItemForm::edit`]) opens it, and the
//! caller closes it by dropping it — after a successful [`ItemForm::submit`],
//! or unconditionally on cancel. A failed submit leaves the caller
//! holding the form, draft intact, which is exactly "submission aborted,
//! form stays open".
//!
//! ## Field visibility doubles as persistence
//!
//! Whether a field is shown is decided by the category policy plus the
//! draft's current status, and the same predicate decides whether the
//! field is persisted: a hidden field's draft value is dropped at submit
//! time, not merely left unrendered. The one rule that must not be lost:
//!
//! > moving the draft to a non-terminal status CLEARS rating and watch
//! > date on the draft itself.
//!
//! A want-listed item must never carry a stale rating.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{Result, TrakzError};
use crate::model::{valid_rating, Category, HobbyItem, ItemPatch, Status};
use crate::repo::Repository;
use crate::store::StorageBackend;

/// The in-progress, unsaved state of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub status: Option<Status>,
    pub rating: Option<f32>,
    pub date_watched: Option<NaiveDate>,
    pub tags: Vec<String>,
    // Text inputs hold strings, not options; blank means absent at submit.
    pub memo: String,
    pub url: String,
    pub cover_url: String,
    pub channel_name: String,
}

#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Creating,
    /// Snapshot of the item being edited, kept for diffing at submit.
    Editing(Box<HobbyItem>),
}

#[derive(Debug, Clone)]
pub struct ItemForm {
    category: Category,
    mode: FormMode,
    draft: ItemDraft,
}

/// The normalized subset of an external metadata search result that the
/// form consumes. Producing this from whatever a search service returns
/// is the collaborator's job.
#[derive(Debug, Clone, Default)]
pub struct CandidateFields {
    pub title: Option<String>,
    pub cover_url: Option<String>,
    pub synopsis: Option<String>,
    pub tags: Vec<String>,
}

/// Synopses from search services can be essays; the memo keeps the head.
const SYNOPSIS_MAX_CHARS: usize = 500;

impl ItemForm {
    /// Open for create: draft initialized to the category's defaults.
    pub fn create(category: Category) -> Self {
        Self {
            category,
            mode: FormMode::Creating,
            draft: ItemDraft {
                status: category.policy().default_status,
                ..Default::default()
            },
        }
    }

    /// Open for edit: draft copies every field from the item.
    pub fn edit(item: &HobbyItem) -> Self {
        Self {
            category: item.category,
            mode: FormMode::Editing(Box::new(item.clone())),
            draft: ItemDraft {
                title: item.title.clone(),
                status: item.status,
                rating: item.rating,
                date_watched: item.date_watched,
                tags: item.tags.clone(),
                memo: item.memo.clone().unwrap_or_default(),
                url: item.url.clone().unwrap_or_default(),
                cover_url: item.cover_url.clone().unwrap_or_default(),
                channel_name: item.channel_name.clone().unwrap_or_default(),
            },
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    // --- Field edits (draft only, never the repository) ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Change the draft status. Moving to a non-terminal status clears
    /// rating and watch date on the draft.
    pub fn set_status(&mut self, status: Option<Status>) -> Result<()> {
        let policy = self.category.policy();
        match status {
            Some(s) if !policy.allows_status(s) => {
                return Err(TrakzError::Validation(format!(
                    "Status '{}' does not apply to {}",
                    s,
                    self.category.plural()
                )));
            }
            _ => {}
        }
        self.draft.status = status;
        let terminal = matches!(status, Some(s) if policy.is_terminal(s));
        if !terminal {
            self.draft.rating = None;
            self.draft.date_watched = None;
        }
        Ok(())
    }

    pub fn set_rating(&mut self, rating: Option<f32>) -> Result<()> {
        if let Some(r) = rating {
            if !valid_rating(r) {
                return Err(TrakzError::Validation(format!(
                    "Rating must be between 0 and 5 in half-star steps, got {}",
                    r
                )));
            }
        }
        // Zero means "no rating".
        self.draft.rating = rating.filter(|r| *r > 0.0);
        Ok(())
    }

    pub fn set_date_watched(&mut self, date: Option<NaiveDate>) {
        self.draft.date_watched = date;
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.draft.memo = memo.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.draft.url = url.into();
    }

    pub fn set_cover_url(&mut self, cover_url: impl Into<String>) {
        self.draft.cover_url = cover_url.into();
    }

    pub fn set_channel_name(&mut self, channel_name: impl Into<String>) {
        self.draft.channel_name = channel_name.into();
    }

    /// Append a tag. Blank input and exact duplicates are rejected as a
    /// no-op; returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.draft.tags.push(tag.to_string());
        true
    }

    /// Remove the first exact match; returns whether anything was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.draft.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.draft.tags.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Apply a selected metadata-search candidate to the draft. Absent
    /// fields leave the draft alone; tags go through the usual rules.
    pub fn apply_candidate(&mut self, candidate: CandidateFields) {
        if let Some(title) = candidate.title.filter(|t| !t.trim().is_empty()) {
            self.draft.title = title;
        }
        if let Some(cover_url) = candidate.cover_url.filter(|c| !c.trim().is_empty()) {
            self.draft.cover_url = cover_url;
        }
        if let Some(synopsis) = candidate.synopsis {
            self.draft.memo = truncate_synopsis(&synopsis);
        }
        for tag in &candidate.tags {
            self.add_tag(tag);
        }
    }

    // --- Visibility predicates (also persistence predicates) ---

    fn on_terminal_status(&self) -> bool {
        matches!(self.draft.status, Some(s) if self.category.policy().is_terminal(s))
    }

    pub fn rating_visible(&self) -> bool {
        self.category.policy().rating_applicable && self.on_terminal_status()
    }

    pub fn date_watched_visible(&self) -> bool {
        self.on_terminal_status()
    }

    pub fn url_visible(&self) -> bool {
        self.category.policy().url_applicable
    }

    pub fn channel_visible(&self) -> bool {
        self.category == Category::Video
    }

    /// Validate and persist the draft. Creating inserts a fresh item;
    /// editing sends the repository a patch of exactly the changed
    /// fields. On error the form is untouched and stays open.
    pub fn submit<B: StorageBackend>(&self, repo: &mut Repository<B>) -> Result<HobbyItem> {
        if self.draft.title.trim().is_empty() {
            return Err(TrakzError::Validation(
                "Title must not be empty".to_string(),
            ));
        }

        let sanitized = self.sanitized_item();
        match &self.mode {
            FormMode::Creating => repo.create(sanitized),
            FormMode::Editing(original) => {
                let patch = diff_items(original, &sanitized);
                if patch.is_empty() {
                    return Ok((**original).clone());
                }
                // An id that vanished mid-edit is a benign no-op; hand the
                // caller the item as it would have looked.
                Ok(repo.update(original.id, &patch).unwrap_or_else(|| {
                    let mut item = (**original).clone();
                    item.apply(&patch);
                    item
                }))
            }
        }
    }

    /// The draft as a full item, with every hidden field dropped — the
    /// visibility predicates double as persistence predicates.
    fn sanitized_item(&self) -> HobbyItem {
        let policy = self.category.policy();
        let (id, created_at) = match &self.mode {
            FormMode::Creating => (Uuid::new_v4(), Utc::now()),
            FormMode::Editing(original) => (original.id, original.created_at),
        };

        HobbyItem {
            id,
            title: self.draft.title.trim().to_string(),
            category: self.category,
            status: if policy.has_status() {
                self.draft.status
            } else {
                None
            },
            rating: if self.rating_visible() {
                self.draft.rating.filter(|r| *r > 0.0)
            } else {
                None
            },
            date_watched: if self.date_watched_visible() {
                self.draft.date_watched
            } else {
                None
            },
            tags: self.draft.tags.clone(),
            memo: non_blank(&self.draft.memo),
            url: if self.url_visible() {
                non_blank(&self.draft.url)
            } else {
                None
            },
            cover_url: non_blank(&self.draft.cover_url),
            channel_name: if self.channel_visible() {
                non_blank(&self.draft.channel_name)
            } else {
                None
            },
            created_at,
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn truncate_synopsis(synopsis: &str) -> String {
    let mut out: String = synopsis.chars().take(SYNOPSIS_MAX_CHARS).collect();
    if synopsis.chars().count() > SYNOPSIS_MAX_CHARS {
        out.push_str("...");
    }
    out
}

/// Field-by-field diff between the original item and the sanitized draft.
/// Only changed fields appear in the patch.
fn diff_items(original: &HobbyItem, draft: &HobbyItem) -> ItemPatch {
    let mut patch = ItemPatch::default();
    if draft.title != original.title {
        patch.title = Some(draft.title.clone());
    }
    if draft.status != original.status {
        patch.status = Some(draft.status);
    }
    if draft.rating != original.rating {
        patch.rating = Some(draft.rating);
    }
    if draft.date_watched != original.date_watched {
        patch.date_watched = Some(draft.date_watched);
    }
    if draft.tags != original.tags {
        patch.tags = Some(draft.tags.clone());
    }
    if draft.memo != original.memo {
        patch.memo = Some(draft.memo.clone());
    }
    if draft.url != original.url {
        patch.url = Some(draft.url.clone());
    }
    if draft.cover_url != original.cover_url {
        patch.cover_url = Some(draft.cover_url.clone());
    }
    if draft.channel_name != original.channel_name {
        patch.channel_name = Some(draft.channel_name.clone());
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem::MemBackend;

    fn empty_repo() -> Repository<MemBackend> {
        Repository::load(MemBackend::new())
    }

    #[test]
    fn test_create_draft_starts_from_category_defaults() {
        let form = ItemForm::create(Category::Anime);
        assert_eq!(form.draft().status, Some(Status::Watching));
        assert!(form.draft().title.is_empty());
        assert!(form.draft().tags.is_empty());

        let form = ItemForm::create(Category::Video);
        assert_eq!(form.draft().status, None);
    }

    #[test]
    fn test_edit_draft_copies_every_field() {
        let mut item = HobbyItem::new("Heat", Category::Movie);
        item.status = Some(Status::Watched);
        item.rating = Some(4.5);
        item.tags = vec!["Crime".to_string()];
        item.memo = Some("rewatch".to_string());

        let form = ItemForm::edit(&item);
        assert!(form.is_editing());
        assert_eq!(form.draft().title, "Heat");
        assert_eq!(form.draft().rating, Some(4.5));
        assert_eq!(form.draft().tags, vec!["Crime"]);
        assert_eq!(form.draft().memo, "rewatch");
    }

    #[test]
    fn test_status_change_to_non_terminal_clears_rating_and_date() {
        let mut form = ItemForm::create(Category::Movie);
        form.set_status(Some(Status::Watched)).unwrap();
        form.set_rating(Some(4.0)).unwrap();
        form.set_date_watched(Some("2024-03-01".parse().unwrap()));

        form.set_status(Some(Status::WantToWatch)).unwrap();
        assert_eq!(form.draft().rating, None);
        assert_eq!(form.draft().date_watched, None);
    }

    #[test]
    fn test_status_change_to_terminal_keeps_fields() {
        let mut form = ItemForm::create(Category::Book);
        form.set_status(Some(Status::Completed)).unwrap();
        form.set_rating(Some(3.5)).unwrap();
        form.set_status(Some(Status::Completed)).unwrap();
        assert_eq!(form.draft().rating, Some(3.5));
    }

    #[test]
    fn test_set_status_rejects_foreign_vocabulary() {
        let mut form = ItemForm::create(Category::Movie);
        let err = form.set_status(Some(Status::Reading)).unwrap_err();
        assert!(matches!(err, TrakzError::Validation(_)));
        // Draft unchanged.
        assert_eq!(form.draft().status, Some(Status::WantToWatch));

        let mut form = ItemForm::create(Category::Video);
        assert!(form.set_status(Some(Status::Watched)).is_err());
    }

    #[test]
    fn test_set_rating_validates_steps() {
        let mut form = ItemForm::create(Category::Movie);
        assert!(form.set_rating(Some(3.2)).is_err());
        assert!(form.set_rating(Some(5.5)).is_err());
        assert!(form.set_rating(Some(4.5)).is_ok());
        // Zero is "no rating".
        form.set_rating(Some(0.0)).unwrap();
        assert_eq!(form.draft().rating, None);
    }

    #[test]
    fn test_add_tag_rejects_blank_and_duplicates() {
        let mut form = ItemForm::create(Category::Movie);
        assert!(form.add_tag("SF"));
        assert!(!form.add_tag("SF"));
        assert!(!form.add_tag("   "));
        assert!(form.add_tag(" Drama "));
        assert_eq!(form.draft().tags, vec!["SF", "Drama"]);
    }

    #[test]
    fn test_remove_tag_removes_first_exact_match() {
        let mut form = ItemForm::create(Category::Movie);
        form.add_tag("SF");
        form.add_tag("Drama");
        assert!(form.remove_tag("SF"));
        assert!(!form.remove_tag("SF"));
        assert_eq!(form.draft().tags, vec!["Drama"]);
    }

    #[test]
    fn test_visibility_predicates() {
        let mut form = ItemForm::create(Category::Movie);
        assert!(!form.rating_visible());
        form.set_status(Some(Status::Watched)).unwrap();
        assert!(form.rating_visible());
        assert!(form.date_watched_visible());
        assert!(form.url_visible());
        assert!(!form.channel_visible());

        let form = ItemForm::create(Category::Video);
        assert!(!form.rating_visible());
        assert!(!form.date_watched_visible());
        assert!(form.url_visible());
        assert!(form.channel_visible());

        let mut form = ItemForm::create(Category::Book);
        form.set_status(Some(Status::Completed)).unwrap();
        assert!(form.rating_visible());
        assert!(!form.url_visible());
    }

    #[test]
    fn test_submit_requires_title() {
        let mut repo = empty_repo();
        let form = ItemForm::create(Category::Movie);
        let err = form.submit(&mut repo).unwrap_err();
        assert!(matches!(err, TrakzError::Validation(_)));
        assert!(repo.items().is_empty());
        // The form is still usable: fix the title and resubmit.
        let mut form = form;
        form.set_title("Heat");
        assert!(form.submit(&mut repo).is_ok());
    }

    #[test]
    fn test_submit_drops_hidden_fields() {
        let mut repo = empty_repo();
        let mut form = ItemForm::create(Category::Book);
        form.set_title("Dune");
        form.set_status(Some(Status::Reading)).unwrap();
        // URL is never visible for books; a stray draft value is dropped.
        form.set_url("https://example.com/dune");
        form.set_channel_name("not a video");

        let item = form.submit(&mut repo).unwrap();
        assert_eq!(item.url, None);
        assert_eq!(item.channel_name, None);
        assert_eq!(item.rating, None);
        assert_eq!(item.date_watched, None);
    }

    #[test]
    fn test_submit_create_assigns_identity() {
        let mut repo = empty_repo();
        let mut form = ItemForm::create(Category::Movie);
        form.set_title("Heat");
        let item = form.submit(&mut repo).unwrap();

        assert_eq!(repo.items().len(), 1);
        assert_eq!(repo.get(item.id).unwrap().title, "Heat");
        assert_eq!(item.status, Some(Status::WantToWatch));
    }

    #[test]
    fn test_submit_edit_patches_only_changed_fields() {
        let mut repo = empty_repo();
        let mut form = ItemForm::create(Category::Movie);
        form.set_title("Heat");
        form.set_status(Some(Status::Watched)).unwrap();
        form.set_rating(Some(4.0)).unwrap();
        form.set_memo("first watch");
        let item = form.submit(&mut repo).unwrap();
        let created_at = item.created_at;

        let mut form = ItemForm::edit(&item);
        form.set_memo("rewatched, still great");
        let updated = form.submit(&mut repo).unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.memo.as_deref(), Some("rewatched, still great"));
        assert_eq!(updated.rating, Some(4.0));
        assert_eq!(updated.status, Some(Status::Watched));
    }

    #[test]
    fn test_submit_edit_status_downgrade_clears_persisted_fields() {
        let mut repo = empty_repo();
        let mut form = ItemForm::create(Category::Movie);
        form.set_title("Heat");
        form.set_status(Some(Status::Watched)).unwrap();
        form.set_rating(Some(4.0)).unwrap();
        form.set_date_watched(Some("2024-03-01".parse().unwrap()));
        let item = form.submit(&mut repo).unwrap();
        assert_eq!(item.rating, Some(4.0));

        let mut form = ItemForm::edit(&item);
        form.set_status(Some(Status::WantToWatch)).unwrap();
        let updated = form.submit(&mut repo).unwrap();

        assert_eq!(updated.rating, None);
        assert_eq!(updated.date_watched, None);
        assert_eq!(repo.get(item.id).unwrap().rating, None);
    }

    #[test]
    fn test_submit_edit_after_delete_is_benign() {
        let mut repo = empty_repo();
        let mut form = ItemForm::create(Category::Movie);
        form.set_title("Heat");
        let item = form.submit(&mut repo).unwrap();

        let mut form = ItemForm::edit(&item);
        form.set_memo("written after deletion");
        repo.delete(item.id);

        // The update lands nowhere but the submit still succeeds.
        let result = form.submit(&mut repo).unwrap();
        assert_eq!(result.memo.as_deref(), Some("written after deletion"));
        assert!(repo.items().is_empty());
    }

    #[test]
    fn test_apply_candidate_fills_draft() {
        let mut form = ItemForm::create(Category::Anime);
        form.apply_candidate(CandidateFields {
            title: Some("Perfect Blue".to_string()),
            cover_url: Some("https://cdn.example/pb.jpg".to_string()),
            synopsis: Some("A pop idol's life unravels.".to_string()),
            tags: vec!["Thriller".to_string(), "Thriller".to_string()],
        });

        assert_eq!(form.draft().title, "Perfect Blue");
        assert_eq!(form.draft().cover_url, "https://cdn.example/pb.jpg");
        assert_eq!(form.draft().memo, "A pop idol's life unravels.");
        assert_eq!(form.draft().tags, vec!["Thriller"]);
    }

    #[test]
    fn test_apply_candidate_truncates_long_synopsis() {
        let mut form = ItemForm::create(Category::Anime);
        let synopsis = "x".repeat(800);
        form.apply_candidate(CandidateFields {
            synopsis: Some(synopsis),
            ..Default::default()
        });
        assert_eq!(form.draft().memo.chars().count(), 503);
        assert!(form.draft().memo.ends_with("..."));
    }

    #[test]
    fn test_apply_candidate_ignores_absent_fields() {
        let mut form = ItemForm::create(Category::Anime);
        form.set_title("Keep me");
        form.apply_candidate(CandidateFields::default());
        assert_eq!(form.draft().title, "Keep me");
    }
}
