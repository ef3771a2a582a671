//! # Category Policy
//!
//! One [`CategoryPolicy`] per category, pure data, consulted by the form,
//! the query pipeline and the CLI views. This table is the single source
//! of truth for category-dependent rules; nothing else in the crate is
//! allowed to branch on a category to decide field applicability.
//!
//! | category | statuses                         | default       | want bucket   | terminal  | rating | url |
//! |----------|----------------------------------|---------------|---------------|-----------|--------|-----|
//! | movie    | want_to_watch, watched           | want_to_watch | want_to_watch | watched   | yes    | yes |
//! | anime    | watching, want_to_watch, watched | watching      | want_to_watch | watched   | yes    | no  |
//! | book     | want_to_read, reading, completed | want_to_read  | want_to_read  | completed | yes    | no  |
//! | video    | (none)                           | —             | —             | —         | no     | yes |
//!
//! `want_status` is the bucket a status-less item falls into during
//! filtering. It differs from `default_status` for anime: newly created
//! anime default to `watching`, but legacy status-less records count as
//! `want_to_watch`.

use crate::model::{Category, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPolicy {
    /// Legal status values, in display order. Empty for videos.
    /// Doubles as the tab set of the category's list view.
    pub status_options: &'static [Status],
    /// Status assigned to a freshly created item absent an explicit one.
    pub default_status: Option<Status>,
    /// Bucket an absent status counts as wherever filtering occurs.
    pub want_status: Option<Status>,
    /// Status after which rating and watch date become meaningful.
    pub terminal_status: Option<Status>,
    /// Tab a list view opens on.
    pub default_tab: Option<Status>,
    pub rating_applicable: bool,
    pub url_applicable: bool,
}

const MOVIE: CategoryPolicy = CategoryPolicy {
    status_options: &[Status::WantToWatch, Status::Watched],
    default_status: Some(Status::WantToWatch),
    want_status: Some(Status::WantToWatch),
    terminal_status: Some(Status::Watched),
    default_tab: Some(Status::Watched),
    rating_applicable: true,
    // A pasted link is a legal secondary field for movies.
    url_applicable: true,
};

const ANIME: CategoryPolicy = CategoryPolicy {
    status_options: &[Status::Watching, Status::WantToWatch, Status::Watched],
    default_status: Some(Status::Watching),
    want_status: Some(Status::WantToWatch),
    terminal_status: Some(Status::Watched),
    default_tab: Some(Status::Watching),
    rating_applicable: true,
    url_applicable: false,
};

const BOOK: CategoryPolicy = CategoryPolicy {
    status_options: &[Status::WantToRead, Status::Reading, Status::Completed],
    default_status: Some(Status::WantToRead),
    want_status: Some(Status::WantToRead),
    terminal_status: Some(Status::Completed),
    default_tab: Some(Status::Reading),
    rating_applicable: true,
    url_applicable: false,
};

const VIDEO: CategoryPolicy = CategoryPolicy {
    status_options: &[],
    default_status: None,
    want_status: None,
    terminal_status: None,
    default_tab: None,
    rating_applicable: false,
    url_applicable: true,
};

impl Category {
    pub fn policy(self) -> &'static CategoryPolicy {
        match self {
            Category::Movie => &MOVIE,
            Category::Anime => &ANIME,
            Category::Book => &BOOK,
            Category::Video => &VIDEO,
        }
    }
}

impl CategoryPolicy {
    pub fn has_status(&self) -> bool {
        !self.status_options.is_empty()
    }

    pub fn allows_status(&self, status: Status) -> bool {
        self.status_options.contains(&status)
    }

    pub fn is_terminal(&self, status: Status) -> bool {
        self.terminal_status == Some(status)
    }

    /// The "in progress" status targeted by the quick start action:
    /// the option that is neither the want bucket nor terminal.
    /// Movies have none (their lifecycle is want -> watched).
    pub fn start_status(&self) -> Option<Status> {
        self.status_options
            .iter()
            .copied()
            .find(|s| Some(*s) != self.want_status && Some(*s) != self.terminal_status)
    }
}
