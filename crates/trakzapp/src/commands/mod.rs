//! # Command Layer
//!
//! The operations behind every view and button, one module per command,
//! each a pure function over the repository returning a structured
//! [`CmdResult`]. Commands never touch stdout, stderr, the terminal or
//! process exit codes; rendering the result is the client's job.
//!
//! This is where the lion's share of testing lives: command tests run
//! against a [`crate::store::mem::MemBackend`] repository and assert on
//! `CmdResult` contents.

use serde::Serialize;

use crate::model::HobbyItem;
use crate::tags::TagCount;

pub mod add;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod mark;
pub mod remove;
pub mod tags;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item paired with its display index: the 1-based position in the
/// category's canonical listing (newest first). The index is what users
/// type to address an item, so it must be the same one `list` printed.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: usize,
    pub item: HobbyItem,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<DisplayItem>,
    pub affected_items: Vec<HobbyItem>,
    pub tag_cloud: Vec<TagCount>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_affected_items(mut self, items: Vec<HobbyItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_tag_cloud(mut self, tags: Vec<TagCount>) -> Self {
        self.tag_cloud = tags;
        self
    }
}
