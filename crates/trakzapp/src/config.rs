//! # Configuration
//!
//! Layered loading, highest priority first:
//!
//! 1. **Environment variables**: `TRAKZ_DATA_DIR`, `TRAKZ_TOP_TAGS`.
//! 2. **Config file**: `trakz.toml` in the OS config directory
//!    (via the `directories` crate).
//! 3. **Compiled defaults**.
//!
//! An unreadable config falls back to the defaults; configuration must
//! never keep the tracker from starting.

use std::path::PathBuf;

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default size of the tag cloud shown above list views.
const DEFAULT_TOP_TAGS: usize = 8;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrakzConfig {
    /// How many tags the list views show in their tag cloud.
    #[config(default = 8, env = "TRAKZ_TOP_TAGS")]
    pub top_tags: usize,

    /// Where the collection lives. Defaults to the OS data directory.
    #[config(env = "TRAKZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for TrakzConfig {
    fn default() -> Self {
        Self {
            top_tags: DEFAULT_TOP_TAGS,
            data_dir: None,
        }
    }
}

impl TrakzConfig {
    /// Load the layered configuration, falling back to defaults if any
    /// layer is unreadable.
    pub fn load() -> Self {
        let mut builder = Self::builder().env();
        if let Some(path) = Self::config_file() {
            if path.exists() {
                builder = builder.file(path);
            }
        }
        match builder.load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "could not load configuration, using defaults");
                Self::default()
            }
        }
    }

    pub fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "trakz").map(|dirs| dirs.config_dir().join("trakz.toml"))
    }

    /// The effective data directory: the configured override, or the OS
    /// data directory, or `.trakz` in the working directory as a last
    /// resort.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("", "", "trakz")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".trakz"))
    }
}
