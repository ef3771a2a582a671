//! # Trakz Architecture
//!
//! Trakz is a **UI-agnostic media-tracking library**. This is not a CLI
//! application that happens to have some library code — it's a library
//! that happens to ship with a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/trakz)                                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes selectors (index / title → item id)           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The operations behind every view and button              │
//! │  - Built on the engine modules:                             │
//! │      category.rs  — per-category policy table               │
//! │      query.rs     — the tab/tag/search/sort pipeline        │
//! │      tags.rs      — derived tag frequencies                 │
//! │      form.rs      — the add/edit draft state machine        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository + Storage (repo.rs, store/)                     │
//! │  - Ordered collection, write-through persistence            │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the policy table is the only category brancher
//!
//! Every category-dependent rule — which statuses exist, when a rating
//! applies, whether a URL belongs on the item — lives in the policy
//! table in [`category`]. Views, commands and the form consult it;
//! none of them hard-code a category check of their own.
//!
//! ## Concurrency
//!
//! There is none. The library is single-threaded and event-driven:
//! every operation is one synchronous call mutating the repository from
//! one caller at a time. Anything asynchronous (metadata lookups, image
//! work) happens outside and re-enters through ordinary field setters on
//! the form, so the core has no suspension points and nothing to lock.

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod query;
pub mod repo;
pub mod store;
pub mod tags;
