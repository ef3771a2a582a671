//! # CLI Behavior
//!
//! This is **one possible UI client** for trakz — not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! Each category gets the same set of verbs with category-specific
//! defaults pulled from the policy table:
//!
//! - `trakz list movie` opens on the movie view's default tab (watched);
//!   `--tab`, `--search`, `--tag` and `--sort` drive the pipeline.
//! - `trakz add book "Dune"` creates with the category's default status.
//! - `trakz done book dune` / `trakz start book dune` are the quick
//!   status buttons; `done` never writes a placeholder rating.
//! - `trakz delete` asks before it acts — deletion is terminal.
//!
//! Items are addressed by the index the listing printed, or by a title
//! substring when it matches exactly one item.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch to the API facade
//! - `render`: output formatting (lists, tag clouds, messages)
//! - `styles`: terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
