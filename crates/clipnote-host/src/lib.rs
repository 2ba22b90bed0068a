//! # Clipnote Host
//!
//! Host capability ports and adapters. The template scripts in
//! `clipnote-templates` reach the outside world only through the traits in
//! [`ports`]; this crate also ships the adapters a deployment needs:
//!
//! - [`fs::FsVault`] - a real-filesystem vault with traversal guarding,
//!   active-note tracking, and atomic front-matter rewrites
//! - [`interaction::ScriptedInteraction`] - a headless prompt/clipboard
//!   replay for automation and tests
//! - [`calendar::SystemCalendar`] / [`calendar::FixedCalendar`] - wall-clock
//!   and pinned date sources
//! - [`unique::resolve_unique_path`] - collision-free path resolution over
//!   any [`ports::NoteVault`]
//!
//! ## Resolving a path against a vault
//!
//! ```no_run
//! use clipnote_host::prelude::*;
//!
//! # async fn demo() -> clipnote_core::Result<()> {
//! let vault = FsVault::new("/path/to/vault")?;
//! let stem = resolve_unique_path(&vault, "2024/03/07/", "My Note", "md").await?;
//! let _ = vault.open_template("templates/new-note.md").await?;
//! let moved = vault.move_active(&stem).await?;
//! # let _ = moved;
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod frontmatter;
pub mod fs;
pub mod interaction;
pub mod ports;
pub mod unique;

pub use calendar::{FixedCalendar, SystemCalendar};
pub use frontmatter::{Document, parse_document, render_document, split_document};
pub use fs::FsVault;
pub use interaction::ScriptedInteraction;
pub use ports::{Calendar, FrontMatterMutator, Interaction, NoteVault};
pub use unique::resolve_unique_path;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calendar::{FixedCalendar, SystemCalendar};
    pub use crate::fs::FsVault;
    pub use crate::interaction::ScriptedInteraction;
    pub use crate::ports::{Calendar, FrontMatterMutator, Interaction, NoteVault};
    pub use crate::unique::resolve_unique_path;
}
