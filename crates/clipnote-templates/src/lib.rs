//! # Clipnote Templates
//!
//! The user-invoked template entry points:
//!
//! - [`NoteScripts::create_note`] - create a note from prompt/clipboard
//!   text: sanitize a title, resolve a collision-free path under a date
//!   folder, relocate the active note, and defer the alias into front
//!   matter
//! - [`NoteScripts::insert_file_link`] - turn a clipboard file path into a
//!   `[title](link)` markdown line
//!
//! Both entry points catch every failure at their boundary and hand the
//! host a text payload carrying the diagnostic trace; neither ever
//! propagates an error past itself.
//!
//! ## Wiring
//!
//! ```no_run
//! use std::sync::Arc;
//! use clipnote_core::ScriptConfig;
//! use clipnote_host::prelude::*;
//! use clipnote_templates::{HookQueue, NoteScripts};
//!
//! # async fn demo() -> clipnote_core::Result<()> {
//! let vault = Arc::new(FsVault::new("/path/to/vault")?);
//! let interaction = Arc::new(ScriptedInteraction::answering("", "Groceries"));
//! let calendar = Arc::new(SystemCalendar::new());
//! let scripts = NoteScripts::new(vault, interaction, calendar, ScriptConfig::default());
//!
//! let hooks = HookQueue::new();
//! let seed = scripts
//!     .create_note(&hooks, "templates/new-note.md", "Note title")
//!     .await;
//! hooks.run_all().await;
//! # let _ = seed;
//! # Ok(())
//! # }
//! ```

pub mod create_note;
pub mod diagnostics;
pub mod file_link;
pub mod hooks;
pub mod markdown;

pub use create_note::NoteScripts;
pub use diagnostics::diagnostic_trace;
pub use hooks::HookQueue;
pub use markdown::split_markdown_link;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::create_note::NoteScripts;
    pub use crate::hooks::HookQueue;
    pub use crate::markdown::split_markdown_link;
}
