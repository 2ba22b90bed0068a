//! Host capability ports.
//!
//! The template scripts never touch the host runtime directly; every side
//! effect goes through one of these traits. This keeps the orchestration
//! logic testable against scripted adapters and lets a live host plug in
//! its own UI, vault storage, and calendar.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use clipnote_core::{FrontMatter, Result};

/// Mutation applied to a note's front-matter block.
pub type FrontMatterMutator = Box<dyn FnOnce(&mut FrontMatter) + Send>;

/// Vault-facing capabilities: existence probes, opening templates, and
/// relocating the active note.
#[async_trait]
pub trait NoteVault: Send + Sync {
    /// True when the vault-relative path exists.
    async fn exists(&self, rel: &str) -> Result<bool>;

    /// Open a template as the active note. Returns the opened note's
    /// absolute path.
    async fn open_template(&self, rel: &str) -> Result<PathBuf>;

    /// Relocate the active note to an extensionless vault-relative stem.
    /// The note's own extension is restored by the move. Returns the new
    /// absolute path.
    async fn move_active(&self, stem: &str) -> Result<PathBuf>;

    /// Apply a mutation to the front-matter block of `note`.
    ///
    /// The block is created when the note has none and dropped when the
    /// mutation empties it.
    async fn edit_front_matter(&self, note: &Path, mutator: FrontMatterMutator) -> Result<()>;
}

/// User-facing capabilities: modal prompts and clipboard access.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Show a modal text prompt.
    ///
    /// `Ok(None)` means the user cancelled; cancellation is a defined
    /// outcome, not an error. `seed_from_clipboard` asks the host to
    /// pre-fill the input with the current clipboard text.
    async fn prompt(
        &self,
        title: &str,
        default: Option<&str>,
        multiline: bool,
        seed_from_clipboard: bool,
    ) -> Result<Option<String>>;

    /// Current clipboard text.
    async fn clipboard_text(&self) -> Result<String>;
}

/// Calendar capability for date-stamped folder routing.
pub trait Calendar: Send + Sync {
    /// Format today's date into a folder fragment, e.g. `2024/03/07/`
    /// for the pattern `YYYY/MM/DD/`.
    fn date_folder(&self, pattern: &str) -> String;
}
