//! # Clipnote Core
//!
//! Core data models, error types, configuration, and the pure string
//! transforms behind the clipnote template scripts. This crate defines the
//! canonical types the host adapters and template entry points depend on.
//!
//! ## Architecture Principles
//!
//! - **Pure Transforms**: filename sanitizing, path normalization, and date
//!   formatting are deterministic functions with no host access
//! - **Zero Panic in Libraries**: all fallible operations return `Result<T>`
//! - **Builder Pattern for Configuration**: settings validate on build
//! - **Host Side Effects Live Elsewhere**: nothing here touches the vault
//!
//! ## Core Modules
//!
//! - [`models`] - Transient records ([`NoteSeed`], [`FileLink`], [`FrontMatter`])
//! - [`error`] - Error types and the `Result` alias
//! - [`config`] - Script configuration with builder and YAML persistence
//! - [`filename`] - Fixed-point filename sanitizer and title derivation
//! - [`pathform`] - Clipboard path normalization across path conventions
//! - [`datefmt`] - Date-folder pattern formatting
//!
//! ## Usage Examples
//!
//! ### Deriving a title
//!
//! ```
//! use clipnote_core::prelude::*;
//!
//! let title = derive_title("meeting: roadmap review", 60);
//! assert_eq!(title, "meeting - roadmap review");
//! ```
//!
//! ### Error Handling
//!
//! ```
//! use clipnote_core::prelude::*;
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::invalid_path("empty note name"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod datefmt;
pub mod error;
pub mod filename;
pub mod models;
pub mod pathform;

pub use config::{ScriptConfig, ScriptConfigBuilder};
pub use datefmt::format_date_folder;
pub use error::{Error, Result};
pub use filename::{derive_title, has_reserved_chars, sanitize};
pub use models::{FileLink, FrontMatter, NoteSeed};
pub use pathform::normalize_clipboard_path;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ScriptConfig, ScriptConfigBuilder};
    pub use crate::datefmt::format_date_folder;
    pub use crate::error::{Error, Result};
    pub use crate::filename::{derive_title, sanitize};
    pub use crate::models::{FileLink, FrontMatter, NoteSeed};
    pub use crate::pathform::normalize_clipboard_path;
}
