//! Failure-to-text rendering for the script boundaries.
//!
//! The entry points never propagate errors to the host; a failure comes
//! back as a text payload carrying the diagnostic trace, degraded but not
//! crashing.

use clipnote_core::Error;

/// Render `err` and the step it interrupted into the text payload shown to
/// the user.
pub fn diagnostic_trace(action: &str, err: Error) -> String {
    format!("{:?}", anyhow::Error::new(err).context(action.to_string()))
}
