//! Clipboard file-path normalization.
//!
//! Clipboard paths arrive in three conventions: Windows (`C:\tmp`), forward
//! slash (`C:/tmp`), and file URI (`file:///C:/tmp`). [`normalize_clipboard_path`]
//! folds all three into the forward-slash form and pairs a human-readable
//! (percent-decoded) title with an encoding-preserving link target.

use percent_encoding::percent_decode_str;

use crate::models::FileLink;

/// Normalize a clipboard path into a title/link pair.
///
/// Backslashes become forward slashes and one leading `file://` scheme is
/// stripped. A single leading slash left over from the URI form (`/C:/...`)
/// is dropped when it sits in front of a drive-letter segment; a POSIX
/// absolute path keeps its slash. The title is percent-decoded, the link is
/// not. The path is never checked for existence or well-formedness.
///
/// ```
/// use clipnote_core::pathform::normalize_clipboard_path;
///
/// let pair = normalize_clipboard_path("file:///C:/Games/Age%20of%20Empires");
/// assert_eq!(pair.title, "C:/Games/Age of Empires");
/// assert_eq!(pair.link, "C:/Games/Age%20of%20Empires");
/// ```
pub fn normalize_clipboard_path(clipboard: &str) -> FileLink {
    let forward = clipboard.replace('\\', "/");
    let stripped = forward.strip_prefix("file://").unwrap_or(&forward);

    // URI form `file:///C:/...` leaves one slash in front of the drive segment.
    let link = match stripped.strip_prefix('/') {
        Some(rest) if starts_with_drive_letter(rest) => rest,
        _ => stripped,
    };

    FileLink {
        title: decode_percent(link),
        link: link.to_string(),
    }
}

/// Returns true for a `C:`-style drive prefix.
#[inline]
fn starts_with_drive_letter(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}

/// Percent-decode `raw`, falling back to the raw string when the decoded
/// bytes are not valid UTF-8.
fn decode_percent(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
