//! Front-matter document plumbing.
//!
//! Notes carry an optional leading YAML block delimited by `---` lines.
//! [`parse_document`] and [`render_document`] round-trip a note between its
//! text form and a [`Document`] whose metadata can be edited structurally.

use clipnote_core::{FrontMatter, Result};

/// A note split into its front-matter block and body text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

/// Split `content` into the front-matter YAML slice and the remaining body.
///
/// Returns `None` when the document does not open with a `---` block. The
/// block must start at the first byte; the closing `---` is the next line
/// that begins with one. CRLF line endings are tolerated; the `\r` stays
/// out of both slices.
pub fn split_document(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let yaml = yaml.strip_suffix('\r').unwrap_or(yaml);
    let after = &rest[end + 4..];
    let body = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after);
    Some((yaml, body))
}

/// Parse a note into front matter and body.
///
/// A note without a block parses to an empty mapping plus the full text.
/// A block that is not a YAML mapping is an error.
pub fn parse_document(content: &str) -> Result<Document> {
    match split_document(content) {
        Some((yaml, body)) => {
            let data: serde_yaml::Mapping = if yaml.trim().is_empty() {
                serde_yaml::Mapping::new()
            } else {
                serde_yaml::from_str(yaml)?
            };
            Ok(Document {
                front_matter: FrontMatter { data },
                body: body.to_string(),
            })
        }
        None => Ok(Document {
            front_matter: FrontMatter::new(),
            body: content.to_string(),
        }),
    }
}

/// Render a document back to note text.
///
/// An empty mapping renders no block at all, so a mutation that removes the
/// last key also removes the delimiters.
pub fn render_document(doc: &Document) -> Result<String> {
    if doc.front_matter.is_empty() {
        return Ok(doc.body.clone());
    }
    let yaml = serde_yaml::to_string(&doc.front_matter.data)?;
    Ok(format!("---\n{}---\n{}", yaml, doc.body))
}
