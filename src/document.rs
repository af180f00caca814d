//! The raw-text SVG document and the splice primitive all edits go through
//!
//! There is deliberately no DOM here: "the root element" is wherever the
//! first literal `<svg` sits, and every edit is a single substring splice.
//! Keeping the splice in one named operation makes the slice-boundary
//! invariants (never drop or duplicate a byte) testable in isolation.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// The literal opener every root-relative edit keys off.
pub const ROOT_TAG_OPEN: &str = "<svg";

/// Document-level failures shared by all edit operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    /// No literal `<svg` anywhere in the text. Fatal for the whole pipeline:
    /// every insert-if-absent operation targets the root tag.
    #[error("no `<svg` root tag found in document")]
    RootTagNotFound,

    /// No `>` anywhere in the text, so there is no tag to insert into.
    #[error("no `>` found to close a tag in document")]
    MissingTagClose,
}

/// An SVG document held as plain text.
///
/// Edits never parse the text into a tree; they locate spans by substring or
/// pattern search and splice replacements in. The only structural promise is
/// that the text keeps containing the `<svg` opener the edits rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    text: String,
}

impl SvgDocument {
    /// Wrap already-loaded text. No normalization is applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The document text as a borrowed str
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document, yielding the text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Byte offset of the first `<svg` opener.
    ///
    /// Callers that insert at the root tag must resolve this before touching
    /// the text, so a malformed document fails before any mutation.
    pub fn root_tag_open(&self) -> Result<usize, EditError> {
        self.text
            .find(ROOT_TAG_OPEN)
            .ok_or(EditError::RootTagNotFound)
    }

    /// Byte offset just past the `<svg` opener, where new root attributes go
    pub fn root_insert_pos(&self) -> Result<usize, EditError> {
        Ok(self.root_tag_open()? + ROOT_TAG_OPEN.len())
    }

    /// Byte offset of the first `>` in the document.
    ///
    /// This is "the first tag encountered", typically but not necessarily
    /// the root tag's own close.
    pub fn first_tag_close(&self) -> Result<usize, EditError> {
        self.text.find('>').ok_or(EditError::MissingTagClose)
    }

    /// Replace the byte span `range` with `replacement`, producing a new
    /// document. Text outside the span is carried over untouched.
    pub fn splice(&self, range: Range<usize>, replacement: &str) -> SvgDocument {
        let mut out = String::with_capacity(
            self.text.len() - (range.end - range.start) + replacement.len(),
        );
        out.push_str(&self.text[..range.start]);
        out.push_str(replacement);
        out.push_str(&self.text[range.end..]);
        SvgDocument::new(out)
    }

    /// Insert `content` at byte offset `pos` without removing anything
    pub fn insert_at(&self, pos: usize, content: &str) -> SvgDocument {
        self.splice(pos..pos, content)
    }
}

impl From<String> for SvgDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for SvgDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_tag_open_finds_first_occurrence() {
        let doc = SvgDocument::new(r#"<?xml version="1.0"?><svg><svg>"#);
        assert_eq!(doc.root_tag_open(), Ok(21));
    }

    #[test]
    fn root_tag_open_missing_is_fatal() {
        let doc = SvgDocument::new("<div>not an svg</div>");
        assert_eq!(doc.root_tag_open(), Err(EditError::RootTagNotFound));
    }

    #[test]
    fn root_insert_pos_lands_after_opener() {
        let doc = SvgDocument::new("<svg ></svg>");
        assert_eq!(doc.root_insert_pos(), Ok(4));
    }

    #[test]
    fn first_tag_close_missing() {
        let doc = SvgDocument::new("<svg width=");
        assert_eq!(doc.first_tag_close(), Err(EditError::MissingTagClose));
    }

    #[test]
    fn splice_replaces_exact_span() {
        let doc = SvgDocument::new("abcdef");
        assert_eq!(doc.splice(2..4, "XY").as_str(), "abXYef");
    }

    #[test]
    fn splice_at_start_and_end() {
        let doc = SvgDocument::new("abc");
        assert_eq!(doc.splice(0..0, "<").as_str(), "<abc");
        assert_eq!(doc.splice(3..3, ">").as_str(), "abc>");
    }

    #[test]
    fn splice_empty_replacement_deletes_span() {
        let doc = SvgDocument::new("abcdef");
        assert_eq!(doc.splice(1..5, "").as_str(), "af");
    }

    #[test]
    fn splice_does_not_drop_or_duplicate_neighbors() {
        // Boundary characters on both sides of the span must survive intact.
        let doc = SvgDocument::new("0123456789");
        let out = doc.splice(4..6, "xx");
        assert_eq!(out.as_str(), "0123xx6789");
        assert_eq!(out.as_str().len(), 10);
    }

    #[test]
    fn insert_at_is_a_zero_width_splice() {
        let doc = SvgDocument::new("<svg></svg>");
        assert_eq!(doc.insert_at(4, r#" id="x""#).as_str(), r#"<svg id="x"></svg>"#);
    }
}
