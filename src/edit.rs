//! The attribute-rewriting engine
//!
//! Every operation here is a pure function `(&SvgDocument, payload) ->
//! SvgDocument`, built on substring/pattern search and [`SvgDocument::splice`].
//! Two scopes exist and are intentionally kept distinct rather than unified:
//!
//! - **root-tag-scoped**: insert-if-absent operations splice a new attribute
//!   immediately after the first `<svg` opener;
//! - **whole-document**: global replaces ([`set_class`], [`set_fill_color`],
//!   [`scale_dimensions`]) rewrite every textual match, because SVGs often
//!   carry `fill`/`class` on nested elements too.
//!
//! Operations that may insert at the root resolve the `<svg` position before
//! touching the text, so a document without a root tag fails with
//! [`EditError::RootTagNotFound`] before any mutation.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::document::{EditError, SvgDocument};

/// `fill="..."`: double-quoted only, matched anywhere in the document
static FILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fill="([^"]*)""#).unwrap());

/// `class="..."`: the global-replace form
static CLASS_SET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="[^"]*""#).unwrap());

/// `class = '...'` or `class = "..."`: the quote-agnostic lookup form
static CLASS_FIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class\s*=\s*['"]([^'"]*)['"]"#).unwrap());

/// `style="..."`: first occurrence is the merge target
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="([^"]*)""#).unwrap());

/// Integer-only dimension attributes; decimals and units do not match
static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width="(\d+)""#).unwrap());
static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height="(\d+)""#).unwrap());

fn quoted_attr_pattern(name: &str) -> Regex {
    Regex::new(&format!(r#"{}\s*=\s*["']([^"']*)["']"#, regex::escape(name)))
        .expect("escaped attribute name forms a valid pattern")
}

/// Set the quoted attribute `name` to `value`, or insert it on the root tag.
///
/// The attribute is looked up anywhere in the document, with either quote
/// style. When found, only the quoted value is replaced; the attribute's
/// original spacing and quotes survive. When absent, ` name="value"` is
/// spliced in immediately after `<svg`.
pub fn set_or_insert_quoted_attribute(
    doc: &SvgDocument,
    name: &str,
    value: &str,
) -> Result<SvgDocument, EditError> {
    let insert_pos = doc.root_insert_pos()?;
    let pattern = quoted_attr_pattern(name);
    if let Some(val) = pattern.captures(doc.as_str()).and_then(|c| c.get(1)) {
        Ok(doc.splice(val.range(), value))
    } else {
        Ok(doc.insert_at(insert_pos, &format!(r#" {}="{}""#, name, value)))
    }
}

/// Rewrite every `fill="..."` in the document to `color`.
///
/// Whole-document scope: child elements keep their own `fill` attributes and
/// all of them take the new color. When no fill attribute exists anywhere,
/// one is inserted on the root tag with the requested color directly.
pub fn set_fill_color(doc: &SvgDocument, color: &str) -> Result<SvgDocument, EditError> {
    let insert_pos = doc.root_insert_pos()?;
    if FILL_RE.is_match(doc.as_str()) {
        let replacement = format!(r#"fill="{}""#, color);
        let rewritten = FILL_RE.replace_all(doc.as_str(), NoExpand(&replacement));
        Ok(SvgDocument::new(rewritten.into_owned()))
    } else {
        Ok(doc.insert_at(insert_pos, &format!(r#" fill="{}""#, color)))
    }
}

/// Replace every `class="..."` in the document with `new_class`.
///
/// A pure global substitution: nothing is inserted when no class attribute
/// exists, and no root tag is required. Idempotent for a fixed `new_class`.
pub fn set_class(doc: &SvgDocument, new_class: &str) -> SvgDocument {
    let replacement = format!(r#"class="{}""#, new_class);
    let rewritten = CLASS_SET_RE.replace_all(doc.as_str(), NoExpand(&replacement));
    SvgDocument::new(rewritten.into_owned())
}

/// Append `new_class` to the first class attribute, or create one on the
/// root tag.
///
/// No-op when `new_class` is empty or already contained in the existing
/// value. Containment is plain substring search, not token matching, so
/// appending `ab` when `abc` is present is treated as already-present, a
/// known coarse-match limitation kept on purpose.
pub fn append_class(doc: &SvgDocument, new_class: &str) -> Result<SvgDocument, EditError> {
    if new_class.is_empty() {
        return Ok(doc.clone());
    }
    let insert_pos = doc.root_insert_pos()?;
    match CLASS_FIND_RE
        .captures(doc.as_str())
        .and_then(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str())))
    {
        Some((whole, current)) => {
            if current.contains(new_class) {
                return Ok(doc.clone());
            }
            // whole-match rewrite, normalized to double quotes
            Ok(doc.splice(whole, &format!(r#"class="{} {}""#, current, new_class)))
        }
        None => Ok(doc.insert_at(insert_pos, &format!(r#" class="{}""#, new_class))),
    }
}

/// Insert `attr_text` verbatim, space-separated, before the first `>`.
///
/// "First `>`" means the first tag encountered, which in a well-formed SVG
/// is the root tag's own close but is not verified to be.
pub fn add_raw_attribute(doc: &SvgDocument, attr_text: &str) -> Result<SvgDocument, EditError> {
    let pos = doc.first_tag_close()?;
    Ok(doc.insert_at(pos, &format!(" {}", attr_text)))
}

/// Merge `style_text` into the first style attribute, or create one.
///
/// Style content is opaque text: an existing non-empty value becomes
/// `old;new`, an empty one becomes `new`. When no `style="..."` exists the
/// attribute is inserted before the first `>`.
pub fn add_or_merge_style(doc: &SvgDocument, style_text: &str) -> Result<SvgDocument, EditError> {
    match STYLE_RE.captures(doc.as_str()).and_then(|caps| caps.get(1)) {
        Some(val) => {
            let current = val.as_str();
            let merged = if current.is_empty() {
                style_text.to_string()
            } else {
                format!("{};{}", current, style_text)
            };
            Ok(doc.splice(val.range(), &merged))
        }
        None => {
            let pos = doc.first_tag_close()?;
            Ok(doc.insert_at(pos, &format!(r#" style="{}""#, style_text)))
        }
    }
}

/// Scale integer `width`/`height` attributes by `factor`.
///
/// Requires both a `width="<digits>"` and a `height="<digits>"` match;
/// otherwise the document is returned unchanged (silent no-op, not an
/// error). New values truncate toward zero. Every matching width/height
/// occurrence is rewritten, all to the values computed from the first
/// occurrence of each.
pub fn scale_dimensions(doc: &SvgDocument, factor: f64) -> SvgDocument {
    let width = WIDTH_RE
        .captures(doc.as_str())
        .and_then(|c| c[1].parse::<i64>().ok());
    let height = HEIGHT_RE
        .captures(doc.as_str())
        .and_then(|c| c[1].parse::<i64>().ok());
    let (Some(width), Some(height)) = (width, height) else {
        return doc.clone();
    };

    let new_width = (width as f64 * factor) as i64;
    let new_height = (height as f64 * factor) as i64;

    let rewritten = WIDTH_RE.replace_all(
        doc.as_str(),
        NoExpand(&format!(r#"width="{}""#, new_width)),
    );
    let rewritten = HEIGHT_RE.replace_all(
        &rewritten,
        NoExpand(&format!(r#"height="{}""#, new_height)),
    );
    SvgDocument::new(rewritten.into_owned())
}

/// One requested edit, as a value.
///
/// Created by the caller (or the pipeline), applied once, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeEdit {
    /// Replace every class attribute value
    SetClass(String),
    /// Append a class token to the first class attribute
    AppendClass(String),
    /// Rewrite every fill attribute
    SetFill(String),
    /// Insert a raw attribute before the first `>`
    AddAttribute(String),
    /// Merge into (or create) the style attribute
    AddStyle(String),
    /// Scale integer width/height attributes
    Scale(f64),
}

impl AttributeEdit {
    /// Apply this edit to `doc`, producing a new document
    pub fn apply(&self, doc: &SvgDocument) -> Result<SvgDocument, EditError> {
        match self {
            AttributeEdit::SetClass(class) => Ok(set_class(doc, class)),
            AttributeEdit::AppendClass(class) => append_class(doc, class),
            AttributeEdit::SetFill(color) => set_fill_color(doc, color),
            AttributeEdit::AddAttribute(attr) => add_raw_attribute(doc, attr),
            AttributeEdit::AddStyle(style) => add_or_merge_style(doc, style),
            AttributeEdit::Scale(factor) => Ok(scale_dimensions(doc, *factor)),
        }
    }
}
