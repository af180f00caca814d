//! svg-tweak - string-level attribute editing for SVG documents
//!
//! This library loads an SVG's textual content and performs targeted edits
//! on its attributes (class, fill, style, arbitrary attributes) and integer
//! width/height scaling, then writes the result back out. It is a
//! convenience layer over raw text: no DOM, no well-formedness checking,
//! just substring and pattern search-and-replace anchored on the first
//! `<svg` opener.
//!
//! # Example
//!
//! ```rust
//! use svg_tweak::{transform, TransformPipeline};
//!
//! let pipeline = TransformPipeline::new()
//!     .with_fill("#000")
//!     .add_class("icon");
//!
//! let out = transform(r##"<svg><path fill="#fff"/></svg>"##, &pipeline).unwrap();
//! assert_eq!(out, r##"<svg class="icon"><path fill="#000"/></svg>"##);
//! ```

pub mod document;
pub mod edit;
pub mod loader;
pub mod pipeline;
pub mod plan;

pub use document::{EditError, SvgDocument};
pub use edit::{
    add_or_merge_style, add_raw_attribute, append_class, scale_dimensions, set_class,
    set_fill_color, set_or_insert_quoted_attribute, AttributeEdit,
};
pub use loader::IoFailure;
pub use pipeline::{PipelineError, PipelineOutcome, TransformPipeline};
pub use plan::{EditPlan, PlanError};

/// Apply a pipeline's transformations to in-memory SVG text.
///
/// Bypasses the pipeline's source/destination handling: the text goes in,
/// the transformed text comes out. Fails with [`EditError::RootTagNotFound`]
/// when the text has no `<svg` opener.
pub fn transform(svg_text: &str, pipeline: &TransformPipeline) -> Result<String, EditError> {
    pipeline
        .apply(SvgDocument::new(svg_text))
        .map(SvgDocument::into_string)
}
