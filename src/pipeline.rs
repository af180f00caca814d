//! The transform pipeline: configuration, fixed-order execution, output
//!
//! A [`TransformPipeline`] is an immutable configuration value built with
//! `with_*` chaining. Execution order is a contract and is independent of
//! the order the configuration calls were made:
//!
//! 1. load the source text
//! 2. initial class / initial attribute pass
//! 3. fill color
//! 4. appended classes, in configured order
//! 5. raw attribute
//! 6. style
//! 7. dimension scaling
//! 8. write to the destination, or return the text

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::{EditError, SvgDocument};
use crate::edit::{set_or_insert_quoted_attribute, AttributeEdit};
use crate::loader::{self, IoFailure};

/// Failures surfaced by [`TransformPipeline::execute`]
#[derive(Error, Debug)]
pub enum PipelineError {
    /// `execute` was called without a configured source path
    #[error("no source path configured for the pipeline")]
    MissingSource,

    #[error(transparent)]
    Io(#[from] IoFailure),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// What a pipeline run produced.
///
/// Writing to a destination and returning the text are mutually exclusive:
/// a run with a configured destination reports the written path instead of
/// echoing the document back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The transformed text, returned in memory
    Rendered(String),
    /// The destination path the text was written to
    Written(PathBuf),
}

impl PipelineOutcome {
    /// The transformed text, when the run returned it in memory
    pub fn into_text(self) -> Option<String> {
        match self {
            PipelineOutcome::Rendered(text) => Some(text),
            PipelineOutcome::Written(_) => None,
        }
    }
}

/// An ordered set of requested transformations plus source and destination.
///
/// Plain data: cloneable, reusable, and safe to `apply` against any number
/// of documents, though the design intent is one pipeline per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformPipeline {
    source: Option<PathBuf>,
    initial_class: Option<String>,
    initial_attribute: Option<String>,
    fill: Option<String>,
    append_classes: Vec<String>,
    raw_attribute: Option<String>,
    style: Option<String>,
    scale: Option<f64>,
    destination: Option<PathBuf>,
}

impl TransformPipeline {
    /// An empty pipeline: applying it leaves a document unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source path the document is loaded from
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Set the class applied during the initial load-time pass
    pub fn with_initial_class(mut self, class: impl Into<String>) -> Self {
        self.initial_class = Some(class.into());
        self
    }

    /// Set the raw attribute inserted on the root tag during the initial pass
    pub fn with_initial_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.initial_attribute = Some(attribute.into());
        self
    }

    /// Set the fill color rewrite
    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    /// Queue a class to append. May be called repeatedly; classes are
    /// appended in this order, each seeing the previous one's result.
    pub fn add_class(mut self, class: impl Into<String>) -> Self {
        self.append_classes.push(class.into());
        self
    }

    /// Set the raw attribute inserted before the first `>`
    pub fn with_raw_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.raw_attribute = Some(attribute.into());
        self
    }

    /// Set the style text to merge into the style attribute
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the width/height scale factor
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }

    /// Set the destination path the result is written to
    pub fn with_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// The path the document will be loaded from, if one is configured
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The path the document will be written to, if one is configured
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// The configured edits after the initial pass, in execution order
    pub fn edits(&self) -> Vec<AttributeEdit> {
        let mut edits = Vec::new();
        if let Some(color) = &self.fill {
            edits.push(AttributeEdit::SetFill(color.clone()));
        }
        for class in &self.append_classes {
            edits.push(AttributeEdit::AppendClass(class.clone()));
        }
        if let Some(attribute) = &self.raw_attribute {
            edits.push(AttributeEdit::AddAttribute(attribute.clone()));
        }
        if let Some(style) = &self.style {
            edits.push(AttributeEdit::AddStyle(style.clone()));
        }
        if let Some(factor) = self.scale {
            edits.push(AttributeEdit::Scale(factor));
        }
        edits
    }

    /// Apply every configured transformation to an already-loaded document.
    ///
    /// Pure with respect to I/O. The root tag is located before the first
    /// edit runs, so a document without `<svg` fails before any mutation.
    pub fn apply(&self, doc: SvgDocument) -> Result<SvgDocument, EditError> {
        doc.root_tag_open()?;
        let mut doc = self.apply_initial(doc)?;
        for edit in self.edits() {
            doc = edit.apply(&doc)?;
        }
        Ok(doc)
    }

    /// The load-time class/attribute pass. Historically applied while the
    /// document was being read, hence a distinct first step rather than an
    /// entry in [`Self::edits`]. Skipped entirely when both are empty.
    fn apply_initial(&self, doc: SvgDocument) -> Result<SvgDocument, EditError> {
        let class = self.initial_class.as_deref().unwrap_or("");
        let attribute = self.initial_attribute.as_deref().unwrap_or("");

        let mut doc = doc;
        if !class.is_empty() {
            doc = set_or_insert_quoted_attribute(&doc, "class", class)?;
        }
        if !attribute.is_empty() {
            let pos = doc.root_insert_pos()?;
            doc = doc.insert_at(pos, &format!(" {}", attribute));
        }
        Ok(doc)
    }

    /// Run the whole pipeline: load, apply, then write or return.
    pub fn execute(&self) -> Result<PipelineOutcome, PipelineError> {
        let source = self.source.as_deref().ok_or(PipelineError::MissingSource)?;
        let doc = loader::load(source)?;
        let doc = self.apply(doc)?;
        match &self.destination {
            Some(dest) => {
                loader::save(dest, &doc)?;
                Ok(PipelineOutcome::Written(dest.clone()))
            }
            None => Ok(PipelineOutcome::Rendered(doc.into_string())),
        }
    }
}
