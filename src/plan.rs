//! Declarative edit plans loaded from TOML
//!
//! A plan file describes an entire pipeline run, so batch tooling can ship
//! transformations as data instead of code:
//!
//! ```toml
//! source = "icon.svg"
//! fill = "#ff0000"
//! add-classes = ["icon", "dark"]
//! style = "opacity:0.5"
//! output = "out/icon.svg"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pipeline::TransformPipeline;

/// Errors that can occur when loading or parsing an edit plan
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse plan TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A pipeline configuration expressed as a TOML document.
///
/// Every key is optional; an empty plan is an empty pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditPlan {
    /// Path the SVG is loaded from
    pub source: Option<PathBuf>,
    /// Class applied during the initial load-time pass
    pub class: Option<String>,
    /// Attribute inserted on the root tag during the initial pass
    pub attribute: Option<String>,
    /// Fill color rewrite
    pub fill: Option<String>,
    /// Classes to append, in order
    #[serde(default)]
    pub add_classes: Vec<String>,
    /// Raw attribute inserted before the first `>`
    pub raw_attribute: Option<String>,
    /// Style text merged into the style attribute
    pub style: Option<String>,
    /// Width/height scale factor
    pub scale: Option<f64>,
    /// Path the result is written to
    pub output: Option<PathBuf>,
}

impl EditPlan {
    /// Load a plan from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PlanError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a plan from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(content)?)
    }

    /// Convert the plan into an executable pipeline
    pub fn into_pipeline(self) -> TransformPipeline {
        let mut pipeline = TransformPipeline::new();
        if let Some(source) = self.source {
            pipeline = pipeline.with_source(source);
        }
        if let Some(class) = self.class {
            pipeline = pipeline.with_initial_class(class);
        }
        if let Some(attribute) = self.attribute {
            pipeline = pipeline.with_initial_attribute(attribute);
        }
        if let Some(fill) = self.fill {
            pipeline = pipeline.with_fill(fill);
        }
        for class in self.add_classes {
            pipeline = pipeline.add_class(class);
        }
        if let Some(attribute) = self.raw_attribute {
            pipeline = pipeline.with_raw_attribute(attribute);
        }
        if let Some(style) = self.style {
            pipeline = pipeline.with_style(style);
        }
        if let Some(scale) = self.scale {
            pipeline = pipeline.with_scale(scale);
        }
        if let Some(output) = self.output {
            pipeline = pipeline.with_destination(output);
        }
        pipeline
    }
}
