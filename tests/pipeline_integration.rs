//! End-to-end pipeline tests against real files
//!
//! These exercise the full load -> edit -> write path: multi-line sources,
//! plan-driven runs, the destination/return exclusivity, and the abort
//! behavior for malformed documents.

use std::fs;

use svg_tweak::{
    transform, EditPlan, PipelineError, PipelineOutcome, TransformPipeline,
};

const MULTILINE_SOURCE: &str = r##"<svg
    width="24"
    height="24">
  <path fill="#fff"/>
</svg>
"##;

#[test]
fn file_to_file_run_applies_every_step_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("icon.svg");
    let dest = dir.path().join("icon.out.svg");
    fs::write(&src, MULTILINE_SOURCE).unwrap();

    let outcome = TransformPipeline::new()
        .with_source(&src)
        .with_fill("#ff0000")
        .add_class("happ")
        .add_class("moj")
        .with_raw_attribute("baz='321'")
        .with_style("opacity:0.5")
        .with_scale(2.0)
        .with_destination(&dest)
        .execute()
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Written(dest.clone()));

    let written = fs::read_to_string(&dest).unwrap();
    // loading joined the lines, so the output is a single line
    assert!(!written.contains('\n'));
    assert!(written.contains(r#"class="happ moj""#));
    assert!(written.contains(r##"fill="#ff0000""##));
    assert!(written.contains("baz='321'"));
    assert!(written.contains(r#"style="opacity:0.5""#));
    assert!(written.contains(r#"width="48""#));
    assert!(written.contains(r#"height="48""#));
    // the source file itself is untouched
    assert_eq!(fs::read_to_string(&src).unwrap(), MULTILINE_SOURCE);
}

#[test]
fn run_without_destination_returns_the_text() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("icon.svg");
    fs::write(&src, r#"<svg width="10" height="20"></svg>"#).unwrap();

    let outcome = TransformPipeline::new()
        .with_source(&src)
        .with_scale(2.0)
        .execute()
        .unwrap();

    match outcome {
        PipelineOutcome::Rendered(text) => {
            assert_eq!(text, r#"<svg width="20" height="40"></svg>"#);
        }
        PipelineOutcome::Written(path) => {
            panic!("expected in-memory result, got a write to {:?}", path)
        }
    }
}

#[test]
fn plan_file_drives_a_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("icon.svg");
    let dest = dir.path().join("out.svg");
    fs::write(&src, "<svg><rect/></svg>").unwrap();

    let plan_toml = format!(
        r##"
source = {src:?}
fill = "#123456"
add-classes = ["a", "b"]
output = {dest:?}
"##,
        src = src,
        dest = dest
    );
    let plan_path = dir.path().join("plan.toml");
    fs::write(&plan_path, plan_toml).unwrap();

    let outcome = EditPlan::from_file(&plan_path)
        .unwrap()
        .into_pipeline()
        .execute()
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Written(dest.clone()));
    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(written, r##"<svg class="a b" fill="#123456"><rect/></svg>"##);
}

#[test]
fn missing_source_file_aborts_with_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = TransformPipeline::new()
        .with_source(dir.path().join("nope.svg"))
        .with_fill("#000")
        .execute()
        .unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}

#[test]
fn document_without_root_tag_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("not-svg.xml");
    let dest = dir.path().join("out.svg");
    fs::write(&src, "<html><body/></html>").unwrap();

    let err = TransformPipeline::new()
        .with_source(&src)
        .with_fill("#000")
        .with_destination(&dest)
        .execute()
        .unwrap_err();

    assert!(matches!(err, PipelineError::Edit(_)));
    // nothing was written on the failing run
    assert!(!dest.exists());
}

#[test]
fn repeated_execution_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("icon.svg");
    fs::write(&src, r#"<svg class="base"><g class="leaf"/></svg>"#).unwrap();

    let pipeline = TransformPipeline::new()
        .with_source(&src)
        .add_class("extra")
        .with_style("stroke:none");

    let first = pipeline.execute().unwrap().into_text().unwrap();
    let second = pipeline.execute().unwrap().into_text().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        r#"<svg class="base extra" style="stroke:none"><g class="leaf"/></svg>"#
    );
}

#[test]
fn transform_matches_file_backed_execution() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("icon.svg");
    let text = r#"<svg style="opacity:0.5"></svg>"#;
    fs::write(&src, text).unwrap();

    let pipeline = TransformPipeline::new().with_style("stroke:#000");
    let in_memory = transform(text, &pipeline).unwrap();
    let from_file = pipeline
        .clone()
        .with_source(&src)
        .execute()
        .unwrap()
        .into_text()
        .unwrap();

    assert_eq!(in_memory, from_file);
    assert_eq!(in_memory, r##"<svg style="opacity:0.5;stroke:#000"></svg>"##);
}
