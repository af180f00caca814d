//! svg-tweak CLI
//!
//! Usage:
//!   svg-tweak [OPTIONS] [FILE]
//!
//! Reads an SVG file (or stdin), applies the configured edits in the
//! pipeline's fixed order, and prints the result to stdout or writes it to
//! `--output`. A `--plan` TOML file can describe the whole run; flags given
//! on the command line override the plan's values.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;

use svg_tweak::{loader, EditPlan, PipelineOutcome, TransformPipeline};

#[derive(Parser)]
#[command(name = "svg-tweak")]
#[command(about = "String-level attribute editing for SVG files")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Edit plan file (TOML format) describing a whole pipeline
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Rewrite every fill attribute to this color
    #[arg(long)]
    fill: Option<String>,

    /// Class applied during the initial load-time pass
    #[arg(long)]
    class: Option<String>,

    /// Attribute inserted on the root tag during the initial load-time pass
    #[arg(long)]
    attribute: Option<String>,

    /// Append a class (repeatable; applied in order)
    #[arg(long = "add-class", value_name = "CLASS")]
    add_class: Vec<String>,

    /// Insert a raw attribute before the first `>`
    #[arg(long, value_name = "ATTR")]
    raw_attribute: Option<String>,

    /// Merge style text into the style attribute
    #[arg(long)]
    style: Option<String>,

    /// Scale integer width/height attributes by this factor
    #[arg(long)]
    scale: Option<f64>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Start from the plan, when given
    let mut pipeline = match &cli.plan {
        Some(path) => match EditPlan::from_file(path) {
            Ok(plan) => plan.into_pipeline(),
            Err(e) => {
                eprintln!("Error loading plan '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TransformPipeline::new(),
    };

    // Command-line flags override plan values
    if let Some(class) = cli.class {
        pipeline = pipeline.with_initial_class(class);
    }
    if let Some(attribute) = cli.attribute {
        pipeline = pipeline.with_initial_attribute(attribute);
    }
    if let Some(fill) = cli.fill {
        pipeline = pipeline.with_fill(fill);
    }
    for class in cli.add_class {
        pipeline = pipeline.add_class(class);
    }
    if let Some(attribute) = cli.raw_attribute {
        pipeline = pipeline.with_raw_attribute(attribute);
    }
    if let Some(style) = cli.style {
        pipeline = pipeline.with_style(style);
    }
    if let Some(scale) = cli.scale {
        pipeline = pipeline.with_scale(scale);
    }
    if let Some(input) = cli.input {
        pipeline = pipeline.with_source(input);
    }
    if let Some(output) = cli.output {
        pipeline = pipeline.with_destination(output);
    }

    if pipeline.source().is_some() {
        match pipeline.execute() {
            Ok(PipelineOutcome::Rendered(text)) => println!("{}", text),
            Ok(PipelineOutcome::Written(path)) => eprintln!("wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // No source anywhere: read stdin, unless this is an interactive session
    if io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let doc = match loader::read_from(io::stdin().lock()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
    };

    let doc = match pipeline.apply(doc) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match pipeline.destination() {
        Some(path) => match loader::save(path, &doc) {
            Ok(()) => eprintln!("wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => println!("{}", doc),
    }
}

fn print_intro() {
    println!(
        r#"svg-tweak - string-level attribute editing for SVG files

USAGE:
    svg-tweak [OPTIONS] [FILE]
    cat icon.svg | svg-tweak [OPTIONS]

OPTIONS:
    --fill <COLOR>          Rewrite every fill attribute
    --class <CLASS>         Set the class attribute on load
    --add-class <CLASS>     Append a class (repeatable)
    --attribute <ATTR>      Insert an attribute on the root tag
    --raw-attribute <ATTR>  Insert a raw attribute before the first '>'
    --style <STYLE>         Merge into the style attribute
    --scale <FACTOR>        Scale integer width/height
    -p, --plan <FILE>       Load a whole pipeline from a TOML plan
    -o, --output <FILE>     Write the result to a file
    -h, --help              Print help

QUICK START:
    svg-tweak icon.svg --fill '#ff0000' --add-class dark -o out.svg

Edits run in a fixed order (class, fill, appended classes, raw attribute,
style, scale) regardless of the order the flags are given."#
    );
}
