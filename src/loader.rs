//! File and stream access for SVG text
//!
//! Loading joins the source's lines with their terminators stripped, so a
//! multi-line file arrives as a single-line buffer. Attribute patterns in
//! the edit engine never have to span line breaks because of this.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::SvgDocument;

/// Source unreadable or destination unwritable. Not retried; the pipeline
/// aborts at the failing step.
#[derive(Error, Debug)]
pub enum IoFailure {
    #[error("failed to read `{path}`: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write `{path}`: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Load an SVG document from a file path
pub fn load(path: &Path) -> Result<SvgDocument, IoFailure> {
    let read_err = |source| IoFailure::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    read_from(BufReader::new(file)).map_err(read_err)
}

/// Load an SVG document from any buffered reader, line by line
pub fn read_from(reader: impl BufRead) -> io::Result<SvgDocument> {
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
    }
    Ok(SvgDocument::new(text))
}

/// Write the document text verbatim to `path`, overwriting existing content
pub fn save(path: &Path, doc: &SvgDocument) -> Result<(), IoFailure> {
    std::fs::write(path, doc.as_str()).map_err(|source| IoFailure::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_joins_lines_without_separators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multi.svg");
        std::fs::write(&path, "<svg\n  width=\"10\">\n</svg>\n").unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.as_str(), "<svg  width=\"10\"></svg>");
    }

    #[test]
    fn read_from_accepts_any_reader() {
        let doc = read_from("<svg>\r\n</svg>".as_bytes()).unwrap();
        assert_eq!(doc.as_str(), "<svg></svg>");
    }

    #[test]
    fn save_then_load_round_trips_single_line_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let doc = SvgDocument::new(r##"<svg fill="#000"></svg>"##);

        save(&path, &doc).unwrap();
        assert_eq!(load(&path).unwrap(), doc);
    }

    #[test]
    fn load_missing_file_reports_the_path() {
        let err = load(Path::new("/definitely/not/here.svg")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("failed to read"));
        assert!(message.contains("not/here.svg"));
    }
}
