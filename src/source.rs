//! # Document Source
//!
//! Loads the receipt markup document from a file path, or from standard
//! input when the argument is the `-` sentinel. The whole document is
//! buffered before the pipeline proceeds — the render transform needs the
//! complete text, so partial reads are never exposed.

use std::fs;
use std::io::{self, Read};

use crate::error::{TirillaError, TirillaResult};

/// Command-line sentinel meaning "read the document from standard input".
pub const STDIN_SENTINEL: &str = "-";

/// Whether a source argument refers to standard input.
pub fn is_stdin(arg: &str) -> bool {
    arg == STDIN_SENTINEL
}

/// Human-readable name of a source argument, for diagnostics.
pub fn describe(arg: &str) -> &str {
    if is_stdin(arg) { "<stdin>" } else { arg }
}

/// Load the full document from the given source argument.
pub fn load_document(arg: &str) -> TirillaResult<String> {
    if is_stdin(arg) {
        let mut doc = String::new();
        io::stdin()
            .read_to_string(&mut doc)
            .map_err(|source| TirillaError::SourceUnavailable {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(doc)
    } else {
        fs::read_to_string(arg).map_err(|source| TirillaError::SourceUnavailable {
            path: arg.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "text|Hello\n---\n").unwrap();
        let doc = load_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(doc, "text|Hello\n---\n");
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load_document("/no/such/receipt.txt").unwrap_err();
        assert!(matches!(err, TirillaError::SourceUnavailable { .. }));
    }

    #[test]
    fn sentinel_detection() {
        assert!(is_stdin("-"));
        assert!(!is_stdin("receipt.txt"));
        assert_eq!(describe("-"), "<stdin>");
        assert_eq!(describe("receipt.txt"), "receipt.txt");
    }
}
