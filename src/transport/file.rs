//! # File / Stdout Transport
//!
//! Writes an artifact's full content to a destination path or to standard
//! output. The write is all-or-nothing from the caller's point of view; any
//! I/O error surfaces as [`TirillaError::WriteFailed`].
//!
//! Stdout delivery carries nothing but the artifact bytes — diagnostics go
//! through the sink (stderr), never here.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{TirillaError, TirillaResult};

/// Destination for a file-transport delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// The process's standard output stream
    Stdout,
    /// A local file path, truncated and rewritten on delivery
    Path(PathBuf),
}

impl FileTarget {
    /// Deliver the artifact bytes to this target.
    pub fn deliver(&self, data: &[u8]) -> TirillaResult<()> {
        match self {
            FileTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)
                    .and_then(|_| out.flush())
                    .map_err(TirillaError::WriteFailed)
            }
            FileTarget::Path(path) => {
                fs::write(path, data).map_err(TirillaError::WriteFailed)
            }
        }
    }
}

impl fmt::Display for FileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTarget::Stdout => write!(f, "<stdout>"),
            FileTarget::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_full_content_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.svg");
        let target = FileTarget::Path(path.clone());
        target.deliver(b"<svg/>").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<svg/>");
    }

    #[test]
    fn delivery_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.svg");
        let target = FileTarget::Path(path.clone());
        target.deliver(b"first, longer content").unwrap();
        target.deliver(b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn unwritable_path_is_write_failed() {
        let target = FileTarget::Path(PathBuf::from("/no/such/dir/receipt.svg"));
        let err = target.deliver(b"x").unwrap_err();
        assert!(matches!(err, TirillaError::WriteFailed(_)));
    }

    #[test]
    fn display_names_the_destination() {
        assert_eq!(FileTarget::Stdout.to_string(), "<stdout>");
        assert_eq!(
            FileTarget::Path(PathBuf::from("r.svg")).to_string(),
            "r.svg"
        );
    }
}
