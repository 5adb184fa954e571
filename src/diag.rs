//! # Diagnostic Sink
//!
//! Progress and failure reporting for the pipeline.
//!
//! Diagnostics are line-oriented and go through an injected sink rather than
//! an ambient logger, so the primary artifact stream stays byte-exact: when
//! SVG is written to stdout, stdout carries nothing but the SVG. Production
//! code uses [`StderrSink`]; tests use [`MemorySink`] to assert on what was
//! reported.

use std::sync::Mutex;

/// A destination for diagnostic lines.
pub trait DiagnosticSink {
    /// Emit a single diagnostic line.
    fn emit(&self, line: &str);
}

/// Sink that writes each line to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Sink that records lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Whether any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
