//! # Feed Margin Compensation
//!
//! The SII RP-E11 places its cutter well past the print head, so a receipt
//! printed to the markup's exact height loses its last lines behind the
//! cutter. Before print-mode rendering, the document is padded with blank
//! lines to push the content fully past the cutter.
//!
//! The padding depends on the mounting orientation: an upside-down-fed
//! printer consumes the document in reverse physical order, so leading and
//! trailing padding swap roles.
//!
//! | `upsideDown` | `spacing` | Result |
//! |--------------|-----------|--------|
//! | true  | true  | `"\n\n\n\n"` + doc |
//! | true  | false | `"\n\n\n\n"` + doc + `"\n"` |
//! | false | true  | doc + `"\n\n\n"` |
//! | false | false | doc + `"\n\n\n\n"` |
//!
//! Only the print-mode copy of the document is adjusted; the copy rendered
//! to SVG is always the text as loaded.

use crate::config::PrinterConfig;

/// Pad `doc` with blank lines per the printer's feed quirks.
///
/// Returns a new string; the loaded document is never edited in place.
pub fn adjust_feed_margins(doc: &str, config: &PrinterConfig) -> String {
    let mut adjusted = String::with_capacity(doc.len() + 5);
    if config.upside_down {
        adjusted.push_str("\n\n\n\n");
        adjusted.push_str(doc);
        if !config.spacing {
            adjusted.push('\n');
        }
    } else {
        adjusted.push_str(doc);
        adjusted.push_str("\n\n\n");
        if !config.spacing {
            adjusted.push('\n');
        }
    }
    adjusted
}
