//! # ESC/POS Command Stream Output
//!
//! Builds the raw byte sequence delivered to the printer's listening port.
//!
//! ## Escape Sequence Structure
//!
//! ESC/POS commands are byte sequences prefixed by escape characters:
//!
//! | Command | Bytes | Effect |
//! |---------|-------|--------|
//! | `ESC @` | 1B 40 | initialize printer |
//! | `ESC { n` | 1B 7B n | upside-down printing on (n=1) / off (n=0) |
//! | `GS V 66 n` | 1D 56 42 n | feed n lines, then cut |
//! | `LF` | 0A | print line buffer and feed one line |
//!
//! Row text is sent as UTF-8; character-set remapping for legacy code pages
//! is the printer's (or a future encoding pass's) concern, not the stream
//! builder's.

use super::layout::Row;
use crate::config::PrinterConfig;

/// ESC (Escape) - command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - extended command prefix
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - print and advance one line
pub const LF: u8 = 0x0A;

/// Initialize printer (`ESC @`), clearing buffer and formatting state.
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Upside-down printing mode (`ESC { n`).
#[inline]
pub fn upside_down(enabled: bool) -> Vec<u8> {
    vec![ESC, b'{', enabled as u8]
}

/// Feed `lines` lines and cut (`GS V 66 n`). Letting the printer combine
/// feed and cut keeps the cutter-to-head distance correct per model.
#[inline]
pub fn cut_feed(lines: u8) -> Vec<u8> {
    vec![GS, b'V', 66, lines]
}

/// Encode composed rows into a complete print job.
///
/// Layout order: init, orientation, one text line + `LF` per row, then a
/// feed-and-cut tail. Rule rows print as a full-width dash line.
pub fn encode(rows: &[Row], config: &PrinterConfig) -> Vec<u8> {
    let cpl = config.cpl();
    let mut job = Vec::with_capacity(64 + rows.len() * (cpl + 1));
    job.extend_from_slice(&init());
    if config.upside_down {
        job.extend_from_slice(&upside_down(true));
    }
    for row in rows {
        match row {
            Row::Rule => {
                job.extend(std::iter::repeat_n(b'-', cpl));
            }
            Row::Text(text) => job.extend_from_slice(text.as_bytes()),
        }
        job.push(LF);
    }
    job.extend_from_slice(&cut_feed(0));
    job
}
