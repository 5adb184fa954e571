//! # SVG Preview Output
//!
//! Renders composed rows onto a fixed character grid: every glyph cell is
//! [`CELL_WIDTH`] pixels wide and every row [`LINE_HEIGHT`] pixels tall, so
//! the preview lines up column-for-column with what a fixed-pitch printer
//! produces. `textLength` pins each row to its exact grid width regardless
//! of which monospace font the viewer picks.
//!
//! Output is deterministic: identical (rows, cpl) input yields byte-identical
//! SVG.

use super::layout::Row;

/// Width of one character cell in pixels.
pub const CELL_WIDTH: usize = 12;

/// Height of one row in pixels.
pub const LINE_HEIGHT: usize = 24;

/// Text baseline offset from the top of a row.
const BASELINE: usize = 18;

/// Render rows to a complete SVG document string.
pub fn render(rows: &[Row], cpl: usize) -> String {
    let width = cpl * CELL_WIDTH;
    let height = rows.len() * LINE_HEIGHT;

    let mut svg = String::with_capacity(256 + rows.len() * 64);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    svg.push('\n');
    svg.push_str(r##"<g font-family="monospace" font-size="20" fill="#000">"##);
    svg.push('\n');

    for (index, row) in rows.iter().enumerate() {
        let top = index * LINE_HEIGHT;
        match row {
            Row::Rule => {
                let y = top + LINE_HEIGHT / 2 - 1;
                svg.push_str(&format!(
                    r#"<rect x="0" y="{y}" width="{width}" height="2"/>"#
                ));
                svg.push('\n');
            }
            // Blank rows only advance the grid
            Row::Text(text) if text.is_empty() => {}
            Row::Text(text) => {
                let y = top + BASELINE;
                let text_length = text.chars().count() * CELL_WIDTH;
                svg.push_str(&format!(
                    r#"<text x="0" y="{y}" textLength="{text_length}" lengthAdjust="spacingAndGlyphs" xml:space="preserve">{}</text>"#,
                    escape_xml(text)
                ));
                svg.push('\n');
            }
        }
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
