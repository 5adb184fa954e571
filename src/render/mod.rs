//! # Render Transform
//!
//! Maps (document, configuration) to an [`Artifact`]: an SVG preview image
//! or a raw printer command stream, depending on the invoking [`Mode`].
//!
//! The pipeline consumes rendering through the [`RenderTransform`] trait and
//! never inspects the artifact content — the variant is decided by the mode
//! that asked for it. [`ReceiptRenderer`] is the built-in implementation,
//! covering the line/column/rule subset of receipt markup:
//!
//! - each input line is one receipt row;
//! - `|` splits a row into columns (left, left+right, or left/center/right);
//! - a line of three or more `-` is a horizontal rule;
//! - the `cpl` configuration field sets the row width in characters.
//!
//! ## Modules
//!
//! - [`layout`]: markup parsing and fixed-width row composition
//! - [`svg`]: vector preview output
//! - [`escpos`]: printer command stream output

pub mod escpos;
pub mod layout;
pub mod svg;

use crate::config::{Mode, PrinterConfig};
use crate::error::{TirillaError, TirillaResult};

/// A rendered output, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Text-based SVG content (preview mode)
    VectorImage(String),
    /// Binary-safe printer command sequence (print mode)
    CommandStream(Vec<u8>),
}

impl Artifact {
    /// The exact bytes to deliver to the artifact's destination.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Artifact::VectorImage(svg) => svg.as_bytes(),
            Artifact::CommandStream(bytes) => bytes,
        }
    }
}

/// The markup-to-artifact transform consumed by the pipeline.
///
/// A transform must be pure: the same (document, configuration, mode) input
/// always produces the same artifact. The pipeline calls it once per mode it
/// needs and surfaces any error as-is, aborting delivery.
pub trait RenderTransform {
    fn transform(
        &self,
        doc: &str,
        config: &PrinterConfig,
        mode: Mode,
    ) -> TirillaResult<Artifact>;
}

/// Built-in renderer for the receipt markup subset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptRenderer;

impl RenderTransform for ReceiptRenderer {
    fn transform(
        &self,
        doc: &str,
        config: &PrinterConfig,
        mode: Mode,
    ) -> TirillaResult<Artifact> {
        let cpl = config.cpl();
        if cpl == 0 {
            return Err(TirillaError::RenderFailed(
                "cpl must be at least 1".to_string(),
            ));
        }
        let rows = layout::parse(doc, cpl);
        Ok(match mode {
            Mode::Preview => Artifact::VectorImage(svg::render(&rows, cpl)),
            Mode::Print => Artifact::CommandStream(escpos::encode(&rows, config)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_cpl(cpl: u64) -> PrinterConfig {
        let mut config = PrinterConfig::default();
        config
            .extra
            .insert("cpl".to_string(), serde_json::Value::from(cpl));
        config
    }

    #[test]
    fn mode_selects_artifact_variant() {
        let config = config_with_cpl(42);
        let svg = ReceiptRenderer
            .transform("text|Hello\n", &config, Mode::Preview)
            .unwrap();
        assert!(matches!(svg, Artifact::VectorImage(_)));

        let cmd = ReceiptRenderer
            .transform("text|Hello\n", &config, Mode::Print)
            .unwrap();
        assert!(matches!(cmd, Artifact::CommandStream(_)));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = config_with_cpl(42);
        let a = ReceiptRenderer
            .transform("a|b\n---\nc\n", &config, Mode::Preview)
            .unwrap();
        let b = ReceiptRenderer
            .transform("a|b\n---\nc\n", &config, Mode::Preview)
            .unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn zero_cpl_is_render_failed() {
        let config = config_with_cpl(0);
        let err = ReceiptRenderer
            .transform("x", &config, Mode::Preview)
            .unwrap_err();
        assert!(matches!(err, TirillaError::RenderFailed(_)));
    }
}
