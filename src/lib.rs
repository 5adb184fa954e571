//! # Tirilla - Receipt Markup Rendering and Delivery
//!
//! Tirilla renders a textual receipt-markup document into a device-specific
//! output — an SVG preview or a raw ESC/POS command stream — and delivers it
//! to a file, standard output, or a network-attached thermal printer over
//! TCP (raw port 9100 printing).
//!
//! ## Quick Start
//!
//! ```no_run
//! use tirilla::{Pipeline, ReceiptRenderer, diag::StderrSink};
//!
//! async fn run() -> Result<(), tirilla::TirillaError> {
//!     let sink = StderrSink;
//!     let pipeline = Pipeline::new(ReceiptRenderer, "config", &sink);
//!
//!     // Write an SVG preview of receipt.txt to stdout
//!     pipeline.preview("receipt.txt")?;
//!
//!     // Save receipt.txt.svg and send the command stream to the printer
//!     // configured in config/print.json
//!     pipeline.print("receipt.txt").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`source`] | Document loading (file path or `-` for stdin) |
//! | [`config`] | Per-mode configuration objects (`preview.json`, `print.json`) |
//! | [`quirks`] | Feed-margin compensation for the physical printer |
//! | [`render`] | Markup → SVG / command-stream transform |
//! | [`transport`] | File, stdout, and TCP delivery |
//! | [`pipeline`] | Workflow orchestration |
//! | [`diag`] | Injected diagnostic sink |
//! | [`error`] | Error types |
//!
//! ## Configuration
//!
//! Each mode reads its own JSON object from the configuration directory
//! (`PRINTER_CONFIG_DIR`, default `config`). The pipeline interprets `host`,
//! `port`, `upsideDown` and `spacing`; every other field passes through to
//! the renderer opaquely.

pub mod config;
pub mod diag;
pub mod error;
pub mod pipeline;
pub mod quirks;
pub mod render;
pub mod source;
pub mod transport;

// Re-exports for convenience
pub use config::{Mode, PrinterConfig};
pub use error::{TirillaError, TirillaResult};
pub use pipeline::Pipeline;
pub use render::{Artifact, ReceiptRenderer, RenderTransform};
pub use transport::{FileTarget, LinkState, TcpTransport};
