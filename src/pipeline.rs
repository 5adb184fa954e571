//! # Pipeline Orchestration
//!
//! Sequences one invocation end to end: load document → resolve per-mode
//! configuration → (print mode only) quirk-adjust a copy → render → deliver.
//!
//! Data flow is strictly linear and value-passing: the loaded document is
//! threaded through as an immutable string, and the print workflow adjusts a
//! fresh copy so the SVG side-save always sees the text exactly as loaded.
//! Any stage failure aborts the remaining stages; nothing is retried.

use std::path::PathBuf;

use crate::config::{self, Mode, PrinterConfig};
use crate::diag::DiagnosticSink;
use crate::error::TirillaResult;
use crate::quirks;
use crate::render::RenderTransform;
use crate::source;
use crate::transport::{FileTarget, TcpTransport};

/// Orchestrator for the preview and print workflows.
pub struct Pipeline<'a, R> {
    renderer: R,
    config_dir: PathBuf,
    sink: &'a dyn DiagnosticSink,
}

impl<'a, R: RenderTransform> Pipeline<'a, R> {
    pub fn new(
        renderer: R,
        config_dir: impl Into<PathBuf>,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            renderer,
            config_dir: config_dir.into(),
            sink,
        }
    }

    /// Preview workflow: render the document to SVG and write it, byte-exact,
    /// to standard output.
    pub fn preview(&self, source_arg: &str) -> TirillaResult<()> {
        let doc = self.load_document(source_arg)?;
        let config = self.load_config(Mode::Preview)?;

        self.sink.emit("Converting to SVG...");
        let svg = self.renderer.transform(&doc, &config, Mode::Preview)?;

        self.sink.emit("Printing SVG to stdout...");
        FileTarget::Stdout.deliver(svg.as_bytes())?;
        self.sink.emit("SVG printed");
        Ok(())
    }

    /// Print workflow: save an SVG side artifact of the document as loaded,
    /// then render a quirk-adjusted copy to a command stream and deliver it
    /// to the configured printer over TCP.
    ///
    /// The side-save completes before the socket attempt; a later socket
    /// failure does not undo it.
    pub async fn print(&self, source_arg: &str) -> TirillaResult<()> {
        let doc = self.load_document(source_arg)?;

        let preview_config = self.load_config(Mode::Preview)?;
        self.sink.emit("Converting to SVG...");
        let svg = self.renderer.transform(&doc, &preview_config, Mode::Preview)?;

        let side_target = if source::is_stdin(source_arg) {
            FileTarget::Stdout
        } else {
            FileTarget::Path(PathBuf::from(format!("{source_arg}.svg")))
        };
        self.sink.emit("Saving...");
        side_target.deliver(svg.as_bytes())?;
        self.sink.emit(&format!("SVG saved: {side_target}"));

        let print_config = self.load_config(Mode::Print)?;
        self.sink.emit("Converting to printer command...");
        let adjusted = quirks::adjust_feed_margins(&doc, &print_config);
        let command = self.renderer.transform(&adjusted, &print_config, Mode::Print)?;

        let transport = TcpTransport::from_config(&print_config);
        self.sink
            .emit(&format!("Printing to {}...", transport.endpoint()));
        transport.deliver(command.as_bytes()).await?;
        self.sink.emit("Printed");
        Ok(())
    }

    fn load_document(&self, source_arg: &str) -> TirillaResult<String> {
        let doc = source::load_document(source_arg)?;
        self.sink
            .emit(&format!("Receipt loaded: {}", source::describe(source_arg)));
        Ok(doc)
    }

    fn load_config(&self, mode: Mode) -> TirillaResult<PrinterConfig> {
        let path = self.config_dir.join(mode.file_name());
        let config = config::load(&self.config_dir, mode)?;
        self.sink
            .emit(&format!("Printer configuration loaded: {}", path.display()));
        self.sink.emit(&format!("Printer: {config:?}"));
        Ok(config)
    }
}
