//! # Printer Configuration
//!
//! Per-mode configuration objects loaded from a configuration directory.
//!
//! Each [`Mode`] has its own file inside the directory selected by the
//! `PRINTER_CONFIG_DIR` environment variable (default `config`):
//!
//! | Mode | File | Produces |
//! |------|------|----------|
//! | [`Mode::Preview`] | `preview.json` | SVG vector image |
//! | [`Mode::Print`] | `print.json` | raw printer command stream |
//!
//! The two files are independent — no inheritance or merging — and each is
//! loaded fresh per invocation, never cached.
//!
//! Only four fields are interpreted by the pipeline itself: `host`, `port`,
//! `upsideDown` and `spacing`. Everything else (`cpl`, character set,
//! cash-drawer flags, …) is retained opaquely and handed through to the
//! render transform untouched.
//!
//! No semantic validation happens here: an unreachable `host:port` is only
//! discovered at delivery time.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TirillaError, TirillaResult};

/// Rendering mode, selecting both the configuration file and the artifact
/// kind the transform produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Vector image preview (SVG)
    Preview,
    /// Raw printer command stream
    Print,
}

impl Mode {
    /// Configuration file name for this mode.
    pub fn file_name(self) -> &'static str {
        match self {
            Mode::Preview => "preview.json",
            Mode::Print => "print.json",
        }
    }
}

/// A per-mode printer configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterConfig {
    /// Printer host name or address (print mode delivery target)
    #[serde(default = "default_host")]
    pub host: String,

    /// Raw printing port, conventionally 9100
    #[serde(default = "default_port")]
    pub port: u16,

    /// Paper feeds out of the printer upside down (SII RP-E11 mounted
    /// inverted); swaps leading/trailing feed compensation
    #[serde(default)]
    pub upside_down: bool,

    /// Printer adds its own line spacing, so one less padding line is needed
    #[serde(default)]
    pub spacing: bool,

    /// Opaque pass-through fields consumed only by the render transform
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9100
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upside_down: false,
            spacing: false,
            extra: serde_json::Map::new(),
        }
    }
}

impl PrinterConfig {
    /// Characters per line, from the pass-through `cpl` field (default 48).
    pub fn cpl(&self) -> usize {
        self.extra
            .get("cpl")
            .and_then(Value::as_u64)
            .map(|v| v as usize)
            .unwrap_or(48)
    }
}

/// Load and parse the configuration for `mode` from `dir`.
///
/// Fails with [`TirillaError::ConfigMissing`] when the file is absent and
/// [`TirillaError::ConfigInvalid`] when it cannot be parsed into a
/// configuration object.
pub fn load(dir: &Path, mode: Mode) -> TirillaResult<PrinterConfig> {
    let path = dir.join(mode.file_name());
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TirillaError::ConfigMissing(path));
        }
        Err(e) => {
            return Err(TirillaError::ConfigInvalid {
                path,
                reason: e.to_string(),
            });
        }
    };
    serde_json::from_str(&raw).map_err(|e| TirillaError::ConfigInvalid {
        path,
        reason: e.to_string(),
    })
}
