//! # Delivery Transports
//!
//! This module provides the destinations an artifact can be delivered to.
//!
//! ## Available Transports
//!
//! - [`file`]: local file or standard output (SVG artifacts)
//! - [`tcp`]: raw TCP to a printer's listening port (command streams)
//!
//! Every delivery is best-effort and single-shot: no retries, no pooling,
//! no partial success. A transport either delivers the whole artifact or
//! reports a failure.

pub mod file;
pub mod tcp;

pub use file::FileTarget;
pub use tcp::{LinkState, TcpTransport};
