//! # TCP Printer Transport
//!
//! Fire-and-forget delivery of a command stream to a printer's raw listening
//! port (conventionally 9100). One connection per delivery: connect, send
//! everything, half-close, done. The transport never waits for or interprets
//! an application-level acknowledgment — TCP-level completion of the write
//! plus the orderly shutdown is the entire success signal.
//!
//! ## Connection lifecycle
//!
//! ```text
//! Connecting ──> Connected ──> Sending ──> Closed     (success)
//!      │             │            │
//!      └─────────────┴────────────┴─────> Failed      (refused, timeout, reset)
//! ```
//!
//! The half-close (shutdown of our write side) rather than an abrupt drop
//! lets the printer finish consuming buffered bytes before the connection
//! fully terminates. No retry is attempted at this layer.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::config::PrinterConfig;
use crate::error::{TirillaError, TirillaResult};

/// Connection lifecycle states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// TCP handshake in progress
    Connecting,
    /// Handshake completed
    Connected,
    /// Command stream queued for transmission
    Sending,
    /// All bytes flushed and half-close completed (success terminal)
    Closed,
    /// Refused, timed out, or reset mid-send (failure terminal)
    Failed,
}

/// Raw TCP transport for printer command streams.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl TcpTransport {
    /// Default connect timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a transport for `host:port`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Create a transport targeting the configuration's `host:port`.
    pub fn from_config(config: &PrinterConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The `host:port` this transport delivers to.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Deliver the full command stream and half-close the connection.
    pub async fn deliver(&self, data: &[u8]) -> TirillaResult<()> {
        self.deliver_traced(data, |_| {}).await
    }

    /// [`deliver`](Self::deliver), reporting each [`LinkState`] transition
    /// to `observe` as it happens.
    pub async fn deliver_traced(
        &self,
        data: &[u8],
        mut observe: impl FnMut(LinkState),
    ) -> TirillaResult<()> {
        let endpoint = self.endpoint();

        observe(LinkState::Connecting);
        let connect = TcpStream::connect(endpoint.as_str());
        let mut stream = match tokio::time::timeout(self.connect_timeout, connect).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                observe(LinkState::Failed);
                return Err(TirillaError::ConnectionFailed(format!("{endpoint}: {e}")));
            }
            Err(_) => {
                observe(LinkState::Failed);
                return Err(TirillaError::ConnectionFailed(format!(
                    "{endpoint}: connect timed out after {:?}",
                    self.connect_timeout
                )));
            }
        };
        observe(LinkState::Connected);

        observe(LinkState::Sending);
        let sent = async {
            stream.write_all(data).await?;
            stream.flush().await?;
            // Half-close: signal end-of-stream, let the printer drain
            stream.shutdown().await
        }
        .await;

        match sent {
            Ok(()) => {
                observe(LinkState::Closed);
                Ok(())
            }
            Err(e) => {
                observe(LinkState::Failed);
                Err(TirillaError::ConnectionFailed(format!("{endpoint}: {e}")))
            }
        }
    }
}
