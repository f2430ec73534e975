//! Probe failure type.
//!
//! [`ProbeError`] is the one failure outcome of a probe run. The variants
//! only shape the message; callers treat every variant the same way.

use tokio_tungstenite::tungstenite;

/// Why a probe run failed.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The WebSocket handshake could not be completed.
    #[error("could not connect to {url}: {source}")]
    Connect {
        /// URL that was dialed.
        url: String,
        /// Underlying transport or handshake error.
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// The outbound message could not be serialized.
    #[error("failed to encode outbound message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing the outbound frame failed.
    #[error("failed to send message: {0}")]
    Send(#[source] Box<tungstenite::Error>),

    /// Reading an inbound frame failed.
    #[error("failed to receive {frame} frame: {source}")]
    Receive {
        /// Which expected frame was being read.
        frame: &'static str,
        /// Underlying socket error.
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// The server closed the connection before the frame arrived.
    #[error("connection closed while waiting for {frame} frame")]
    Closed {
        /// Which expected frame was being read.
        frame: &'static str,
    },

    /// An inbound frame was not valid JSON.
    #[error("{frame} frame is not valid JSON: {source}")]
    Decode {
        /// Which expected frame was being decoded.
        frame: &'static str,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
}

impl ProbeError {
    pub(crate) fn connect(url: &str, source: tungstenite::Error) -> Self {
        Self::Connect {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn receive(frame: &'static str, source: tungstenite::Error) -> Self {
        Self::Receive {
            frame,
            source: Box::new(source),
        }
    }
}
