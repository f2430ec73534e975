//! Probe configuration.
//!
//! The endpoint and the scripted payload are fixed. [`ProbeConfig::load`]
//! only pulls in a `.env` file (via `dotenvy`) so that `RUST_LOG` can be
//! set there.

use crate::messages::OutboundMessage;

/// WebSocket endpoint of the local chat backend.
pub const DEFAULT_URL: &str = "ws://localhost:8000/ws";

/// Text of the scripted chat message.
pub const DEFAULT_MESSAGE: &str = "Namaste demo";

/// Session identifier sent alongside the scripted message.
pub const DEFAULT_SESSION_ID: &str = "test_session";

/// Everything a probe run needs: where to connect and what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// WebSocket URL to connect to.
    pub url: String,

    /// The single message sent after connecting.
    pub outbound: OutboundMessage,
}

impl ProbeConfig {
    /// Builds the fixed configuration, loading a `.env` file first if one
    /// is present.
    #[must_use]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::default()
    }

    /// Same payload as the default, pointed at another URL.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            outbound: OutboundMessage::new(DEFAULT_MESSAGE, DEFAULT_SESSION_ID),
        }
    }
}
