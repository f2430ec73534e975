//! Wire messages exchanged with the chat backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProbeError;

/// Label of the first inbound frame.
pub const STATUS_FRAME: &str = "status";

/// Label of the second inbound frame.
pub const RESPONSE_FRAME: &str = "response";

/// The single chat message the probe sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Chat text.
    pub message: String,
    /// Session the message belongs to.
    pub session_id: String,
}

impl OutboundMessage {
    /// Creates a message for the given session.
    #[must_use]
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.into(),
        }
    }

    /// Serializes the message to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ProbeError> {
        serde_json::to_string(self).map_err(ProbeError::Encode)
    }
}

/// Both decoded replies of a successful exchange. Neither is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    /// First frame, normally a progress/status notice.
    pub status: Value,
    /// Second frame, the backend's answer.
    pub response: Value,
}

/// Decodes a data frame payload as JSON.
pub(crate) fn decode(frame: &'static str, payload: &[u8]) -> Result<Value, ProbeError> {
    serde_json::from_slice(payload).map_err(|source| ProbeError::Decode { frame, source })
}
