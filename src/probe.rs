//! The connection probe: connect, send one message, read two replies.
//!
//! [`exchange`] holds the scripted send/receive sequence and runs over any
//! WebSocket sink/stream, so it can be driven without a real backend.
//! [`run_probe`] dials the configured URL and hands the socket to it.
//!
//! No timeout is applied anywhere. If the backend never answers, the probe
//! waits forever.

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use serde_json::Value;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::messages::{self, OutboundMessage, ProbeReport, RESPONSE_FRAME, STATUS_FRAME};

/// Progress callbacks fired while a probe runs.
///
/// All methods default to no-ops.
pub trait ProbeObserver {
    /// The WebSocket handshake completed.
    fn connected(&mut self, _url: &str) {}

    /// The outbound message is about to be written.
    fn sending(&mut self, _outbound: &OutboundMessage) {}

    /// The status frame arrived and decoded.
    fn status(&mut self, _status: &Value) {}
}

impl ProbeObserver for () {}

/// Connects to `config.url` and performs the scripted exchange.
///
/// The socket is closed gracefully after a successful exchange and simply
/// dropped on failure.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the connection cannot be opened or any step
/// of [`exchange`] fails.
pub async fn run_probe<O>(config: &ProbeConfig, observer: &mut O) -> Result<ProbeReport, ProbeError>
where
    O: ProbeObserver + ?Sized,
{
    let (mut socket, handshake) = connect_async(config.url.as_str())
        .await
        .map_err(|err| ProbeError::connect(&config.url, err))?;
    tracing::info!(url = %config.url, status = %handshake.status(), "websocket connected");
    observer.connected(&config.url);

    let report = exchange(&mut socket, &config.outbound, observer).await?;

    if let Err(err) = socket.close(None).await {
        tracing::warn!(error = %err, "failed to close websocket cleanly");
    }
    Ok(report)
}

/// Sends `outbound` as one text frame, then reads the status frame and the
/// response frame, in that order.
///
/// Ping, pong and raw frames are skipped while waiting. Text and binary
/// frames are both decoded as JSON.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the message cannot be sent, the connection
/// drops or closes before both frames arrive, or either frame is not JSON.
pub async fn exchange<S, O>(
    socket: &mut S,
    outbound: &OutboundMessage,
    observer: &mut O,
) -> Result<ProbeReport, ProbeError>
where
    S: Sink<Message, Error = tungstenite::Error>
        + Stream<Item = Result<Message, tungstenite::Error>>
        + Unpin,
    O: ProbeObserver + ?Sized,
{
    let payload = outbound.to_json()?;
    observer.sending(outbound);
    socket
        .send(Message::text(payload))
        .await
        .map_err(|err| ProbeError::Send(Box::new(err)))?;
    tracing::debug!(session_id = %outbound.session_id, "outbound message sent");

    let status = next_json(socket, STATUS_FRAME).await?;
    observer.status(&status);

    let response = next_json(socket, RESPONSE_FRAME).await?;

    Ok(ProbeReport { status, response })
}

/// Waits for the next data frame and decodes it.
async fn next_json<S>(socket: &mut S, frame: &'static str) -> Result<Value, ProbeError>
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(msg) = socket.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                return Err(ProbeError::Closed { frame });
            }
            Err(err) => return Err(ProbeError::receive(frame, err)),
        };

        match msg {
            Message::Text(text) => {
                tracing::debug!(frame, len = text.len(), "text frame received");
                return messages::decode(frame, text.as_str().as_bytes());
            }
            Message::Binary(bytes) => {
                tracing::debug!(frame, len = bytes.len(), "binary frame received");
                return messages::decode(frame, &bytes);
            }
            Message::Close(close) => {
                tracing::debug!(frame, ?close, "close frame received");
                return Err(ProbeError::Closed { frame });
            }
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
        }
    }

    Err(ProbeError::Closed { frame })
}
