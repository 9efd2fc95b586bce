//! WebSocket wire frames.
//!
//! Every frame is a JSON object tagged by `type` with the variant data under
//! `payload`:
//!
//! ```text
//! { "type": "chat", "payload": { "message": "hi", "sender": "Alice" } }
//! ```
//!
//! The same shape travels in both directions. Frames with a `type` this
//! server does not know are decoded as [`DecodedFrame::Unsupported`] so that
//! callers can skip them without treating them as errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CHAT_TYPE: &str = "chat";

/// Outbound frame, one variant per message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum WireMessage {
    Chat(ChatPayload),
}

impl WireMessage {
    /// Encode into the JSON text sent over the socket
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    /// Ignored on inbound frames; the server stamps the authenticated name
    #[serde(default)]
    pub sender: String,
}

/// Result of decoding an inbound frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedFrame {
    Chat(ChatPayload),
    /// Well-formed frame of a type this side does not handle
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid '{kind}' payload: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

/// Decode one text frame.
pub fn decode_frame(text: &str) -> Result<DecodedFrame, DecodeError> {
    let raw: RawFrame = serde_json::from_str(text)?;
    if raw.kind != CHAT_TYPE {
        return Ok(DecodedFrame::Unsupported(raw.kind));
    }

    let payload = serde_json::from_value::<ChatPayload>(raw.payload).map_err(|source| {
        DecodeError::InvalidPayload {
            kind: raw.kind.clone(),
            source,
        }
    })?;
    Ok(DecodedFrame::Chat(payload))
}
