use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::received_message::ReceivedMessage;

/// Normalized view of one received message, as handed to route handlers:
/// decoded content plus delivery metadata. Derived and stateless; it has no
/// lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMessage {
    /// Parsed JSON payload, or `None` when the payload did not decode as
    /// UTF-8 text or did not parse as JSON.
    pub content: Option<serde_json::Value>,
    /// Always fully populated, regardless of how content decoding went, so
    /// operators can trace and re-drive malformed messages.
    pub metadata: MessageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageMetadata {
    pub ack_id: String,
    pub attributes: HashMap<String, String>,
    pub ordering_key: String,
    pub message_id: String,
    pub publish_time: DateTime<Utc>,
}

impl MessageMetadata {
    pub fn from_received(message: &ReceivedMessage) -> Self {
        Self {
            ack_id: message.ack_id.clone(),
            attributes: message.attributes.clone(),
            ordering_key: message.ordering_key.clone(),
            message_id: message.message_id.clone(),
            publish_time: message.publish_time,
        }
    }
}
