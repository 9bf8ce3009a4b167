use tracing::error;

use crate::domain::entities::normalized_message::{MessageMetadata, NormalizedMessage};
use crate::domain::entities::received_message::ReceivedMessage;
use crate::errors::TranslationError;

/// Converts one raw received message into the normalized form handed to
/// handlers. Total: translation never fails, whatever the payload contains.
pub trait MessageTranslator: Send + Sync {
    fn translate(&self, message: &ReceivedMessage) -> NormalizedMessage;
}

/// Default translator: payload is expected to be UTF-8 JSON. Undecodable
/// payloads are delivered anyway with `content = None` so metadata survives
/// payload corruption; each failed decode emits exactly one error event
/// carrying the decode error and the full raw message, and successful
/// translations emit nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionMessageTranslator;

impl SubscriptionMessageTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Decode and parse stages, split out from logging so the failure cause
    /// is inspectable on its own. Two independent fallible stages sharing one
    /// fallback path.
    fn decode_content(data: &[u8]) -> Result<serde_json::Value, TranslationError> {
        let text = std::str::from_utf8(data).map_err(TranslationError::Utf8)?;
        serde_json::from_str(text).map_err(TranslationError::Json)
    }
}

impl MessageTranslator for SubscriptionMessageTranslator {
    fn translate(&self, message: &ReceivedMessage) -> NormalizedMessage {
        let content = match Self::decode_content(&message.data) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(error = %e, message = ?message, "failed to translate message payload");
                None
            }
        };
        NormalizedMessage {
            content,
            metadata: MessageMetadata::from_received(message),
        }
    }
}
