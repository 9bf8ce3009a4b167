use std::collections::HashMap;

use base64::{prelude::BASE64_STANDARD, Engine as _};
use chrono::{DateTime, Utc};

use crate::data::models::pubsub_api::received_message_model::ReceivedMessageModel;
use crate::errors::TransportError;

/// One message as delivered by the Pub/Sub transport, before translation.
/// Immutable once received; the payload stays raw bytes until the translator
/// decodes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedMessage {
    /// Opaque token identifying this delivery attempt; required to
    /// acknowledge the message. Non-empty for every pulled message.
    pub ack_id: String,
    /// Raw payload bytes (already base64-decoded from the wire form).
    pub data: Vec<u8>,
    /// Service-assigned message identifier.
    pub message_id: String,
    /// Publisher-supplied key-value attributes; empty when none were set.
    pub attributes: HashMap<String, String>,
    /// Ordering key, empty when the message was published without one.
    pub ordering_key: String,
    /// Publish timestamp, UTC, nanosecond precision preserved.
    pub publish_time: DateTime<Utc>,
    /// How many times the service has attempted delivery, when the
    /// subscription tracks it.
    pub delivery_attempt: Option<i32>,
}

impl ReceivedMessage {
    pub(crate) fn from_model(model: ReceivedMessageModel) -> Result<Self, TransportError> {
        let data = BASE64_STANDARD
            .decode(model.message.data)
            .map_err(TransportError::MalformedPayload)?;
        Ok(Self {
            ack_id: model.ack_id,
            data,
            message_id: model.message.message_id,
            attributes: model.message.attributes,
            ordering_key: model.message.ordering_key,
            publish_time: model.message.publish_time,
            delivery_attempt: model.delivery_attempt,
        })
    }
}
