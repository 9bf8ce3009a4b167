use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Data structure returned by the Pub/Sub REST API for one received message.
///
/// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions/pull#ReceivedMessage
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceivedMessageModel {
    /// Acknowledgement token for this delivery attempt.
    pub(crate) ack_id: String,
    pub(crate) message: PubsubMessageModel,
    /// Delivery attempt counter. Only populated when the subscription has a
    /// dead-letter policy attached.
    pub(crate) delivery_attempt: Option<i32>,
}

/// https://cloud.google.com/pubsub/docs/reference/rest/v1/PubsubMessage
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PubsubMessageModel {
    /// Main payload. Base64-encoded; may be absent for attribute-only
    /// messages.
    #[serde(default)]
    pub(crate) data: String,
    #[serde(default)]
    pub(crate) attributes: HashMap<String, String>,
    pub(crate) message_id: String,
    /// Absent unless the publisher set one.
    #[serde(default)]
    pub(crate) ordering_key: String,
    /// RFC 3339 timestamp with up to nanosecond precision.
    pub(crate) publish_time: DateTime<Utc>,
}
