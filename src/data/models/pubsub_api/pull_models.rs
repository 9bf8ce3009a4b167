use serde::{Deserialize, Serialize};

use super::received_message_model::ReceivedMessageModel;

/// Request body for `projects.subscriptions:pull`.
///
/// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions/pull
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequestModel {
    pub(crate) max_messages: i32,
}

/// Response body for `projects.subscriptions:pull`. The service omits
/// `receivedMessages` entirely when nothing is available.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullResponseModel {
    #[serde(default)]
    pub(crate) received_messages: Vec<ReceivedMessageModel>,
}

/// Request body for `projects.subscriptions:acknowledge`.
///
/// https://cloud.google.com/pubsub/docs/reference/rest/v1/projects.subscriptions/acknowledge
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AcknowledgeRequestModel<'a> {
    pub(crate) ack_ids: &'a [String],
}
