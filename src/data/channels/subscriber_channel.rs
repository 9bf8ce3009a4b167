use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::data::datasources::pubsub_transport_datasource::PubsubTransportDatasource;
use crate::domain::entities::received_message::ReceivedMessage;
use crate::domain::entities::subscription_path::SubscriptionPath;
use crate::errors::TransportError;

/// Owns one transport client bound to one subscription path; no other state.
/// Does not catch or translate transport failures; those pass through
/// unchanged to the provider layer, which is the translation boundary.
pub(crate) struct SubscriberChannel<D: PubsubTransportDatasource> {
    /// The lock is only ever held for the clone/take itself, never across an
    /// await. In-flight calls keep their own Arc, so closing the channel
    /// never yanks the client out from under a live request.
    transport: Mutex<Option<Arc<D>>>,
    subscription_path: SubscriptionPath,
}

impl<D: PubsubTransportDatasource> SubscriberChannel<D> {
    pub(crate) fn new(transport: D, subscription_path: SubscriptionPath) -> Self {
        Self {
            transport: Mutex::new(Some(Arc::new(transport))),
            subscription_path,
        }
    }

    pub(crate) fn subscription_path(&self) -> &SubscriptionPath {
        &self.subscription_path
    }

    /// One logical pull, bounded by `max_messages`, retried by the transport
    /// within `deadline_seconds`. An empty queue yields an empty vec.
    pub(crate) async fn pull(
        &self,
        deadline_seconds: u64,
        max_messages: i32,
    ) -> Result<Vec<ReceivedMessage>, TransportError> {
        let transport = self.transport()?;
        transport
            .pull(
                &self.subscription_path,
                max_messages,
                Duration::from_secs(deadline_seconds),
            )
            .await
    }

    /// At-least-once acknowledgement; the service treats expired or duplicate
    /// ids as a no-op and so does this adapter.
    pub(crate) async fn acknowledge(
        &self,
        deadline_seconds: u64,
        ack_ids: &[String],
    ) -> Result<(), TransportError> {
        let transport = self.transport()?;
        transport
            .acknowledge(
                &self.subscription_path,
                ack_ids,
                Duration::from_secs(deadline_seconds),
            )
            .await
    }

    /// Drops the owned client. Idempotent and safe without a prior pull;
    /// subsequent calls fail with [`TransportError::ChannelClosed`].
    pub(crate) fn close(&self) {
        self.transport
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
    }

    fn transport(&self) -> Result<Arc<D>, TransportError> {
        self.transport
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(TransportError::ChannelClosed)
    }
}
