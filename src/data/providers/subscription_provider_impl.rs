use async_trait::async_trait;

use crate::config::AdapterConfig;
use crate::data::channels::subscriber_channel::SubscriberChannel;
use crate::data::datasources::pubsub_transport_datasource::{
    PubsubTransportDatasource, PubsubTransportDatasourceImpl,
};
use crate::domain::entities::received_message::ReceivedMessage;
use crate::domain::entities::subscription_path::SubscriptionPath;
use crate::domain::providers::subscription_provider::{SubscriptionOptions, SubscriptionProvider};
use crate::errors::{ConfigError, ProviderError};

/// Provider over one subscriber channel. Applies the route's fixed options to
/// every call and owns the adapter's single error-translation boundary:
/// deadline exhaustion becomes [`ProviderError::DeadlineExceeded`]; every
/// other transport failure passes through unmodified. No retry here: the
/// transport already spent its budget, so a failure at this layer is terminal
/// for the call.
pub struct SubscriptionProviderImpl<D: PubsubTransportDatasource> {
    channel: SubscriberChannel<D>,
    options: SubscriptionOptions,
}

impl SubscriptionProviderImpl<PubsubTransportDatasourceImpl> {
    /// Resolves credentials and builds the REST transport for one
    /// subscription. Credential problems fail here, at startup.
    pub async fn new(
        config: &AdapterConfig,
        project_id: &str,
        subscription_id: &str,
        options: SubscriptionOptions,
    ) -> Result<Self, ConfigError> {
        let transport = PubsubTransportDatasourceImpl::new(config).await?;
        Ok(Self::with_transport(
            transport,
            SubscriptionPath::new(project_id, subscription_id),
            options,
        ))
    }
}

impl<D: PubsubTransportDatasource> SubscriptionProviderImpl<D> {
    /// Wires an arbitrary transport behind the provider; the seam embedders
    /// and tests use.
    pub fn with_transport(
        transport: D,
        subscription_path: SubscriptionPath,
        options: SubscriptionOptions,
    ) -> Self {
        Self {
            channel: SubscriberChannel::new(transport, subscription_path),
            options,
        }
    }

    pub fn subscription_path(&self) -> &SubscriptionPath {
        self.channel.subscription_path()
    }
}

#[async_trait]
impl<D: PubsubTransportDatasource> SubscriptionProvider for SubscriptionProviderImpl<D> {
    async fn fetch_messages(&self) -> Result<Vec<ReceivedMessage>, ProviderError> {
        self.channel
            .pull(self.options.deadline, self.options.max_messages)
            .await
            .map_err(ProviderError::from)
    }

    async fn confirm_message(&self, message: &ReceivedMessage) -> Result<(), ProviderError> {
        let ack_ids = [message.ack_id.clone()];
        self.channel
            .acknowledge(self.options.deadline, &ack_ids)
            .await
            .map_err(ProviderError::from)
    }

    fn stop(&self) {
        self.channel.close();
    }
}
