use crate::domain::entities::normalized_message::NormalizedMessage;
use crate::domain::providers::subscription_provider::SubscriptionProvider;
use crate::domain::translators::subscription_message_translator::{
    MessageTranslator, SubscriptionMessageTranslator,
};
use crate::errors::ProviderError;

/// Route handler. The return value decides acknowledgement: `true` confirms
/// the message back to the queue, `false` leaves it for redelivery.
pub type Handler = Box<dyn Fn(&NormalizedMessage) -> bool + Send + Sync>;

/// Binds one provider, one translator, and one handler into a named routing
/// unit the host framework can register. Thin composition only; the provider
/// and translator do the actual work.
pub struct SubscriptionRoute<P, T = SubscriptionMessageTranslator> {
    name: String,
    provider: P,
    message_translator: T,
    handler: Handler,
}

impl<P: SubscriptionProvider> SubscriptionRoute<P, SubscriptionMessageTranslator> {
    pub fn new(
        project_id: &str,
        subscription_id: &str,
        provider: P,
        handler: impl Fn(&NormalizedMessage) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::with_translator(
            project_id,
            subscription_id,
            provider,
            SubscriptionMessageTranslator::new(),
            handler,
        )
    }
}

impl<P: SubscriptionProvider, T: MessageTranslator> SubscriptionRoute<P, T> {
    pub fn with_translator(
        project_id: &str,
        subscription_id: &str,
        provider: P,
        message_translator: T,
        handler: impl Fn(&NormalizedMessage) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: format!("{project_id}/{subscription_id}"),
            provider,
            message_translator,
            handler: Box::new(handler),
        }
    }

    /// Route name, `{project_id}/{subscription_id}`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn message_translator(&self) -> &T {
        &self.message_translator
    }

    /// Invokes the handler for one translated message.
    pub fn handle(&self, message: &NormalizedMessage) -> bool {
        (self.handler)(message)
    }

    /// One fetch → translate → handle → confirm cycle, for hosts that want a
    /// ready-made loop body. Returns how many messages were confirmed.
    pub async fn process_once(&self) -> Result<usize, ProviderError> {
        let messages = self.provider.fetch_messages().await?;
        let mut confirmed = 0;
        for raw in &messages {
            let normalized = self.message_translator.translate(raw);
            if (self.handler)(&normalized) {
                self.provider.confirm_message(raw).await?;
                confirmed += 1;
            }
        }
        Ok(confirmed)
    }

    /// Tears down the provider. Idempotent.
    pub fn stop(&self) {
        self.provider.stop();
    }
}
