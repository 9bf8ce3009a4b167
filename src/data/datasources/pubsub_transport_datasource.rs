use std::time::{Duration, Instant};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::AUTHORIZATION;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::AdapterConfig;
use crate::constants::PUBSUB_BASE_URL;
use crate::data::datasources::credentials_datasource::ResolvedCredentials;
use crate::data::datasources::utils::{is_retryable_status, status_error};
use crate::data::models::pubsub_api::pull_models::{
    AcknowledgeRequestModel, PullRequestModel, PullResponseModel,
};
use crate::domain::entities::received_message::ReceivedMessage;
use crate::domain::entities::subscription_path::SubscriptionPath;
use crate::errors::{ConfigError, TransportError};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const INITIAL_BACKOFF: Duration = Duration::from_millis(100);
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// The queue transport, as the rest of the crate sees it: unary pull and
/// acknowledge against one subscription, each with a cumulative retry budget.
/// Transient failures are retried inside that budget; whatever escapes is the
/// caller's problem.
#[async_trait]
pub trait PubsubTransportDatasource: Send + Sync {
    /// subscription:
    ///   The subscription to pull from.
    /// max_messages:
    ///   Upper bound on returned messages; the service may return fewer.
    /// retry_deadline:
    ///   Cumulative wall-clock budget for this call, including retries.
    async fn pull(
        &self,
        subscription: &SubscriptionPath,
        max_messages: i32,
        retry_deadline: Duration,
    ) -> Result<Vec<ReceivedMessage>, TransportError>;

    /// Acknowledges the given delivery attempts. The service answers OK for
    /// expired or already-acknowledged ids; that is not surfaced as an error.
    async fn acknowledge(
        &self,
        subscription: &SubscriptionPath,
        ack_ids: &[String],
        retry_deadline: Duration,
    ) -> Result<(), TransportError>;
}

/// REST implementation over `pubsub.googleapis.com` (or an emulator).
pub struct PubsubTransportDatasourceImpl {
    http: reqwest::Client,
    base_url: String,
    authorization: Option<String>,
}

#[async_trait]
impl PubsubTransportDatasource for PubsubTransportDatasourceImpl {
    async fn pull(
        &self,
        subscription: &SubscriptionPath,
        max_messages: i32,
        retry_deadline: Duration,
    ) -> Result<Vec<ReceivedMessage>, TransportError> {
        let url = format!("{}/{}:pull", self.base_url, subscription.as_str());
        let response: PullResponseModel = self
            .callout(&url, &PullRequestModel { max_messages }, retry_deadline)
            .await?;
        response
            .received_messages
            .into_iter()
            .map(ReceivedMessage::from_model)
            .collect()
    }

    async fn acknowledge(
        &self,
        subscription: &SubscriptionPath,
        ack_ids: &[String],
        retry_deadline: Duration,
    ) -> Result<(), TransportError> {
        let url = format!("{}/{}:acknowledge", self.base_url, subscription.as_str());
        let _: serde_json::Value = self
            .callout(&url, &AcknowledgeRequestModel { ack_ids }, retry_deadline)
            .await?;
        Ok(())
    }
}

impl PubsubTransportDatasourceImpl {
    /// Resolves credentials and builds the client. The only network I/O here
    /// is the token exchange the credentials-file strategy requires.
    pub async fn new(config: &AdapterConfig) -> Result<Self, ConfigError> {
        // Emulator targets skip credential resolution, matching the official
        // client behavior.
        if let Some(host) = &config.emulator_host {
            return Ok(Self {
                http: HTTP_CLIENT.clone(),
                base_url: format!("http://{host}/v1"),
                authorization: None,
            });
        }
        let credentials = ResolvedCredentials::resolve(config)?;
        Ok(Self {
            http: HTTP_CLIENT.clone(),
            base_url: PUBSUB_BASE_URL.to_owned(),
            authorization: credentials.authorization().await?,
        })
    }

    async fn callout<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        retry_deadline: Duration,
    ) -> Result<T, TransportError> {
        let give_up_at = Instant::now() + retry_deadline;
        let mut backoff = INITIAL_BACKOFF;
        loop {
            let remaining = give_up_at
                .saturating_duration_since(Instant::now())
                .max(Duration::from_millis(1));
            let mut request = self.http.post(url).json(body).timeout(remaining);
            if let Some(authorization) = &self.authorization {
                request = request.header(AUTHORIZATION, authorization);
            }

            let (error, retryable) = match request.send().await {
                Ok(response) if response.status().is_success() => {
                    let bytes = response.bytes().await.map_err(TransportError::Request)?;
                    return serde_json::from_slice(&bytes)
                        .map_err(TransportError::MalformedResponse);
                }
                Ok(response) => {
                    let retryable = is_retryable_status(response.status());
                    (status_error(response).await, retryable)
                }
                // Per-attempt timeouts are bounded by the remaining budget, so
                // a timeout here is the budget running out.
                Err(e) if e.is_timeout() => (
                    TransportError::Status {
                        status: 504,
                        message: "Deadline Exceeded".to_owned(),
                    },
                    true,
                ),
                Err(e) => {
                    let retryable = e.is_connect();
                    (TransportError::Request(e), retryable)
                }
            };

            if !retryable || Instant::now() + backoff >= give_up_at {
                return Err(error);
            }
            debug!(
                error = %error,
                backoff_ms = backoff.as_millis() as u64,
                "retrying transient transport failure"
            );
            tokio::time::sleep(backoff).await;
            backoff = (backoff * 2).min(MAX_BACKOFF);
        }
    }
}
