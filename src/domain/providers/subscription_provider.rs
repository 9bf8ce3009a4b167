use async_trait::async_trait;
use serde::Deserialize;

use crate::constants::{DEFAULT_DEADLINE_SECONDS, DEFAULT_MAX_MESSAGES};
use crate::domain::entities::received_message::ReceivedMessage;
use crate::errors::ProviderError;

/// Per-route call parameters, expanded into every pull/acknowledge issued on
/// behalf of the route.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionOptions {
    /// Cumulative retry budget per logical call, in seconds. Resets on every
    /// invocation; it is not a persistent timer.
    #[serde(default = "default_deadline")]
    pub deadline: u64,
    /// Upper bound on messages returned by one pull.
    #[serde(default = "default_max_messages")]
    pub max_messages: i32,
}

fn default_deadline() -> u64 {
    DEFAULT_DEADLINE_SECONDS
}

fn default_max_messages() -> i32 {
    DEFAULT_MAX_MESSAGES
}

impl Default for SubscriptionOptions {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE_SECONDS,
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}

/// The capability the host framework drives. One instance owns exactly one
/// subscription; instances are never shared across routes, and the host is
/// the single caller (no internal locking beyond teardown).
///
/// `fetch_messages` and `confirm_message` are the only suspension points the
/// adapter exposes; both may block on network I/O and must be awaited.
#[async_trait]
pub trait SubscriptionProvider: Send + Sync {
    /// Pulls one batch. An empty queue yields an empty vec, not an error.
    async fn fetch_messages(&self) -> Result<Vec<ReceivedMessage>, ProviderError>;

    /// Acknowledges exactly one message (single-element ack batch).
    async fn confirm_message(&self, message: &ReceivedMessage) -> Result<(), ProviderError>;

    /// Releases the underlying client. Idempotent; safe without a prior
    /// fetch, and safe while a fetch/confirm is in flight.
    fn stop(&self);
}
