use thiserror::Error;

/// Credential material is missing or malformed at startup. Fatal for the
/// affected route; never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("service account key is not valid JSON: {0}")]
    MalformedServiceAccountKey(#[source] std::io::Error),

    #[error("credentials file could not be read: {0}")]
    CredentialsFileUnreadable(#[source] std::io::Error),

    #[error("authenticator could not be built: {0}")]
    AuthenticatorBuild(#[source] std::io::Error),

    #[error("access token could not be obtained: {0}")]
    TokenExchange(String),

    #[error("service account JWT could not be signed: {0}")]
    JwtSigning(#[source] jsonwebtoken::errors::Error),
}

/// Failures raised by the Pub/Sub transport. The transport's own retry budget
/// absorbs transient instances; whatever escapes is handed to the provider
/// layer, which is the only translation boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-success HTTP status from the service, e.g. "504 Deadline Exceeded".
    #[error("{status} {message}")]
    Status { status: u16, message: String },

    #[error("request failed to send: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("message payload is not valid base64: {0}")]
    MalformedPayload(#[source] base64::DecodeError),

    /// The owning channel was closed; the client is gone for good.
    #[error("subscriber channel is closed")]
    ChannelClosed,
}

impl TransportError {
    /// Whether this error is a deadline/timeout exhaustion. These are the only
    /// transport failures the provider layer rewords; everything else passes
    /// through untouched.
    pub fn is_deadline_exceeded(&self) -> bool {
        match self {
            TransportError::Status { status, .. } => *status == 504,
            TransportError::Request(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// The single error type the host framework needs to understand from this
/// adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The transport's retry budget ran out. Carries the transport's status
    /// text (e.g. "504 Deadline Exceeded").
    #[error("{0}")]
    DeadlineExceeded(String),

    /// Any other transport failure, passed through unmodified.
    #[error(transparent)]
    Transport(TransportError),
}

impl From<TransportError> for ProviderError {
    fn from(e: TransportError) -> Self {
        if e.is_deadline_exceeded() {
            ProviderError::DeadlineExceeded(e.to_string())
        } else {
            ProviderError::Transport(e)
        }
    }
}

/// Why a message payload could not be turned into structured content. Never
/// propagated: translation logs the failure and delivers the message with
/// empty content.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[source] std::str::Utf8Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
}
