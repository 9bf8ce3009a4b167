/// Base URL of the Pub/Sub REST surface (overridden when an emulator host is
/// configured).
pub const PUBSUB_BASE_URL: &str = "https://pubsub.googleapis.com/v1";

/// OAuth scope requested for access tokens minted from a credentials file.
pub const PUBSUB_OAUTH_SCOPE: &str = "https://www.googleapis.com/auth/pubsub";

/// Audience bound into self-signed service-account JWTs. Fixed per service;
/// the subscriber API only accepts tokens minted for this audience.
pub const PUBSUB_SUBSCRIBER_AUDIENCE: &str =
    "https://pubsub.googleapis.com/google.pubsub.v1.Subscriber";

/// Environment variable naming a service-account credentials file on disk.
pub const CREDENTIALS_FILE_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Environment variable holding an inline JSON service-account key.
pub const CREDENTIALS_JSON_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS_JSON";

/// Environment variable pointing at a local Pub/Sub emulator (`host:port`).
pub const EMULATOR_HOST_ENV: &str = "PUBSUB_EMULATOR_HOST";

/// Default cumulative retry budget for one pull/acknowledge call, in seconds.
pub const DEFAULT_DEADLINE_SECONDS: u64 = 300;

/// Default batch bound for one pull call.
pub const DEFAULT_MAX_MESSAGES: i32 = 1;

/// Lifetime of self-signed service-account JWTs, in seconds.
pub const SELF_SIGNED_JWT_LIFETIME_SECONDS: i64 = 3600;
