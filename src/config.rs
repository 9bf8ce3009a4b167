use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::constants::{CREDENTIALS_FILE_ENV, CREDENTIALS_JSON_ENV, EMULATOR_HOST_ENV};

/// Process-level configuration for the adapter, populated once at startup and
/// passed into the constructors that need it. The core never reads the
/// environment on its own; [`AdapterConfig::from_env`] is the only place the
/// process environment is consulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    /// Path to a service-account credentials file on disk. Takes precedence
    /// over `service_account_key` when the file exists.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,

    /// Inline JSON service-account key.
    #[serde(default)]
    pub service_account_key: Option<String>,

    /// `host:port` of a local Pub/Sub emulator. When set, the transport talks
    /// plain HTTP to the emulator and skips credential resolution entirely.
    #[serde(default)]
    pub emulator_host: Option<String>,
}

impl AdapterConfig {
    /// Reads the conventional Google environment variables.
    pub fn from_env() -> Self {
        Self {
            credentials_file: env::var_os(CREDENTIALS_FILE_ENV).map(PathBuf::from),
            service_account_key: env::var(CREDENTIALS_JSON_ENV).ok(),
            emulator_host: env::var(EMULATOR_HOST_ENV).ok(),
        }
    }
}
