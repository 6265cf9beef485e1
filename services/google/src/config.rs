use signurl_core::utils::Redact;
use signurl_core::Context;
use std::fmt::{self, Debug};
use zeroize::Zeroizing;

use crate::constants::{ACCESS_KEY, GOOGLE_HMAC_KEY_FILE, SECRET_KEY};

/// Config carries all the configuration for loading HMAC keys.
#[derive(Clone, Default)]
pub struct Config {
    /// Access id of the HMAC key.
    pub access_key: Option<String>,
    /// Secret of the HMAC key.
    pub secret_key: Option<Zeroizing<String>>,
    /// Path to a JSON file holding the HMAC key.
    pub credential_path: Option<String>,
    /// Disable reading from environment variables.
    pub disable_env: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key)
            .field(
                "secret_key",
                &Redact::from(self.secret_key.as_deref().map_or("", String::as_str)),
            )
            .field("credential_path", &self.credential_path)
            .field("disable_env", &self.disable_env)
            .finish()
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the secret key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(Zeroizing::new(secret_key.into()));
        self
    }

    /// Set credential file path.
    pub fn with_credential_path(mut self, path: impl Into<String>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Disable reading from environment variables.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = ctx.env_var(ACCESS_KEY) {
            cfg.access_key = Some(v);
        }
        if let Some(v) = ctx.env_var(SECRET_KEY) {
            cfg.secret_key = Some(Zeroizing::new(v));
        }
        if let Some(v) = ctx.env_var(GOOGLE_HMAC_KEY_FILE) {
            cfg.credential_path = Some(v);
        }

        cfg
    }
}
