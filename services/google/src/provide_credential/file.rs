use async_trait::async_trait;
use log::debug;
use signurl_core::{Context, ProvideCredential, Result};

use crate::constants::GOOGLE_HMAC_KEY_FILE;
use crate::credential::Credential;

/// FileCredentialProvider loads an HMAC key from a JSON file.
///
/// The path is taken from the provider itself, or from `GOOGLE_HMAC_KEY_FILE`
/// unless env loading is disabled. `~` is expanded to the home dir.
#[derive(Debug, Clone, Default)]
pub struct FileCredentialProvider {
    path: Option<String>,
    disable_env: bool,
}

impl FileCredentialProvider {
    /// Create a provider that only looks at `GOOGLE_HMAC_KEY_FILE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the key from `path` instead of the env.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Never consult `GOOGLE_HMAC_KEY_FILE`.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    fn resolve_path(&self, ctx: &Context) -> Option<String> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        if self.disable_env {
            return None;
        }
        ctx.env_var(GOOGLE_HMAC_KEY_FILE)
            .filter(|v| !v.is_empty())
    }
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(path) = self.resolve_path(ctx) else {
            return Ok(None);
        };
        let Some(path) = ctx.expand_home_dir(&path) else {
            debug!("home dir not found, skip loading hmac key from {path}");
            return Ok(None);
        };

        let content = ctx.file_read(&path).await.map_err(|err| {
            debug!("load hmac key from path {path} failed: {err:?}");
            err
        })?;
        let cred = Credential::from_slice(&content).map_err(|err| {
            debug!("parse hmac key from path {path} failed: {err:?}");
            err
        })?;

        debug!("loaded hmac key {} from {path}", cred.access_key);
        Ok(Some(cred))
    }
}
