use async_trait::async_trait;
use signurl_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use super::{EnvCredentialProvider, FileCredentialProvider, StaticCredentialProvider};
use crate::config::Config;
use crate::credential::Credential;

/// DefaultCredentialProvider tries to load an HMAC key from multiple sources in order.
///
/// 1. `access_key` and `secret_key` from [`Config`]
/// 2. `ACCESS_KEY` and `SECRET_KEY` env vars
/// 3. the JSON file at `credential_path`, then `GOOGLE_HMAC_KEY_FILE`
///
/// Env based sources are skipped when `disable_env` is set.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        let mut chain = ProvideCredentialChain::new();

        if let (Some(ak), Some(sk)) = (&config.access_key, &config.secret_key) {
            chain = chain.push(StaticCredentialProvider::new(ak.clone(), sk.as_bytes()));
        }

        if !config.disable_env {
            chain = chain.push(EnvCredentialProvider::new());
        }

        if let Some(path) = &config.credential_path {
            chain = chain.push(FileCredentialProvider::new().with_path(path.clone()));
        }
        if !config.disable_env {
            chain = chain.push(FileCredentialProvider::new());
        }

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
