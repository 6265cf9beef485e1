use async_trait::async_trait;
use log::debug;
use signurl_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::credential::Credential;

/// StaticCredentialProvider hands out an HMAC key provided at construction time.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from an access key and secret.
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<[u8]>) -> Self {
        Self {
            credential: Credential::new(access_key, secret_key),
        }
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        if !self.credential.is_valid() {
            return Err(Error::missing_credentials(
                "static credential has an empty access key or secret",
            ));
        }

        debug!("loaded static credential {}", self.credential.access_key);
        Ok(Some(self.credential.clone()))
    }
}
