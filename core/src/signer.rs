use crate::time::TimestampContext;
use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use log::debug;
use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads the credential through the configured provider the first time
/// it's needed, caches it while it stays valid, and hands it to the request
/// builder together with the signing timestamp.
pub struct Signer<S>
where
    S: SignRequest,
    S::Credential: SigningCredential,
{
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = S::Credential>>,
    builder: Arc<S>,
    credential: Arc<Mutex<Option<S::Credential>>>,
}

impl<S> Clone for Signer<S>
where
    S: SignRequest,
    S::Credential: SigningCredential,
{
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            loader: self.loader.clone(),
            builder: self.builder.clone(),
            credential: self.credential.clone(),
        }
    }
}

impl<S> Debug for Signer<S>
where
    S: SignRequest,
    S::Credential: SigningCredential,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("ctx", &self.ctx)
            .field("loader", &self.loader)
            .field("builder", &self.builder)
            .finish()
    }
}

impl<S> Signer<S>
where
    S: SignRequest,
    S::Credential: SigningCredential,
{
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = S::Credential>,
        builder: S,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential provider, dropping any cached credential.
    pub fn with_credential_provider(
        mut self,
        loader: impl ProvideCredential<Credential = S::Credential>,
    ) -> Self {
        self.loader = Arc::new(loader);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Sign the request at the current wall clock.
    ///
    /// The clock is read exactly once per call.
    pub async fn sign(&self, req: &S::Request) -> Result<S::Output> {
        let timestamp = TimestampContext::now();
        self.sign_at(req, &timestamp).await
    }

    /// Sign the request at the given timestamp.
    pub async fn sign_at(
        &self,
        req: &S::Request,
        timestamp: &TimestampContext,
    ) -> Result<S::Output> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            debug!("no valid cached credential, loading from provider");
            let cred = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = cred.clone();
            cred
        };

        let Some(cred) = cred.filter(|c| c.is_valid()) else {
            return Err(Error::missing_credentials(
                "no valid credential found from any provider",
            ));
        };

        self.builder.sign_request(req, Some(&cred), timestamp)
    }
}
