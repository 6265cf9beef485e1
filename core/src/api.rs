use crate::time::TimestampContext;
use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Returning `Ok(None)` means this provider has nothing to offer, so a chain
/// can move on to the next one.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to turn a request into its signed form.
///
/// Signing is a pure computation: everything it depends on, including the
/// instant the signature is scoped to, is passed in.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;
    /// The request to sign.
    type Request: Send + Sync;
    /// The signed result.
    type Output;

    /// Sign the request.
    ///
    /// ## Credential
    ///
    /// Implementations must fail when `credential` is `None` instead of
    /// producing an unsigned output.
    fn sign_request(
        &self,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
        timestamp: &TimestampContext,
    ) -> Result<Self::Output>;
}
