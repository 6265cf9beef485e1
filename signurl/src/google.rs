//! Google Cloud Storage signed URLs with convenience APIs.

pub use signurl_google::*;

#[cfg(feature = "default-context")]
use signurl_core::Signer;

/// Signer loading the HMAC key from `ACCESS_KEY`/`SECRET_KEY` or
/// `GOOGLE_HMAC_KEY_FILE`, producing virtual hosted urls on `googleapis.com`.
#[cfg(feature = "default-context")]
pub fn default_signer() -> Signer<RequestSigner> {
    signer_with(RequestSigner::new())
}

/// Like [`default_signer`] but with a custom [`RequestSigner`].
#[cfg(feature = "default-context")]
pub fn signer_with(builder: RequestSigner) -> Signer<RequestSigner> {
    let ctx = crate::default_context();
    let config = Config::from_env(&ctx);
    Signer::new(ctx, DefaultCredentialProvider::new(config), builder)
}
