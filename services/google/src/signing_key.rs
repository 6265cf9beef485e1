use signurl_core::hash::{hex_hmac_sha256, hmac_sha256};
use signurl_core::utils::Redact;
use std::fmt::{self, Debug};
use zeroize::Zeroizing;

use crate::constants::{GOOG4_KEY_PREFIX, GOOG4_REQUEST, STORAGE_SERVICE};

/// SigningKey is the HMAC key derived from a secret for one day and region.
///
/// It is only ever held in memory for a single signing operation.
#[derive(Clone)]
pub struct SigningKey(Zeroizing<Vec<u8>>);

impl SigningKey {
    /// Derive the key through the chain `date -> region -> storage -> goog4_request`,
    /// starting from `GOOG4{secret}`.
    pub fn derive(secret: &[u8], date_stamp: &str, region: &str) -> Self {
        let mut seed = Zeroizing::new(Vec::with_capacity(GOOG4_KEY_PREFIX.len() + secret.len()));
        seed.extend_from_slice(GOOG4_KEY_PREFIX.as_bytes());
        seed.extend_from_slice(secret);

        let sign_date = hmac_sha256(&seed, date_stamp.as_bytes());
        let sign_region = hmac_sha256(&sign_date, region.as_bytes());
        let sign_service = hmac_sha256(&sign_region, STORAGE_SERVICE.as_bytes());
        let sign_request = hmac_sha256(&sign_service, GOOG4_REQUEST.as_bytes());

        Self(sign_request)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex HMAC-SHA256 of `content` under this key.
    pub fn sign(&self, content: &str) -> String {
        hex_hmac_sha256(&self.0, content.as_bytes())
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey")
            .field(&Redact::from(self.0.as_slice()))
            .finish()
    }
}
