use serde::Deserialize;
use signurl_core::utils::Redact;
use signurl_core::{Error, Result, SigningCredential};
use std::fmt::{self, Debug};
use zeroize::Zeroizing;

/// Credential is an HMAC key: a public access id plus its secret.
///
/// The secret is kept in a buffer that is wiped on drop and is never
/// printed by `Debug`.
#[derive(Clone)]
pub struct Credential {
    /// Access id of the HMAC key, e.g. `GOOG1EXAMPLE...`. Public, it ends up in the signed URL.
    pub access_key: String,
    secret_key: Zeroizing<Vec<u8>>,
}

impl Credential {
    /// Create a new credential from an access key and its secret.
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<[u8]>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: Zeroizing::new(secret_key.as_ref().to_vec()),
        }
    }

    /// The raw secret key bytes.
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// Parse a credential from HMAC key JSON.
    ///
    /// Two layouts are accepted:
    ///
    /// - the resource returned when creating an HMAC key:
    ///   `{"metadata": {"accessId": "...", "state": "ACTIVE"}, "secret": "..."}`
    /// - a flat file: `{"access_key": "...", "secret_key": "..."}`
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        let file: CredentialFile = serde_json::from_slice(content)
            .map_err(|e| Error::config_invalid("failed to parse hmac key file").with_source(e))?;

        let cred = match file {
            CredentialFile::HmacKey { metadata, secret } => {
                if let Some(state) = metadata.state.as_deref() {
                    if state != "ACTIVE" {
                        return Err(Error::config_invalid(format!(
                            "hmac key {} is {state}, only ACTIVE keys can sign",
                            metadata.access_id
                        )));
                    }
                }
                Credential::new(metadata.access_id, secret)
            }
            CredentialFile::Flat {
                access_key,
                secret_key,
            } => Credential::new(access_key, secret_key),
        };

        if !cred.is_valid() {
            return Err(Error::missing_credentials(
                "hmac key file has an empty access key or secret",
            ));
        }
        Ok(cred)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &self.access_key)
            .field("secret_key", &Redact::from(self.secret_key.as_slice()))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CredentialFile {
    HmacKey {
        metadata: HmacKeyMetadata,
        secret: String,
    },
    Flat {
        access_key: String,
        secret_key: String,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HmacKeyMetadata {
    access_id: String,
    #[serde(default)]
    state: Option<String>,
}
