use log::debug;
use signurl_core::time::TimestampContext;
use signurl_core::{Error, Result, SignRequest, SigningCredential};
use std::fmt::{self, Display, Write};

use crate::canonical::CanonicalRequest;
use crate::constants::*;
use crate::credential::Credential;
use crate::request::SigningRequest;
use crate::signing_key::SigningKey;

/// UrlStyle decides where the bucket name lives in the signed URL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UrlStyle {
    /// `https://{bucket}.storage.{domain}/{object}`
    #[default]
    VirtualHostedStyle,
    /// `https://storage.{domain}/{bucket}/{object}`
    PathStyle,
}

/// RequestSigner turns a [`SigningRequest`] into a [`SignedUrl`].
///
/// Signing is synchronous and holds no state besides the endpoint settings,
/// so one signer can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    domain: String,
    url_style: UrlStyle,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            url_style: UrlStyle::default(),
        }
    }
}

impl RequestSigner {
    /// Create a new signer for `storage.googleapis.com` with virtual hosted URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider domain, e.g. for a private endpoint.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the url style.
    pub fn with_url_style(mut self, url_style: UrlStyle) -> Self {
        self.url_style = url_style;
        self
    }

    /// Sign `req` with `cred` at `timestamp`.
    pub fn sign(
        &self,
        req: &SigningRequest,
        cred: &Credential,
        timestamp: &TimestampContext,
    ) -> Result<SignedUrl> {
        if !cred.is_valid() {
            return Err(Error::missing_credentials(
                "access key and secret key must both be set",
            ));
        }

        let creq = CanonicalRequest::build(
            req,
            &cred.access_key,
            timestamp,
            self.url_style,
            &self.domain,
        )?;
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(&creq, timestamp);
        debug!("calculated string to sign: {string_to_sign}");

        let key = SigningKey::derive(cred.secret_key(), timestamp.date_stamp(), req.region());
        let signature = key.sign(&string_to_sign);

        let url = assemble_url(&creq, &cred.access_key, timestamp, &signature)?;
        Ok(SignedUrl { url, signature })
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Request = SigningRequest;
    type Output = SignedUrl;

    fn sign_request(
        &self,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
        timestamp: &TimestampContext,
    ) -> Result<Self::Output> {
        let Some(cred) = credential else {
            return Err(Error::missing_credentials(
                "no credential available to sign the url",
            ));
        };

        self.sign(req, cred, timestamp)
    }
}

/// Build the string to sign for a canonical request.
pub fn string_to_sign(creq: &CanonicalRequest, timestamp: &TimestampContext) -> String {
    format!(
        "{GOOG4_HMAC_SHA256}\n{}\n{}\n{}",
        timestamp.request_timestamp(),
        creq.credential_scope(),
        creq.hashed()
    )
}

fn assemble_url(
    creq: &CanonicalRequest,
    access_key: &str,
    timestamp: &TimestampContext,
    signature: &str,
) -> Result<String> {
    let mut url = String::with_capacity(256);
    write!(url, "https://{}{}", creq.host(), creq.uri())?;
    write!(url, "?{X_GOOG_ALGORITHM}={GOOG4_HMAC_SHA256}")?;
    // The credential stays unencoded here although it is encoded in the canonical query.
    write!(
        url,
        "&{X_GOOG_CREDENTIAL}={access_key}/{}",
        creq.credential_scope()
    )?;
    write!(url, "&{X_GOOG_DATE}={}", timestamp.request_timestamp())?;
    write!(url, "&{X_GOOG_EXPIRES}={}", creq.expires())?;
    write!(url, "&{X_GOOG_SIGNED_HEADERS}={}", creq.signed_headers())?;
    for (k, v) in creq.extra_query() {
        write!(url, "&{k}={v}")?;
    }
    write!(url, "&{X_GOOG_SIGNATURE}={signature}")?;
    Ok(url)
}

/// SignedUrl is a self describing url granting temporary access to one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    signature: String,
}

impl SignedUrl {
    /// The full url.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Lowercase hex signature carried by `X-Goog-Signature`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Consume and return the url.
    pub fn into_string(self) -> String {
        self.url
    }
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for SignedUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
