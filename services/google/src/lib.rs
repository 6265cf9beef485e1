//! Google Cloud Storage signed URL generator.
//!
//! Signs object access with an HMAC key under the `GOOG4-HMAC-SHA256`
//! query-string scheme.
//!
//! ```
//! use signurl_core::time::TimestampContext;
//! use signurl_google::{Credential, RequestSigner, SigningRequest};
//! use std::time::Duration;
//!
//! # fn main() -> signurl_core::Result<()> {
//! let req = SigningRequest::new(
//!     "GET",
//!     "us-east1",
//!     "example-bucket",
//!     "path/to/object.txt",
//!     Duration::from_secs(600),
//! );
//! let cred = Credential::new("GOOGACCESSKEY", "s3cr3t");
//! let ts = TimestampContext::parse_rfc3339("2024-01-15T12:00:00Z")?;
//!
//! let url = RequestSigner::new().sign(&req, &cred, &ts)?;
//! assert!(url.as_str().starts_with("https://example-bucket.storage.googleapis.com/"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{DEFAULT_DOMAIN, MAX_EXPIRATION_SECS};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod request;
pub use request::{expiration_from_secs, SigningRequest};

mod canonical;
pub use canonical::{credential_scope, encode_object_path, CanonicalRequest};

mod signing_key;
pub use signing_key::SigningKey;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner, SignedUrl, UrlStyle};

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, FileCredentialProvider,
    StaticCredentialProvider,
};
