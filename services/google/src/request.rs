use signurl_core::{Error, Result};
use std::time::Duration;

use crate::constants::MAX_EXPIRATION_SECS;

/// SigningRequest describes the object access a signed URL should grant.
///
/// Query parameters and headers keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    method: String,
    region: String,
    bucket: String,
    object_path: String,
    expires_in: Duration,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl SigningRequest {
    /// Create a new request for `method` on `bucket/object_path` in `region`.
    ///
    /// The method is used verbatim in the canonical request, pass it the way
    /// the client will send it (usually uppercase).
    pub fn new(
        method: impl Into<String>,
        region: impl Into<String>,
        bucket: impl Into<String>,
        object_path: impl Into<String>,
        expires_in: Duration,
    ) -> Self {
        Self {
            method: method.into(),
            region: region.into(),
            bucket: bucket.into(),
            object_path: object_path.into(),
            expires_in,
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Add a query parameter that will be signed and carried by the URL.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header the client must send along with the signed URL.
    ///
    /// `host` is always signed and can't be set here.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Region the signature is scoped to, e.g. `us-east1` or `auto`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object name, unescaped.
    pub fn object_path(&self) -> &str {
        &self.object_path
    }

    /// Requested lifetime of the URL.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Extra query parameters in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Validated expiration in whole seconds.
    pub fn expiration_secs(&self) -> Result<u64> {
        if self.expires_in.subsec_nanos() != 0 {
            return Err(Error::invalid_expiration(format!(
                "expiration must be a whole number of seconds, got {:?}",
                self.expires_in
            )));
        }
        check_expiration(self.expires_in.as_secs())
    }
}

/// Turn an integer number of seconds into an expiration, rejecting values
/// outside `1..=604800`.
///
/// Signed input so command line values like `-5` are reported as an
/// expiration problem rather than a parse failure.
pub fn expiration_from_secs(secs: i64) -> Result<Duration> {
    let secs = u64::try_from(secs).map_err(|_| {
        Error::invalid_expiration(format!(
            "expiration must be at least 1 second, got {secs}"
        ))
    })?;
    check_expiration(secs).map(Duration::from_secs)
}

fn check_expiration(secs: u64) -> Result<u64> {
    if secs == 0 {
        return Err(Error::invalid_expiration(
            "expiration must be at least 1 second, got 0",
        ));
    }
    if secs > MAX_EXPIRATION_SECS {
        return Err(Error::invalid_expiration(format!(
            "expiration time can't be longer than {MAX_EXPIRATION_SECS} seconds (7 days), got {secs}"
        )));
    }
    Ok(secs)
}
