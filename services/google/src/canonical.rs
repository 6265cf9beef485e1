use http::header::{HeaderName, HeaderValue};
use http::uri::Authority;
use http::Method;
use log::debug;
use percent_encoding::utf8_percent_encode;
use signurl_core::hash::hex_sha256;
use signurl_core::time::TimestampContext;
use signurl_core::{Error, Result};
use std::fmt::{self, Display};

use crate::constants::*;
use crate::request::SigningRequest;
use crate::UrlStyle;

/// CanonicalRequest is the byte exact form of a request that gets hashed and signed.
///
/// Query pairs and headers are stored already encoded and sorted, so
/// rendering it is plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    host: String,
    uri: String,
    expires: u64,
    credential_scope: String,
    signed_headers: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    extra_query: Vec<(String, String)>,
}

impl CanonicalRequest {
    /// Build the canonical request for `req` signed by `access_key` at `timestamp`.
    ///
    /// Expiration is validated before anything else.
    pub fn build(
        req: &SigningRequest,
        access_key: &str,
        timestamp: &TimestampContext,
        url_style: UrlStyle,
        domain: &str,
    ) -> Result<Self> {
        let expires = req.expiration_secs()?;

        Method::from_bytes(req.method().as_bytes()).map_err(|e| {
            Error::request_invalid(format!("invalid http method: {:?}", req.method()))
                .with_source(e)
        })?;
        if req.bucket().is_empty() {
            return Err(Error::request_invalid("bucket name must not be empty"));
        }
        if req.region().is_empty() {
            return Err(Error::request_invalid("region must not be empty"));
        }

        let escaped_object = encode_object_path(req.object_path());
        let (host, uri) = match url_style {
            UrlStyle::VirtualHostedStyle => (
                format!("{}.{STORAGE_SERVICE}.{domain}", req.bucket()),
                format!("/{escaped_object}"),
            ),
            UrlStyle::PathStyle => (
                format!("{STORAGE_SERVICE}.{domain}"),
                format!(
                    "/{}/{escaped_object}",
                    utf8_percent_encode(req.bucket(), &GOOG_QUERY_ENCODE_SET)
                ),
            ),
        };
        Authority::try_from(host.as_str()).map_err(|e| {
            Error::request_invalid(format!("bucket and domain don't form a valid host: {host}"))
                .with_source(e)
        })?;

        let credential_scope = credential_scope(timestamp.date_stamp(), req.region());
        debug!("calculated scope: {credential_scope}");

        let headers = canonicalize_headers(&host, req.headers())?;
        let signed_headers = headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        let extra_query = canonicalize_extra_query(req.query())?;
        let query = canonicalize_query(
            access_key,
            &credential_scope,
            timestamp,
            expires,
            &signed_headers,
            &extra_query,
        );

        Ok(Self {
            method: req.method().to_string(),
            host,
            uri,
            expires,
            credential_scope,
            signed_headers,
            query,
            headers,
            extra_query,
        })
    }

    /// Host the URL points at.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Escaped path, always starting with `/`.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Validated expiration in seconds.
    pub fn expires(&self) -> u64 {
        self.expires
    }

    /// `{date}/{region}/storage/goog4_request`
    pub fn credential_scope(&self) -> &str {
        &self.credential_scope
    }

    /// Sorted header names joined by `;`.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Caller query parameters, encoded, in caller order.
    pub fn extra_query(&self) -> &[(String, String)] {
        &self.extra_query
    }

    /// The canonical query string: every signed parameter, encoded and sorted.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Lowercase hex SHA-256 of the canonical request.
    pub fn hashed(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query_string())?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        f.write_str(UNSIGNED_PAYLOAD)
    }
}

/// Scope a signature to one day, region and the storage service.
pub fn credential_scope(date_stamp: &str, region: &str) -> String {
    format!("{date_stamp}/{region}/{STORAGE_SERVICE}/{GOOG4_REQUEST}")
}

/// Percent-encode an object name, keeping unreserved characters and `/`.
pub fn encode_object_path(path: &str) -> String {
    utf8_percent_encode(path, &GOOG_URI_ENCODE_SET).to_string()
}

fn canonicalize_headers(host: &str, extra: &[(String, String)]) -> Result<Vec<(String, String)>> {
    let mut headers: Vec<(String, String)> = vec![("host".to_string(), host.to_string())];

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| {
            Error::encoding(format!("header name {name:?} is not a valid token")).with_source(e)
        })?;
        if name == http::header::HOST {
            return Err(Error::request_invalid(
                "host header is derived from the bucket and can't be overridden",
            ));
        }
        HeaderValue::from_str(value).map_err(|e| {
            Error::encoding(format!("header {name} has a value that can't be encoded"))
                .with_source(e)
        })?;
        let value = normalize_header_value(value);

        match headers.iter_mut().find(|(k, _)| k == name.as_str()) {
            Some((_, existing)) => {
                existing.push(',');
                existing.push_str(&value);
            }
            None => headers.push((name.as_str().to_string(), value)),
        }
    }

    headers.sort();
    Ok(headers)
}

/// Trim the value and fold every run of whitespace into one space.
fn normalize_header_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value.split([' ', '\t']).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn canonicalize_extra_query(query: &[(String, String)]) -> Result<Vec<(String, String)>> {
    const RESERVED: [&str; 6] = [
        X_GOOG_ALGORITHM,
        X_GOOG_CREDENTIAL,
        X_GOOG_DATE,
        X_GOOG_EXPIRES,
        X_GOOG_SIGNED_HEADERS,
        X_GOOG_SIGNATURE,
    ];

    let mut out = Vec::with_capacity(query.len());
    for (k, v) in query {
        if RESERVED.iter().any(|r| r.eq_ignore_ascii_case(k)) {
            return Err(Error::request_invalid(format!(
                "query parameter {k} is set by the signer"
            )));
        }
        out.push((
            utf8_percent_encode(k, &GOOG_QUERY_ENCODE_SET).to_string(),
            utf8_percent_encode(v, &GOOG_QUERY_ENCODE_SET).to_string(),
        ));
    }
    Ok(out)
}

fn canonicalize_query(
    access_key: &str,
    credential_scope: &str,
    timestamp: &TimestampContext,
    expires: u64,
    signed_headers: &str,
    extra_query: &[(String, String)],
) -> Vec<(String, String)> {
    let signed: [(&str, String); 5] = [
        (X_GOOG_ALGORITHM, GOOG4_HMAC_SHA256.to_string()),
        (X_GOOG_CREDENTIAL, format!("{access_key}/{credential_scope}")),
        (X_GOOG_DATE, timestamp.request_timestamp().to_string()),
        (X_GOOG_EXPIRES, expires.to_string()),
        (X_GOOG_SIGNED_HEADERS, signed_headers.to_string()),
    ];

    let mut query: Vec<(String, String)> = signed
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &GOOG_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &GOOG_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();

    query.extend(extra_query.iter().cloned());
    query.sort();
    query
}
