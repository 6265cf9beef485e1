// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

mod expiration;
mod signed_url;

use signurl_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use signurl_core::time::TimestampContext;
use signurl_google::{Credential, SigningRequest};
use std::collections::HashMap;
use std::time::Duration;

pub const ACCESS_KEY: &str = "GOOGACCESSKEY";
pub const SECRET_KEY: &str = "s3cr3t";

pub fn frozen_timestamp() -> TimestampContext {
    let _ = env_logger::builder().is_test(true).try_init();

    TimestampContext::parse_rfc3339("2024-01-15T12:00:00Z").expect("timestamp must be valid")
}

pub fn credential() -> Credential {
    Credential::new(ACCESS_KEY, SECRET_KEY)
}

pub fn reference_request() -> SigningRequest {
    SigningRequest::new(
        "GET",
        "us-east1",
        "example-bucket",
        "path/to/object.txt",
        Duration::from_secs(600),
    )
}

/// Split a signed url into host, path and the decoded query pairs.
pub fn parse_url(url: &str) -> (String, String, Vec<(String, String)>) {
    let rest = url
        .strip_prefix("https://")
        .expect("signed url must use https");
    let (authority, path_and_query) = rest.split_at(rest.find('/').expect("url must have a path"));
    let (path, query) = path_and_query
        .split_once('?')
        .expect("url must have a query");
    let pairs = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    (authority.to_string(), path.to_string(), pairs)
}

pub fn query_map(pairs: &[(String, String)]) -> HashMap<String, String> {
    pairs.iter().cloned().collect()
}

/// Recompute a default (host only) signature step by step from the raw inputs.
pub fn reference_signature(
    method: &str,
    host: &str,
    canonical_uri: &str,
    region: &str,
    expires: u64,
    ts: &TimestampContext,
) -> String {
    let scope = format!("{}/{region}/storage/goog4_request", ts.date_stamp());
    let credential = format!("{ACCESS_KEY}/{scope}").replace('/', "%2F");
    let creq = format!(
        "{method}\n{canonical_uri}\n\
         X-Goog-Algorithm=GOOG4-HMAC-SHA256\
         &X-Goog-Credential={credential}\
         &X-Goog-Date={}\
         &X-Goog-Expires={expires}\
         &X-Goog-SignedHeaders=host\n\
         host:{host}\n\nhost\nUNSIGNED-PAYLOAD",
        ts.request_timestamp()
    );
    let string_to_sign = format!(
        "GOOG4-HMAC-SHA256\n{}\n{scope}\n{}",
        ts.request_timestamp(),
        hex_sha256(creq.as_bytes())
    );

    let k_date = hmac_sha256(
        format!("GOOG4{SECRET_KEY}").as_bytes(),
        ts.date_stamp().as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, b"storage");
    let k_signing = hmac_sha256(&k_service, b"goog4_request");
    hex_hmac_sha256(&k_signing, string_to_sign.as_bytes())
}
