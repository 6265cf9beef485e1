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

use super::*;
use pretty_assertions::assert_eq;
use signurl_core::Result;
use signurl_google::{credential_scope, RequestSigner, UrlStyle};

#[test]
fn test_reference_scenario() -> Result<()> {
    let ts = frozen_timestamp();
    let signed = RequestSigner::new().sign(&reference_request(), &credential(), &ts)?;

    let (host, path, pairs) = parse_url(signed.as_str());
    assert_eq!(host, "example-bucket.storage.googleapis.com");
    assert_eq!(path, "/path/to/object.txt");

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "X-Goog-Algorithm",
            "X-Goog-Credential",
            "X-Goog-Date",
            "X-Goog-Expires",
            "X-Goog-SignedHeaders",
            "X-Goog-Signature",
        ]
    );

    let query = query_map(&pairs);
    assert_eq!(query["X-Goog-Algorithm"], "GOOG4-HMAC-SHA256");
    assert_eq!(
        query["X-Goog-Credential"],
        "GOOGACCESSKEY/20240115/us-east1/storage/goog4_request"
    );
    assert_eq!(query["X-Goog-Date"], "20240115T120000Z");
    assert_eq!(query["X-Goog-Expires"], "600");
    assert_eq!(query["X-Goog-SignedHeaders"], "host");
    assert_eq!(
        query["X-Goog-Signature"],
        "24fcc3c1895a9218085d1cce3584864836d5f859492d06d49f4609e77ed1446e"
    );
    assert_eq!(
        query["X-Goog-Signature"],
        reference_signature(
            "GET",
            "example-bucket.storage.googleapis.com",
            "/path/to/object.txt",
            "us-east1",
            600,
            &ts
        )
    );
    Ok(())
}

#[test]
fn test_credential_is_not_encoded_in_url() -> Result<()> {
    let signed = RequestSigner::new().sign(&reference_request(), &credential(), &frozen_timestamp())?;
    assert!(signed
        .as_str()
        .contains("&X-Goog-Credential=GOOGACCESSKEY/20240115/us-east1/storage/goog4_request&"));
    assert!(!signed.as_str().contains("%2F"));
    Ok(())
}

#[test]
fn test_special_characters_in_object_name() -> Result<()> {
    let ts = frozen_timestamp();
    let req = SigningRequest::new(
        "PUT",
        "us-east1",
        "example-bucket",
        "my folder/ä #1~x.txt",
        Duration::from_secs(3600),
    );
    let signed = RequestSigner::new().sign(&req, &credential(), &ts)?;

    assert!(signed.as_str().starts_with(
        "https://example-bucket.storage.googleapis.com/my%20folder/%C3%A4%20%231~x.txt?"
    ));
    assert_eq!(
        signed.signature(),
        "580873ac368a60636f5a557800ab18b4db1fb095f2e72dd37f1a8370f1441d1f"
    );
    assert_eq!(
        signed.signature(),
        reference_signature(
            "PUT",
            "example-bucket.storage.googleapis.com",
            "/my%20folder/%C3%A4%20%231~x.txt",
            "us-east1",
            3600,
            &ts
        )
    );
    Ok(())
}

#[test]
fn test_signing_is_deterministic() -> Result<()> {
    let signer = RequestSigner::new();
    let ts = frozen_timestamp();

    let first = signer.sign(&reference_request(), &credential(), &ts)?;
    let second = signer.sign(&reference_request(), &credential(), &ts)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_scope_round_trip() -> Result<()> {
    for (rfc3339, region) in [
        ("2024-01-15T12:00:00Z", "us-east1"),
        ("2023-12-31T23:59:59Z", "europe-west4"),
        ("2024-02-29T00:00:00+09:00", "asia-northeast1"),
    ] {
        let ts = TimestampContext::parse_rfc3339(rfc3339)?;
        let req = SigningRequest::new("GET", region, "bucket", "object", Duration::from_secs(60));
        let signed = RequestSigner::new().sign(&req, &credential(), &ts)?;

        let (_, _, pairs) = parse_url(signed.as_str());
        let query = query_map(&pairs);
        let scope = query["X-Goog-Credential"]
            .strip_prefix("GOOGACCESSKEY/")
            .expect("credential must start with the access key");

        assert_eq!(scope, credential_scope(ts.date_stamp(), region));
        assert_eq!(
            scope,
            format!("{}/{region}/storage/goog4_request", ts.date_stamp())
        );
    }
    Ok(())
}

#[test]
fn test_path_style_url() -> Result<()> {
    let ts = frozen_timestamp();
    let signed = RequestSigner::new()
        .with_url_style(UrlStyle::PathStyle)
        .sign(&reference_request(), &credential(), &ts)?;

    let (host, path, _) = parse_url(signed.as_str());
    assert_eq!(host, "storage.googleapis.com");
    assert_eq!(path, "/example-bucket/path/to/object.txt");
    assert_eq!(
        signed.signature(),
        reference_signature(
            "GET",
            "storage.googleapis.com",
            "/example-bucket/path/to/object.txt",
            "us-east1",
            600,
            &ts
        )
    );
    Ok(())
}

#[test]
fn test_query_and_headers_are_signed() -> Result<()> {
    let ts = frozen_timestamp();
    let base = RequestSigner::new().sign(&reference_request(), &credential(), &ts)?;

    let req = reference_request()
        .with_query("response-content-disposition", "attachment; filename=\"a b.txt\"")
        .with_header("x-goog-meta-owner", "alice");
    let signed = RequestSigner::new().sign(&req, &credential(), &ts)?;
    assert_ne!(base.signature(), signed.signature());

    let (_, _, pairs) = parse_url(signed.as_str());
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys[5], "response-content-disposition");
    assert_eq!(keys[6], "X-Goog-Signature");

    let query = query_map(&pairs);
    assert_eq!(
        query["response-content-disposition"],
        "attachment; filename=\"a b.txt\""
    );
    assert_eq!(query["X-Goog-SignedHeaders"], "host;x-goog-meta-owner");
    Ok(())
}
