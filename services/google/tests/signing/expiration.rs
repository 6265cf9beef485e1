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
use signurl_core::ErrorKind;
use signurl_google::{expiration_from_secs, RequestSigner};
use test_case::test_case;

fn sign_with_expiration(secs: i64) -> signurl_core::Result<String> {
    let expires_in = expiration_from_secs(secs)?;
    let req = SigningRequest::new(
        "GET",
        "us-east1",
        "example-bucket",
        "path/to/object.txt",
        expires_in,
    );
    RequestSigner::new()
        .sign(&req, &credential(), &frozen_timestamp())
        .map(|v| v.into_string())
}

#[test_case(1 ; "one second")]
#[test_case(600 ; "ten minutes")]
#[test_case(3600 ; "one hour")]
#[test_case(86400 ; "one day")]
#[test_case(604800 ; "seven days")]
fn test_valid_expiration(secs: i64) {
    let url = sign_with_expiration(secs).expect("signing must succeed");
    assert!(url.contains(&format!("&X-Goog-Expires={secs}&")));
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
#[test_case(-604800 ; "negative week")]
#[test_case(604801 ; "seven days and a second")]
#[test_case(31536000 ; "one year")]
fn test_invalid_expiration(secs: i64) {
    let err = sign_with_expiration(secs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpiration);
    assert!(err.is_input_error());
}

