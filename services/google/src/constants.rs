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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signing scheme constants. These are part of the wire format and must match byte for byte.
pub const GOOG4_HMAC_SHA256: &str = "GOOG4-HMAC-SHA256";
pub const GOOG4_REQUEST: &str = "goog4_request";
pub const GOOG4_KEY_PREFIX: &str = "GOOG4";
pub const STORAGE_SERVICE: &str = "storage";
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

// Query parameters carried by a signed URL.
pub const X_GOOG_ALGORITHM: &str = "X-Goog-Algorithm";
pub const X_GOOG_CREDENTIAL: &str = "X-Goog-Credential";
pub const X_GOOG_DATE: &str = "X-Goog-Date";
pub const X_GOOG_EXPIRES: &str = "X-Goog-Expires";
pub const X_GOOG_SIGNED_HEADERS: &str = "X-Goog-SignedHeaders";
pub const X_GOOG_SIGNATURE: &str = "X-Goog-Signature";

/// Default provider domain, hosts look like `{bucket}.storage.googleapis.com`.
pub const DEFAULT_DOMAIN: &str = "googleapis.com";

/// Longest lifetime a signed URL may have: 7 days.
pub const MAX_EXPIRATION_SECS: u64 = 604800;

// Env values used to load HMAC keys.
pub const ACCESS_KEY: &str = "ACCESS_KEY";
pub const SECRET_KEY: &str = "SECRET_KEY";
pub const GOOGLE_HMAC_KEY_FILE: &str = "GOOGLE_HMAC_KEY_FILE";

/// AsciiSet for [Google UriEncode](https://cloud.google.com/storage/docs/authentication/canonical-requests)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `/` is kept so object names keep their path segments.
pub static GOOG_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [Google UriEncode](https://cloud.google.com/storage/docs/authentication/canonical-requests)
///
/// But used in query, so `/` is encoded too.
pub static GOOG_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
