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
use signurl_core::{ErrorKind, ProvideCredential, Result};
use signurl_google::FileCredentialProvider;

#[tokio::test]
async fn test_file_provider_reads_hmac_key_resource() -> Result<()> {
    let f = write_key_file(HMAC_KEY_RESOURCE);
    let ctx = create_test_context_with_env(HashMap::new());

    let cred = FileCredentialProvider::new()
        .with_path(f.path().to_string_lossy())
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.access_key, "GOOG1FILEACCESSKEY");
    assert_eq!(cred.secret_key(), b"file-secret");
    Ok(())
}

#[tokio::test]
async fn test_file_provider_without_path() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::new());
    let cred = FileCredentialProvider::new().provide_credential(&ctx).await?;
    assert!(cred.is_none());
    Ok(())
}

#[tokio::test]
async fn test_file_provider_rejects_inactive_key() {
    let f = write_key_file(&HMAC_KEY_RESOURCE.replace("ACTIVE", "INACTIVE"));
    let ctx = create_test_context_with_env(HashMap::from([(
        "GOOGLE_HMAC_KEY_FILE".to_string(),
        f.path().to_string_lossy().to_string(),
    )]));

    let err = FileCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
