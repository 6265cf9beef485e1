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
use signurl_core::{ProvideCredential, Result};
use signurl_google::{Config, DefaultCredentialProvider};

fn env_credentials() -> HashMap<String, String> {
    HashMap::from([
        ("ACCESS_KEY".to_string(), "GOOG1ENVACCESSKEY".to_string()),
        ("SECRET_KEY".to_string(), "env-secret".to_string()),
    ])
}

#[tokio::test]
async fn test_default_provider_prefers_env_over_file() -> Result<()> {
    let f = write_key_file(HMAC_KEY_RESOURCE);
    let mut envs = env_credentials();
    envs.insert(
        "GOOGLE_HMAC_KEY_FILE".to_string(),
        f.path().to_string_lossy().to_string(),
    );
    let ctx = create_test_context_with_env(envs);

    let cred = DefaultCredentialProvider::new(Config::from_env(&ctx).with_disable_env())
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.access_key, "GOOG1ENVACCESSKEY");

    let cred = DefaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.access_key, "GOOG1ENVACCESSKEY");
    Ok(())
}

#[tokio::test]
async fn test_default_provider_falls_back_to_key_file() -> Result<()> {
    let f = write_key_file(HMAC_KEY_RESOURCE);
    let ctx = create_test_context_with_env(HashMap::from([(
        "GOOGLE_HMAC_KEY_FILE".to_string(),
        f.path().to_string_lossy().to_string(),
    )]));

    let cred = DefaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.access_key, "GOOG1FILEACCESSKEY");
    Ok(())
}

#[tokio::test]
async fn test_default_provider_skips_broken_file() -> Result<()> {
    let broken = write_key_file("{");
    let good = write_key_file(HMAC_KEY_RESOURCE);
    let ctx = create_test_context_with_env(HashMap::from([(
        "GOOGLE_HMAC_KEY_FILE".to_string(),
        good.path().to_string_lossy().to_string(),
    )]));

    let cred = DefaultCredentialProvider::new(
        Config::new().with_credential_path(broken.path().to_string_lossy()),
    )
    .provide_credential(&ctx)
    .await?
    .expect("credential must be loaded");
    assert_eq!(cred.access_key, "GOOG1FILEACCESSKEY");
    Ok(())
}

#[tokio::test]
async fn test_default_provider_nothing_configured() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::new());
    let cred = DefaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await?;
    assert!(cred.is_none());
    Ok(())
}
