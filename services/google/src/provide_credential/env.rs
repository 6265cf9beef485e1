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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use signurl_core::{Context, Error, ProvideCredential, Result};

/// EnvCredentialProvider loads an HMAC key from environment variables.
///
/// This provider looks for the following environment variables:
/// - `ACCESS_KEY`: access id of the HMAC key
/// - `SECRET_KEY`: secret of the HMAC key
///
/// Returns `None` when neither is set. Setting only one of them, or setting
/// one to an empty string, is reported as missing credentials.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key = ctx.env_var(ACCESS_KEY).filter(|v| !v.is_empty());
        let secret_key = ctx.env_var(SECRET_KEY).filter(|v| !v.is_empty());

        match (access_key, secret_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::missing_credentials(format!(
                "{ACCESS_KEY} is set but {SECRET_KEY} is missing or empty"
            ))),
            (None, Some(_)) => Err(Error::missing_credentials(format!(
                "{SECRET_KEY} is set but {ACCESS_KEY} is missing or empty"
            ))),
        }
    }
}
