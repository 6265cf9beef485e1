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

//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339.
///
/// All of them are valid time:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-01T08:12:34+00:00`
/// - `2022-03-01T08:12:34.00+00:00`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| {
            Error::config_invalid(format!("parse '{s}' as rfc3339 failed")).with_source(e)
        })?
        .with_timezone(&Utc))
}

/// TimestampContext is the pair of time strings a signature is scoped to.
///
/// Both fields are rendered from the same instant so the credential scope
/// and the `X-Goog-Date` parameter can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampContext {
    request_timestamp: String,
    date_stamp: String,
}

impl TimestampContext {
    /// Capture the current wall clock.
    pub fn now() -> Self {
        Self::from_datetime(now())
    }

    /// Build the context from a fixed instant.
    pub fn from_datetime(t: DateTime) -> Self {
        Self {
            request_timestamp: format_iso8601(t),
            date_stamp: format_date(t),
        }
    }

    /// Build the context from a RFC3339 string.
    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        parse_rfc3339(s).map(Self::from_datetime)
    }

    /// Request timestamp like `20240115T120000Z`.
    pub fn request_timestamp(&self) -> &str {
        &self.request_timestamp
    }

    /// Date stamp like `20240115`.
    pub fn date_stamp(&self) -> &str {
        &self.date_stamp
    }
}

impl From<DateTime> for TimestampContext {
    fn from(t: DateTime) -> Self {
        Self::from_datetime(t)
    }
}
