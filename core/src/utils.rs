//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a value by replacing all but the first and last three characters with asterisks.
///
/// - If the input has fewer than 12 bytes, it should be entirely redacted.
/// - If the input has 12 or more bytes, only the first three and the last three.
///
/// This design is to allow users to distinguish between different redacted strings but avoid
/// leaking sensitive information.
pub struct Redact<'a>(&'a [u8]);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(b""),
            Some(v) => Redact(v.as_bytes()),
        }
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact(value)
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&String::from_utf8_lossy(&self.0[..3]))?;
            f.write_str("***")?;
            f.write_str(&String::from_utf8_lossy(&self.0[length - 3..]))
        }
    }
}
