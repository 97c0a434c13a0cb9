//! Taxpayer identifier (CPF) model.

use std::fmt;

use serde::Serialize;

/// A checksum-validated CPF, stored as its 11 digits.
///
/// Values are only produced by
/// [`normalize_identifier`](crate::calculation::normalize_identifier), so
/// holding one proves the digits passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentifierDigits(String);

impl IdentifierDigits {
    pub(crate) fn from_validated(digits: String) -> Self {
        Self(digits)
    }

    /// Returns the bare digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the conventional `000.000.000-00` rendering.
    ///
    /// # Example
    ///
    /// ```
    /// use rateio_engine::calculation::normalize_identifier;
    ///
    /// let cpf = normalize_identifier("52998224725").unwrap();
    /// assert_eq!(cpf.formatted(), "529.982.247-25");
    /// ```
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl fmt::Display for IdentifierDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentifierDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
