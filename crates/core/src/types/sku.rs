//! Item identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Sku`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SkuError {
    /// The input string is empty.
    #[error("sku cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("sku must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("sku cannot contain whitespace")]
    Whitespace,
}

/// A stock-keeping unit identifying a cart line-item.
///
/// Two cart entries are the same line-item exactly when their SKUs are
/// equal, so the cart collection keys uniqueness on this type.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - No whitespace
///
/// ## Examples
///
/// ```
/// use driftwood_core::Sku;
///
/// assert!(Sku::parse("HAT-001").is_ok());
/// assert!(Sku::parse("").is_err());
/// assert!(Sku::parse("HAT 001").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Maximum length of a SKU.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Sku` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters,
    /// or contains whitespace.
    pub fn parse(s: &str) -> Result<Self, SkuError> {
        if s.is_empty() {
            return Err(SkuError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SkuError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(SkuError::Whitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Sku` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Sku {
    type Err = SkuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_skus() {
        assert!(Sku::parse("HAT-001").is_ok());
        assert!(Sku::parse("sneaker/blue/42").is_ok());
        assert!(Sku::parse("1").is_ok());
        assert!(Sku::parse(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Sku::parse(""), Err(SkuError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Sku::parse(&"a".repeat(65)),
            Err(SkuError::TooLong { max: 64 })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        assert!(matches!(Sku::parse("HAT 001"), Err(SkuError::Whitespace)));
        assert!(matches!(Sku::parse("HAT\t001"), Err(SkuError::Whitespace)));
    }

    #[test]
    fn test_display() {
        let sku = Sku::parse("HAT-001").unwrap();
        assert_eq!(format!("{sku}"), "HAT-001");
    }

    #[test]
    fn test_from_str() {
        let sku: Sku = "HAT-001".parse().unwrap();
        assert_eq!(sku.as_str(), "HAT-001");
    }

    #[test]
    fn test_serde_roundtrip() {
        let sku = Sku::parse("HAT-001").unwrap();
        let json = serde_json::to_string(&sku).unwrap();
        assert_eq!(json, "\"HAT-001\"");

        let parsed: Sku = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sku);
    }
}
