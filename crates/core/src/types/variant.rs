//! Variant label type (a selectable product option such as a flavor).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`VariantLabel`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantLabelError {
    /// The input is empty or whitespace only.
    #[error("variant label cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("variant label must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A non-empty variant label, e.g. `"Uva"` or `"Arándanos"`.
///
/// Surrounding whitespace is trimmed; comparison is exact after trimming.
///
/// ```
/// use girlsshop_core::VariantLabel;
///
/// let label = VariantLabel::parse("  Uva ").unwrap();
/// assert_eq!(label.as_str(), "Uva");
/// assert!(VariantLabel::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantLabel(String);

impl VariantLabel {
    /// Maximum length of a label, in characters.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `VariantLabel` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, VariantLabelError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VariantLabelError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(VariantLabelError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for VariantLabel {
    type Err = VariantLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VariantLabel {
    type Error = VariantLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VariantLabel> for String {
    fn from(label: VariantLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for VariantLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_accents() {
        let label = VariantLabel::parse("Arándanos").unwrap();
        assert_eq!(label.to_string(), "Arándanos");
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(VariantLabel::MAX_LENGTH + 1);
        assert_eq!(
            VariantLabel::parse(&long),
            Err(VariantLabelError::TooLong {
                max: VariantLabel::MAX_LENGTH
            })
        );
        assert!(VariantLabel::parse(&"ñ".repeat(VariantLabel::MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let label: VariantLabel = serde_json::from_str("\" Cereza \"").unwrap();
        assert_eq!(label.as_str(), "Cereza");
        assert!(serde_json::from_str::<VariantLabel>("\"\"").is_err());
    }
}
