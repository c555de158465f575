//! Messaging recipient type (the shop's WhatsApp number).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`RecipientNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipientError {
    /// The input string is empty.
    #[error("recipient number cannot be empty")]
    Empty,
    /// The input contains something other than digits and separators.
    #[error("recipient number contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// Too few or too many digits.
    #[error("recipient number must have between {min} and {max} digits (got {got})")]
    BadLength {
        /// Minimum allowed digit count.
        min: usize,
        /// Maximum allowed digit count.
        max: usize,
        /// Digit count of the input.
        got: usize,
    },
}

/// An international phone number in the digits-only form messaging deep
/// links expect (country code first, no `+`).
///
/// ## Constraints
///
/// - A single leading `+` is accepted and dropped
/// - Spaces, dashes, dots and parentheses are accepted and dropped
/// - 8-15 digits remain (E.164 bounds)
///
/// ## Examples
///
/// ```
/// use girlsshop_core::RecipientNumber;
///
/// let number = RecipientNumber::parse("+54 297 514-7537").unwrap();
/// assert_eq!(number.as_str(), "542975147537");
///
/// assert!(RecipientNumber::parse("").is_err());
/// assert!(RecipientNumber::parse("54-abc").is_err());
/// assert!(RecipientNumber::parse("1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipientNumber(String);

impl RecipientNumber {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 8;
    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `RecipientNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Contains letters or other symbols
    /// - Has fewer than 8 or more than 15 digits
    pub fn parse(s: &str) -> Result<Self, RecipientError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RecipientError::Empty);
        }

        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                other => return Err(RecipientError::InvalidCharacter(other)),
            }
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(RecipientError::BadLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                got: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RecipientNumber {
    type Err = RecipientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecipientNumber {
    type Error = RecipientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecipientNumber> for String {
    fn from(number: RecipientNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for RecipientNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
