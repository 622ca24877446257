use crate::error::CoreError;
use std::fmt;

pub const MAX_PHONE_DIGITS: usize = 12;

/// Digits of a phone number, formatting stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Keeps the digits of `raw` in order, stopping after [`MAX_PHONE_DIGITS`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let digits: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_PHONE_DIGITS)
            .collect();

        if digits.is_empty() {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
