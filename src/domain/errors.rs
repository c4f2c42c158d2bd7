//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each message carries a hint of the expected shape so the shell can
/// surface it to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or not purely alphabetic.
    InvalidName(String),

    /// The provided phone number does not match an accepted shape.
    InvalidPhone(String),

    /// The provided birthday string is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name format: {}. Name should contain only alphabetic characters",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number format: {}. It should start with '+' followed by 7-15 digits or '0' followed by 6-14 digits",
                phone
            ),
            Self::InvalidBirthday(birthday) => {
                write!(f, "Invalid birthday format: {}. Use DD.MM.YYYY", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
