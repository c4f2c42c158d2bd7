//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
///
/// All variants are recoverable conditions: the shell renders the message
/// and the interactive loop continues. Nothing here terminates the process.
#[derive(Error, Debug)]
pub enum BookError {
    /// A raw input string failed format validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced contact does not exist
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// Referenced phone number is absent from the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// The record already holds this exact phone number
    #[error("Contact {name} already has phone number {phone}")]
    DuplicatePhone { name: String, phone: String },

    /// The record's birthday was set before and cannot change
    #[error("Birthday for {0} is already set")]
    BirthdayAlreadySet(String),

    /// The record has no birthday to report
    #[error("Birthday for {0} is not set")]
    BirthdayNotSet(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
