//! Contact Book - An in-memory address book with birthday tracking.
//!
//! This library stores contacts with validated names, phone numbers, and
//! birthdays, and answers "who has a birthday in the next N days" queries
//! with correct calendar-rollover semantics, including February 29
//! birthdays in non-leap years.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: The contact record aggregate
//! - **book**: The insertion-ordered record collection and birthday query
//! - **services**: The operation surface consumed by the shell
//! - **shell**: Interactive command loop, dispatch, and colored rendering
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::ContactRecord;
pub use services::{ContactService, ContactSummary};
