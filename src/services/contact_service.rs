//! Contact service layer.
//!
//! Business logic for the contact operations the shell exposes. Each
//! method validates its raw string inputs by constructing domain values,
//! enforces the absence/uniqueness preconditions against the book, then
//! mutates. Failures come back as typed [`BookError`] values; nothing here
//! prints or formats output.

use crate::book::{AddressBook, UpcomingBirthday};
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// One row of the "list all" view: a contact's data flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    /// The contact's name
    pub name: String,

    /// Phone numbers in insertion order
    pub phones: Vec<String>,

    /// The birthday formatted as `DD.MM.YYYY`, if set
    pub birthday: Option<String>,
}

/// The operation surface consumed by the command shell.
///
/// Owns the address book for the process lifetime. Single-owner and
/// synchronous; callers must serialize access.
#[derive(Debug)]
pub struct ContactService {
    book: AddressBook,
    upcoming_days: i64,
}

impl ContactService {
    /// Create a service around an empty book.
    ///
    /// `upcoming_days` is the window for [`upcoming_birthdays`]
    /// (inclusive, in days).
    ///
    /// [`upcoming_birthdays`]: Self::upcoming_birthdays
    pub fn new(upcoming_days: u64) -> Self {
        Self {
            book: AddressBook::new(),
            upcoming_days: upcoming_days as i64,
        }
    }

    /// Read access to the underlying book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Add a contact, or another phone number to an existing contact.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name or phone format is invalid
    /// - `DuplicatePhone` if the contact already holds this exact number
    pub fn add_contact(&mut self, name: &str, phone_number: &str) -> BookResult<()> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone_number)?;

        if let Some(record) = self.book.find_mut(name.as_str()) {
            if record.find_phone(phone.as_str()).is_some() {
                return Err(BookError::DuplicatePhone {
                    name: name.into_inner(),
                    phone: phone.into_inner(),
                });
            }
            record.add_phone(phone);
            debug!(name = %record.name(), "Phone added to existing contact");
            return Ok(());
        }

        let mut record = ContactRecord::new(name);
        record.add_phone(phone);
        debug!(name = %record.name(), "Contact created");
        self.book.add_record(record);
        Ok(())
    }

    /// Replace the contact's primary (first) phone number, or set it if
    /// the record holds none.
    ///
    /// # Errors
    ///
    /// - `Validation` if the new phone format is invalid
    /// - `ContactNotFound` if no such contact exists
    pub fn change_contact(&mut self, name: &str, new_phone_number: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(new_phone_number)?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        let current = record.phones().first().map(|p| p.as_str().to_string());
        match current {
            Some(current) => record.edit_phone(&current, phone)?,
            None => record.add_phone(phone),
        }
        debug!(name, "Primary phone changed");
        Ok(())
    }

    /// Set a contact's birthday. One-shot; a second call fails.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name or date format is invalid
    /// - `ContactNotFound` if no such contact exists
    /// - `BirthdayAlreadySet` if a birthday is already present
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        let name = ContactName::new(name)?;
        let birthday = Birthday::parse(birthday)?;

        let record = self
            .book
            .find_mut(name.as_str())
            .ok_or_else(|| BookError::ContactNotFound(name.into_inner()))?;

        record.set_birthday(birthday)?;
        debug!(name = %record.name(), %birthday, "Birthday set");
        Ok(())
    }

    /// A contact's birthday formatted as `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name format is invalid
    /// - `ContactNotFound` if no such contact exists
    /// - `BirthdayNotSet` if the contact has no birthday
    pub fn get_birthday(&self, name: &str) -> BookResult<String> {
        let name = ContactName::new(name)?;

        let record = self
            .book
            .find(name.as_str())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        record
            .birthday()
            .map(|birthday| birthday.to_string())
            .ok_or(BookError::BirthdayNotSet(name.into_inner()))
    }

    /// Contacts with birthdays inside the configured window, counted from
    /// the system clock's current date.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Same query against an explicit `today`, for deterministic callers.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.book.upcoming_birthdays(today, self.upcoming_days)
    }

    /// A contact's phone numbers in insertion order. An empty list is a
    /// valid result for a contact without phones.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no such contact exists.
    pub fn get_phones(&self, name: &str) -> BookResult<Vec<String>> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        Ok(record
            .phones()
            .iter()
            .map(|phone| phone.as_str().to_string())
            .collect())
    }

    /// Every contact as a flattened summary row, in insertion order.
    pub fn list_all(&self) -> Vec<ContactSummary> {
        self.book
            .iter()
            .map(|record| ContactSummary {
                name: record.name().to_string(),
                phones: record
                    .phones()
                    .iter()
                    .map(|phone| phone.as_str().to_string())
                    .collect(),
                birthday: record.birthday().map(|birthday| birthday.to_string()),
            })
            .collect()
    }

    /// Remove a contact entirely.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if no such contact exists.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<()> {
        self.book.delete(name)?;
        debug!(name, "Contact deleted");
        Ok(())
    }
}
