//! Name-keyed, insertion-ordered collection of contact records.

use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact with an upcoming birthday, as reported by
/// [`AddressBook::upcoming_birthdays`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: ContactName,

    /// The concrete date the birthday falls on
    pub date: NaiveDate,
}

/// The full collection of contact records, keyed by name.
///
/// Iteration order is stable and equal to insertion order. The upcoming
/// query's tie-break depends on this, and the standard `HashMap` gives no
/// ordering guarantee, so the book is backed by a `Vec` with key scans.
/// Lookups are linear; an address book is small and every operation stays
/// proportional to its size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// If a record with the same name exists it is replaced in place,
    /// keeping its original insertion position. The normal flow checks
    /// absence first via [`find`](Self::find).
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(position) => self.records[position] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|position| &self.records[position])
    }

    /// Find a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name)
            .map(|position| &mut self.records[position])
    }

    /// Delete the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists; the
    /// book is left unchanged.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let position = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.records.remove(position);
        Ok(())
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `days` days of `today`,
    /// boundary inclusive.
    ///
    /// The reported date is the birthday's actual next occurrence
    /// (`today + offset`). Results are sorted ascending by that date; the
    /// sort is stable, so contacts sharing a date keep their insertion
    /// order. An empty result is a valid outcome.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = Vec::new();
        for record in &self.records {
            let Some(offset) = record.next_birthday_offset(today) else {
                continue;
            };
            if (0..=days).contains(&offset) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().clone(),
                    date: today + Duration::days(offset),
                });
            }
        }
        upcoming.sort_by_key(|entry| entry.date);
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
