//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored contact.
///
/// A record owns its phone list and birthday exclusively; mutation goes
/// through the methods below. The fields are private so two invariants
/// survive any call sequence: phone slots only ever hold validated
/// numbers, and a birthday, once set, never changes.
///
/// Format validation happens earlier, when the domain values are
/// constructed. The record itself only enforces presence and one-shot
/// conditions; phone uniqueness is checked by the caller via
/// [`find_phone`](Self::find_phone) before [`add_phone`](Self::add_phone).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name; the record's key in the address book.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// The caller is expected to have confirmed the number is absent from
    /// this record; inserting a duplicate is a caller-level error.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Find a phone by exact string match, first found.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Replace the value of the phone matching `old`, keeping its slot.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: PhoneNumber) -> BookResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        slot.set(new);
        Ok(())
    }

    /// Remove the phone matching `number`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the number is absent.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Set the birthday. One-shot: there is no edit or clear operation.
    ///
    /// # Errors
    ///
    /// Returns `BookError::BirthdayAlreadySet` if a birthday is present;
    /// the original date is retained.
    pub fn set_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days from `today` until the next occurrence of the birthday, or
    /// `None` if no birthday is set.
    pub fn next_birthday_offset(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_until_next(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(ContactName::new(name).unwrap())
    }

    fn phone(number: &str) -> PhoneNumber {
        PhoneNumber::new(number).unwrap()
    }

    #[test]
    fn test_record_new_is_empty() {
        let record = record("Alice");
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_and_find_phone() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));
        record.add_phone(phone("0501234567"));

        assert_eq!(record.phones().len(), 2);
        assert!(record.find_phone("+1234567").is_some());
        assert!(record.find_phone("0501234567").is_some());
        assert!(record.find_phone("+7654321").is_none());
    }

    #[test]
    fn test_phones_keep_insertion_order() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));
        record.add_phone(phone("0501234567"));
        record.add_phone(phone("+7654321"));

        let numbers: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(numbers, vec!["+1234567", "0501234567", "+7654321"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));
        record.add_phone(phone("0501234567"));

        record.edit_phone("+1234567", phone("+7654321")).unwrap();

        let numbers: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(numbers, vec!["+7654321", "0501234567"]);
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));

        let err = record.edit_phone("+9999999", phone("+7654321")).unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));
        record.remove_phone("+1234567").unwrap();
        assert!(record.phones().is_empty());

        let err = record.remove_phone("+1234567").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_set_birthday_is_one_shot() {
        let mut record = record("Alice");
        let first = Birthday::parse("24.08.1991").unwrap();
        record.set_birthday(first).unwrap();

        let err = record
            .set_birthday(Birthday::parse("01.01.2000").unwrap())
            .unwrap_err();
        assert!(matches!(err, BookError::BirthdayAlreadySet(_)));
        // Original date retained
        assert_eq!(record.birthday(), Some(&first));
    }

    #[test]
    fn test_next_birthday_offset_none_without_birthday() {
        let record = record("Alice");
        let today = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert_eq!(record.next_birthday_offset(today), None);
    }

    #[test]
    fn test_next_birthday_offset_delegates_to_birthday() {
        let mut record = record("Alice");
        record
            .set_birthday(Birthday::parse("29.02.2000").unwrap())
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        // Next Feb 29 exists in 2024
        assert_eq!(record.next_birthday_offset(today), Some(365));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = record("Alice");
        record.add_phone(phone("+1234567"));
        record
            .set_birthday(Birthday::parse("24.08.1991").unwrap())
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
