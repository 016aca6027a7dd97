//! # Address Book
//!
//! A name-keyed collection of [`Record`]s that remembers insertion order.
//!
//! Keys are exact, case-sensitive names: [`AddressBook::add_record`],
//! [`AddressBook::find_record`] and [`AddressBook::remove_record`] never fold
//! case. Interactive lookups usually want "olga" to find "Olga", so the book
//! also offers `*_ignore_case` variants. Those pick the first record, in
//! insertion order, whose name matches ignoring case.
//!
//! Replacing a record under an existing name keeps its position in the
//! iteration order.

use crate::error::{PalError, Result};
use crate::model::{Entry, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Adds a persisted entry, which must be a contact.
    pub fn add_entry(&mut self, entry: Entry) -> Result<Option<Record>> {
        match entry {
            Entry::Contact(record) => Ok(self.add_record(record)),
            other => Err(PalError::TypeMismatch {
                expected: Entry::CONTACT,
                found: other.kind(),
            }),
        }
    }

    pub fn remove_record(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| PalError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(pos))
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_record_ignore_case(&self, name: &str) -> Option<&Record> {
        let pos = self.position_ignore_case(name)?;
        Some(&self.records[pos])
    }

    pub fn find_record_ignore_case_mut(&mut self, name: &str) -> Option<&mut Record> {
        let pos = self.position_ignore_case(name)?;
        Some(&mut self.records[pos])
    }

    pub fn remove_record_ignore_case(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .position_ignore_case(name)
            .ok_or_else(|| PalError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    fn position_ignore_case(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .position(|r| r.name().to_lowercase() == needle)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
