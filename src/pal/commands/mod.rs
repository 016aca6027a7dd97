//! # Command Layer
//!
//! Business operations over the in-memory [`AddressBook`](crate::book::AddressBook)
//! and [`NoteBook`](crate::notebook::NoteBook). Each command takes plain Rust
//! values, mutates or queries a collection, and returns a [`CmdResult`]: the
//! records or notes to show plus leveled messages. Commands never print and
//! never persist; the API layer decides when to flush.
//!
//! Contact lookups by name are case-insensitive here, since names come from
//! a human at a prompt. The exact-key operations stay available on the book.

use crate::error::Result;
use crate::model::{Note, Record};

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod notes;
pub mod phones;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub listed_notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }
}

/// Input for creating a contact. Optional fields that are `None` stay absent.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_record(self) -> Result<Record> {
        let mut record = Record::new(self.name)?;
        if let Some(phone) = &self.phone {
            record.add_phone(phone)?;
        }
        if let Some(email) = &self.email {
            record.add_email(email)?;
        }
        if let Some(address) = &self.address {
            record.add_address(address);
        }
        if let Some(birthday) = &self.birthday {
            record.add_birthday(birthday)?;
        }
        Ok(record)
    }
}

/// Changes to an existing contact. `None` keeps the current value.
///
/// A new phone replaces the contact's first phone, or becomes its only phone
/// when it has none.
#[derive(Debug, Clone, Default)]
pub struct ContactEdit {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl ContactEdit {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.birthday.is_none()
    }
}

/// Splits a comma separated tag list, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
