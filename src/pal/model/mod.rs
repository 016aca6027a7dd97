//! # Domain Model
//!
//! The value types of pal:
//!
//! - [`fields`]: validated field types ([`PhoneNumber`], [`EmailAddress`],
//!   [`BirthDate`]) and the free-text [`FreeText`].
//! - [`Record`]: a contact keyed by name.
//! - [`Note`]: free text with an insertion-ordered tag set.
//! - [`Entry`]: the persisted, kind-tagged form of either of the above.
//!
//! ## Entries and Type Mismatches
//!
//! The collections ([`crate::book::AddressBook`], [`crate::notebook::NoteBook`])
//! are typed, so in-process code cannot hand a note to the address book. Data
//! coming back from disk is a different matter: each persisted file is a list
//! of [`Entry`] values tagged with their `kind`, and a collection only accepts
//! entries of its own kind. Anything else is a [`crate::error::PalError::TypeMismatch`].
//!
//! ```text
//! [
//!   { "kind": "contact", "name": "Olga", "phones": ["0671234567"], ... },
//!   { "kind": "note", "text": "Buy milk", "tags": ["shopping"] }
//! ]
//! ```

use serde::{Deserialize, Serialize};

pub mod fields;
pub mod note;
pub mod record;

pub use fields::{BirthDate, EmailAddress, FreeText, PhoneNumber};
pub use note::Note;
pub use record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Contact(Record),
    Note(Note),
}

impl Entry {
    pub const CONTACT: &'static str = "contact";
    pub const NOTE: &'static str = "note";

    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Contact(_) => Self::CONTACT,
            Entry::Note(_) => Self::NOTE,
        }
    }
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Entry::Contact(record)
    }
}

impl From<Note> for Entry {
    fn from(note: Note) -> Self {
        Entry::Note(note)
    }
}
