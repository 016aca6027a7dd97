//! # Storage Layer
//!
//! The [`DataStore`] trait is how the application loads its collections at
//! startup and flushes them at shutdown. Nothing else touches persistence:
//! during a session the address book and note book live in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in the data directory
//!   - Contacts in `contacts.json`, notes in `notes.json` (names configurable)
//!   - Each file is an array of kind-tagged [`crate::model::Entry`] values
//!   - Writes go to a temp file that is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: keeps the last saved collections in memory,
//!   for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json      # PalConfig
//! ├── contacts.json    # [{"kind": "contact", ...}, ...]
//! └── notes.json       # [{"kind": "note", ...}, ...]
//! ```

use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::NoteBook;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the address book. A store with no saved contacts yields an empty book.
    fn load_contacts(&self) -> Result<AddressBook>;

    /// Replace the saved contacts with `book`.
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the note book. A store with no saved notes yields an empty book.
    fn load_notes(&self) -> Result<NoteBook>;

    /// Replace the saved notes with `notes`.
    fn save_notes(&mut self, notes: &NoteBook) -> Result<()>;
}
