use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::NoteBook;

/// In-memory storage for testing. Keeps whatever was saved last.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: NoteBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of save calls, contacts and notes counted separately.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteBook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.notes = notes.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Note, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.store.contacts.add_record(record);
            self
        }

        pub fn with_note(mut self, text: &str, tags: &[&str]) -> Self {
            self.store.notes.add_note(Note::with_tags(text, tags));
            self
        }
    }
}
