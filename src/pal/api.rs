//! # API Facade
//!
//! [`PalApi`] is the single entry point for every pal operation, whatever
//! the UI. It owns the session state: the address book and note book loaded
//! from a [`DataStore`] when the API is opened, and written back by
//! [`PalApi::save`].
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command functions in [`crate::commands`]
//! - **Owns** the in-memory collections for the lifetime of a session
//! - **Persists** only when asked, once, at the end of a session
//!
//! It does no printing and holds no business rules of its own.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PalApi<FileStore>`
//! - Testing: `PalApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::store::DataStore;
use tracing::info;

pub struct PalApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notes: NoteBook,
}

impl<S: DataStore> PalApi<S> {
    /// Loads both collections from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load_contacts()?;
        let notes = store.load_notes()?;
        info!(
            contacts = book.len(),
            notes = notes.len(),
            "session opened"
        );
        Ok(Self { store, book, notes })
    }

    /// Writes both collections back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(&self.book)?;
        self.store.save_notes(&self.notes)?;
        info!(
            contacts = self.book.len(),
            notes = self.notes.len(),
            "session saved"
        );
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.book, draft)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn find_contact(&self, name: &str) -> Result<CmdResult> {
        commands::find::run(&self.book, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn edit_contact(&mut self, name: &str, edit: ContactEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.book, name, edit)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn add_note(&mut self, text: &str, tags: &[String]) -> Result<CmdResult> {
        commands::notes::add(&mut self.notes, text, tags)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::notes::list(&self.notes)
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::find_by_tag(&self.notes, tag)
    }

    pub fn search_notes(&self, keyword: &str) -> Result<CmdResult> {
        commands::notes::search(&self.notes, keyword)
    }

    pub fn edit_note(&mut self, text: &str, new_text: &str) -> Result<CmdResult> {
        commands::notes::edit(&mut self.notes, text, new_text)
    }

    pub fn tag_note(&mut self, text: &str, tags: &[String]) -> Result<CmdResult> {
        commands::notes::tag(&mut self.notes, text, tags)
    }

    pub fn untag_note(&mut self, text: &str, tags: &[String]) -> Result<CmdResult> {
        commands::notes::untag(&mut self.notes, text, tags)
    }

    pub fn delete_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::notes::delete(&mut self.notes, text)
    }
}

pub use commands::{parse_tags, CmdMessage, CmdResult, ContactDraft, ContactEdit, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> PalApi<InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_contact("Olga", &["0671234567"])
            .with_note("Buy milk", &["shopping"]);
        PalApi::open(fixture.store).unwrap()
    }

    #[test]
    fn open_loads_both_collections() {
        let api = api();
        assert_eq!(api.book().len(), 1);
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn mutations_stay_in_memory_until_save() {
        let mut api = api();
        api.add_contact(ContactDraft::new("Ivan")).unwrap();
        api.add_note("Call mom", &[]).unwrap();

        assert_eq!(api.store().save_count(), 0);
        assert_eq!(api.store().load_contacts().unwrap().len(), 1);

        api.save().unwrap();
        assert_eq!(api.store().save_count(), 2);
        assert_eq!(api.store().load_contacts().unwrap().len(), 2);
        assert_eq!(api.store().load_notes().unwrap().len(), 2);
    }

    #[test]
    fn contact_dispatch() {
        let mut api = api();
        let found = api.find_contact("olga").unwrap();
        assert_eq!(found.listed_records[0].name(), "Olga");

        api.add_phone("Olga", "0501234567").unwrap();
        api.remove_phone("Olga", "0671234567").unwrap();
        let edit = ContactEdit {
            email: Some("olga@example.com".into()),
            ..ContactEdit::default()
        };
        api.edit_contact("Olga", edit).unwrap();

        let record = api.book().find_record("Olga").unwrap();
        assert_eq!(record.phones()[0].as_str(), "0501234567");
        assert!(record.email().is_some());

        api.delete_contact("OLGA").unwrap();
        assert!(api.list_contacts().unwrap().listed_records.is_empty());
    }

    #[test]
    fn note_dispatch() {
        let mut api = api();
        api.add_note("Learn Python", &parse_tags("study")).unwrap();
        assert_eq!(api.find_notes_by_tag("study").unwrap().listed_notes.len(), 1);
        assert_eq!(api.search_notes("python").unwrap().listed_notes.len(), 1);

        api.tag_note("Buy milk", &parse_tags("urgent")).unwrap();
        api.untag_note("Buy milk", &parse_tags("shopping")).unwrap();
        api.edit_note("Buy milk", "Buy oat milk").unwrap();
        assert_eq!(
            api.notes().find_note("Buy oat milk").unwrap().tags(),
            &["urgent"]
        );

        api.delete_note("Buy oat milk").unwrap();
        assert_eq!(api.list_notes().unwrap().listed_notes.len(), 1);
    }
}
