use super::DataStore;
use crate::book::AddressBook;
use crate::config::{DEFAULT_CONTACTS_FILE, DEFAULT_NOTES_FILE};
use crate::error::{PalError, Result};
use crate::model::Entry;
use crate::notebook::NoteBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }

    pub fn with_file_names(mut self, contacts_file: &str, notes_file: &str) -> Self {
        self.contacts_file = contacts_file.to_string();
        self.notes_file = notes_file.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PalError::Io)?;
        }
        Ok(())
    }

    fn read_entries(&self, path: &Path) -> Result<Vec<Entry>> {
        if !path.exists() {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(PalError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(PalError::Serialization)?;
        debug!(path = %path.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }

    fn write_entries(&self, path: &Path, entries: &[Entry]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(PalError::Serialization)?;

        let tmp_path = self.root.join(format!(".pal-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(PalError::Io)?;
        fs::rename(&tmp_path, path).map_err(PalError::Io)?;

        debug!(path = %path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        let mut book = AddressBook::new();
        for entry in self.read_entries(&self.contacts_path())? {
            book.add_entry(entry)?;
        }
        Ok(book)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        let entries: Vec<Entry> = book.iter().cloned().map(Entry::from).collect();
        self.write_entries(&self.contacts_path(), &entries)
    }

    fn load_notes(&self) -> Result<NoteBook> {
        let mut notes = NoteBook::new();
        for entry in self.read_entries(&self.notes_path())? {
            notes.add_entry(entry)?;
        }
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        let entries: Vec<Entry> = notes.iter().cloned().map(Entry::from).collect();
        self.write_entries(&self.notes_path(), &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Record};
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_files_load_empty() {
        let (_dir, store) = setup();
        assert!(store.load_contacts().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn creates_data_dir_on_save() {
        let (_dir, mut store) = setup();
        store.save_notes(&NoteBook::new()).unwrap();
        assert!(store.notes_path().exists());
        assert_eq!(fs::read_to_string(store.notes_path()).unwrap(), "[]");
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let (_dir, mut store) = setup();
        let mut book = AddressBook::new();
        book.add_record(Record::new("Olga").unwrap());
        store.save_contacts(&book).unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn respects_custom_file_names() {
        let dir = TempDir::new().unwrap();
        let mut store =
            FileStore::new(dir.path().to_path_buf()).with_file_names("people.json", "memo.json");
        let mut notes = NoteBook::new();
        notes.add_note(Note::new("hello"));
        store.save_notes(&notes).unwrap();

        assert!(dir.path().join("memo.json").exists());
        assert!(!dir.path().join("notes.json").exists());
        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.contacts_path(), "{not json").unwrap();
        assert!(matches!(
            store.load_contacts(),
            Err(PalError::Serialization(_))
        ));
    }
}
