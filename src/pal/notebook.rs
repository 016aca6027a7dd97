//! # Note Collection
//!
//! An ordered list of [`Note`]s. Notes have no identifier other than their
//! text, so removal and editing address the first note whose text matches
//! exactly. Queries scan linearly and preserve collection order.

use crate::error::{PalError, Result};
use crate::model::{Entry, Note};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Adds a persisted entry, which must be a note.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        match entry {
            Entry::Note(note) => {
                self.add_note(note);
                Ok(())
            }
            other => Err(PalError::TypeMismatch {
                expected: Entry::NOTE,
                found: other.kind(),
            }),
        }
    }

    /// Notes carrying exactly `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Notes whose text contains `keyword`, ignoring case.
    pub fn search_in_text(&self, keyword: &str) -> Vec<&Note> {
        let keyword = keyword.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.text().to_lowercase().contains(&keyword))
            .collect()
    }

    pub fn find_note(&self, text: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.text() == text)
    }

    pub fn find_note_mut(&mut self, text: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.text() == text)
    }

    /// Removes the first note whose text equals `text`. Returns whether a
    /// note was removed.
    pub fn remove_note(&mut self, text: &str) -> bool {
        match self.notes.iter().position(|n| n.text() == text) {
            Some(pos) => {
                self.notes.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteBook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
