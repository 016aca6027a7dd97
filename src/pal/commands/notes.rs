//! Note commands: add, list, query by tag or text, edit, tag, untag, delete.
//!
//! Notes are addressed by their exact text, matching [`NoteBook`] semantics.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PalError, Result};
use crate::model::Note;
use crate::notebook::NoteBook;
use tracing::info;

pub fn add(notes: &mut NoteBook, text: &str, tags: &[String]) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PalError::Api("Note text cannot be empty".to_string()));
    }

    let note = Note::with_tags(text, tags);
    info!(tags = note.tags().len(), "note added");
    notes.add_note(note.clone());

    Ok(CmdResult::default()
        .with_listed_notes(vec![note])
        .with_message(CmdMessage::success("Note added successfully.")))
}

pub fn list(notes: &NoteBook) -> Result<CmdResult> {
    if notes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No notes yet.")));
    }
    Ok(CmdResult::default().with_listed_notes(notes.iter().cloned().collect()))
}

pub fn find_by_tag(notes: &NoteBook, tag: &str) -> Result<CmdResult> {
    let found: Vec<Note> = notes.find_by_tag(tag.trim()).into_iter().cloned().collect();
    Ok(listing(found, format!("No notes tagged '{}'.", tag.trim())))
}

pub fn search(notes: &NoteBook, keyword: &str) -> Result<CmdResult> {
    let found: Vec<Note> = notes.search_in_text(keyword).into_iter().cloned().collect();
    Ok(listing(found, format!("No notes contain '{}'.", keyword)))
}

pub fn edit(notes: &mut NoteBook, text: &str, new_text: &str) -> Result<CmdResult> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return Err(PalError::Api("Note text cannot be empty".to_string()));
    }
    let note = find_mut(notes, text)?;
    note.edit_text(new_text);
    info!("note text edited");

    Ok(CmdResult::default()
        .with_listed_notes(vec![note.clone()])
        .with_message(CmdMessage::success("Note updated successfully.")))
}

pub fn tag(notes: &mut NoteBook, text: &str, tags: &[String]) -> Result<CmdResult> {
    let note = find_mut(notes, text)?;
    let added = tags.iter().filter(|t| note.add_tag(t)).count();
    info!(added, "note tagged");

    let message = if added == 0 {
        CmdMessage::info("No new tags.")
    } else {
        CmdMessage::success(format!("Added {} tag(s).", added))
    };
    Ok(CmdResult::default()
        .with_listed_notes(vec![note.clone()])
        .with_message(message))
}

pub fn untag(notes: &mut NoteBook, text: &str, tags: &[String]) -> Result<CmdResult> {
    let note = find_mut(notes, text)?;
    let removed = tags.iter().filter(|t| note.remove_tag(t)).count();
    info!(removed, "note untagged");

    let message = if removed == 0 {
        CmdMessage::info("None of these tags were on the note.")
    } else {
        CmdMessage::success(format!("Removed {} tag(s).", removed))
    };
    Ok(CmdResult::default()
        .with_listed_notes(vec![note.clone()])
        .with_message(message))
}

pub fn delete(notes: &mut NoteBook, text: &str) -> Result<CmdResult> {
    if !notes.remove_note(text) {
        return Err(PalError::NoteNotFound(text.to_string()));
    }
    info!("note deleted");
    Ok(CmdResult::default().with_message(CmdMessage::success("Note deleted successfully.")))
}

fn find_mut<'a>(notes: &'a mut NoteBook, text: &str) -> Result<&'a mut Note> {
    notes
        .find_note_mut(text)
        .ok_or_else(|| PalError::NoteNotFound(text.to_string()))
}

fn listing(found: Vec<Note>, empty_message: String) -> CmdResult {
    if found.is_empty() {
        CmdResult::default().with_message(CmdMessage::info(empty_message))
    } else {
        CmdResult::default().with_listed_notes(found)
    }
}
