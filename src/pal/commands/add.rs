use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactDraft};
use crate::error::Result;
use tracing::info;

pub fn run(book: &mut AddressBook, draft: ContactDraft) -> Result<CmdResult> {
    let record = draft.into_record()?;
    let name = record.name().to_string();

    let replaced = book.add_record(record.clone());
    info!(name = %name, replaced = replaced.is_some(), "contact saved");

    let message = if replaced.is_some() {
        CmdMessage::success(format!("Contact '{}' replaced.", name))
    } else {
        CmdMessage::success("Contact added successfully.")
    };
    Ok(CmdResult::default()
        .with_listed_records(vec![record])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn adds_contact() {
        let mut book = AddressBook::new();
        let mut draft = ContactDraft::new("Olga");
        draft.phone = Some("0671234567".into());

        let result = run(&mut book, draft).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            book.find_record("Olga").unwrap().phones()[0].as_str(),
            "0671234567"
        );
    }

    #[test]
    fn same_name_replaces_existing_contact() {
        let mut book = AddressBook::new();
        run(&mut book, ContactDraft::new("Olga")).unwrap();

        let mut draft = ContactDraft::new("Olga");
        draft.address = Some("Kyiv".into());
        let result = run(&mut book, draft).unwrap();

        assert_eq!(book.len(), 1);
        assert!(result.messages[0].content.contains("replaced"));
        assert_eq!(
            book.find_record("Olga").unwrap().address().unwrap().as_str(),
            "Kyiv"
        );
    }

    #[test]
    fn invalid_draft_adds_nothing() {
        let mut book = AddressBook::new();
        let mut draft = ContactDraft::new("Olga");
        draft.phone = Some("123".into());

        assert!(run(&mut book, draft).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut book = AddressBook::new();
        assert!(run(&mut book, ContactDraft::new("  ")).is_err());
        assert!(book.is_empty());
    }
}
