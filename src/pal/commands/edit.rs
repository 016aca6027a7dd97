use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactEdit};
use crate::error::{PalError, Result};
use tracing::info;

/// Applies `edit` to the contact named `name` (case-insensitive).
///
/// All changes are validated before any is applied: if one field is invalid
/// the contact is left untouched.
pub fn run(book: &mut AddressBook, name: &str, edit: ContactEdit) -> Result<CmdResult> {
    let record = book
        .find_record_ignore_case_mut(name)
        .ok_or_else(|| PalError::ContactNotFound(name.to_string()))?;

    if edit.is_empty() {
        return Ok(CmdResult::default()
            .with_listed_records(vec![record.clone()])
            .with_message(CmdMessage::info("Nothing to change.")));
    }

    let mut updated = record.clone();
    if let Some(phone) = &edit.phone {
        match updated.phones().first().map(|p| p.to_string()) {
            Some(first) => {
                updated.edit_phone(&first, phone)?;
            }
            None => updated.add_phone(phone)?,
        }
    }
    if let Some(email) = &edit.email {
        updated.add_email(email)?;
    }
    if let Some(address) = &edit.address {
        updated.add_address(address);
    }
    if let Some(birthday) = &edit.birthday {
        updated.add_birthday(birthday)?;
    }

    *record = updated;
    info!(name = record.name(), "contact updated");

    Ok(CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .with_message(CmdMessage::success("Contact updated successfully.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn book_with_olga() -> AddressBook {
        let mut record = Record::new("Olga").unwrap();
        record.add_phone("0671234567").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_email("olga@example.com").unwrap();
        let mut book = AddressBook::new();
        book.add_record(record);
        book
    }

    #[test]
    fn new_phone_replaces_first_phone() {
        let mut book = book_with_olga();
        let edit = ContactEdit {
            phone: Some("0991112233".into()),
            ..ContactEdit::default()
        };
        run(&mut book, "olga", edit).unwrap();

        let phones: Vec<String> = book
            .find_record("Olga")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(phones, vec!["0991112233", "0501234567"]);
    }

    #[test]
    fn new_phone_is_added_when_contact_has_none() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Ivan").unwrap());
        let edit = ContactEdit {
            phone: Some("0991112233".into()),
            ..ContactEdit::default()
        };
        run(&mut book, "Ivan", edit).unwrap();
        assert_eq!(book.find_record("Ivan").unwrap().phones().len(), 1);
    }

    #[test]
    fn overwrites_optional_fields() {
        let mut book = book_with_olga();
        let edit = ContactEdit {
            email: Some("o@new.org".into()),
            address: Some("Odesa".into()),
            birthday: Some("29.02.2020".into()),
            ..ContactEdit::default()
        };
        let result = run(&mut book, "Olga", edit).unwrap();

        let record = book.find_record("Olga").unwrap();
        assert_eq!(record.email().unwrap().as_str(), "o@new.org");
        assert_eq!(record.address().unwrap().as_str(), "Odesa");
        assert_eq!(record.birthday().unwrap().to_string(), "29.02.2020");
        assert_eq!(result.listed_records[0], *record);
    }

    #[test]
    fn invalid_field_leaves_contact_untouched() {
        let mut book = book_with_olga();
        let before = book.clone();
        let edit = ContactEdit {
            phone: Some("0991112233".into()),
            email: Some("o@new.org".into()),
            birthday: Some("29.02.2021".into()),
            ..ContactEdit::default()
        };
        assert!(run(&mut book, "Olga", edit).is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn empty_edit_changes_nothing() {
        let mut book = book_with_olga();
        let before = book.clone();
        let result = run(&mut book, "Olga", ContactEdit::default()).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to change.");
        assert_eq!(book, before);
    }

    #[test]
    fn unknown_contact_is_error() {
        let mut book = book_with_olga();
        assert!(matches!(
            run(&mut book, "Ivan", ContactEdit::default()),
            Err(PalError::ContactNotFound(_))
        ));
    }
}
