use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PalError, Result};
use tracing::info;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_record_ignore_case_mut(name)
        .ok_or_else(|| PalError::ContactNotFound(name.to_string()))?;
    record.add_phone(phone)?;
    info!(name = record.name(), "phone added");

    Ok(CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone {} added to '{}'.",
            phone,
            record.name()
        ))))
}

/// Removing a phone the contact does not have is reported, not an error.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_record_ignore_case_mut(name)
        .ok_or_else(|| PalError::ContactNotFound(name.to_string()))?;

    let message = if record.remove_phone(phone) {
        info!(name = record.name(), "phone removed");
        CmdMessage::success(format!("Phone {} removed from '{}'.", phone, record.name()))
    } else {
        CmdMessage::warning(format!("'{}' has no phone {}.", record.name(), phone))
    };

    Ok(CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .with_message(message))
}
