use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::info;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.remove_record_ignore_case(name)?;
    info!(name = removed.name(), "contact deleted");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact '{}' deleted successfully.",
        removed.name()
    ))))
}
