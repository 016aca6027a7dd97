use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::{PalError, Result};
use tracing::debug;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find_record_ignore_case(name).ok_or_else(|| {
        debug!(name, "contact lookup missed");
        PalError::ContactNotFound(name.to_string())
    })?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn finds_ignoring_case() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Olga").unwrap());

        let result = run(&book, "OLGA").unwrap();
        assert_eq!(result.listed_records[0].name(), "Olga");
    }

    #[test]
    fn missing_contact_is_error() {
        let book = AddressBook::new();
        assert!(matches!(
            run(&book, "Olga"),
            Err(PalError::ContactNotFound(_))
        ));
    }
}
