use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty.")));
    }
    Ok(CmdResult::default().with_listed_records(book.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn lists_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Zed").unwrap());
        book.add_record(Record::new("Anna").unwrap());

        let result = run(&book).unwrap();
        let names: Vec<&str> = result.listed_records.iter().map(Record::name).collect();
        assert_eq!(names, vec!["Zed", "Anna"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_book_reports_it() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "Address book is empty.");
    }
}
