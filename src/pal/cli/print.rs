use colored::Colorize;
use pal::api::{CmdMessage, CmdResult, MessageLevel};
use pal::model::{Note, Record};
use std::io::{self, Write};

pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_records(out, &result.listed_records)?;
    print_notes(out, &result.listed_notes)?;
    print_messages(out, &result.messages)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub(super) fn print_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    for (i, note) in notes.iter().enumerate() {
        writeln!(out, "{} {}", format!("{}.", i + 1).yellow(), note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &CmdResult) -> String {
        let mut out = Vec::new();
        print_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_records_notes_then_messages() {
        let result = CmdResult::default()
            .with_listed_records(vec![Record::new("Olga").unwrap()])
            .with_listed_notes(vec![Note::with_tags("Buy milk", ["shopping"])])
            .with_message(CmdMessage::success("done"));

        let text = render(&result);
        let record_at = text.find("Name: Olga").unwrap();
        let note_at = text.find("Buy milk | Tags: shopping").unwrap();
        let message_at = text.find("done").unwrap();
        assert!(record_at < note_at && note_at < message_at);
    }

    #[test]
    fn empty_result_prints_nothing() {
        assert!(render(&CmdResult::default()).is_empty());
    }
}
