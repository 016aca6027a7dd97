use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "pal", bin_name = "pal", version)]
#[command(about = "Personal assistant: contacts and tagged notes at a prompt", long_about = None)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long, env = "PAL_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Notes,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contact Commands:",
            CommandGroup::Notes => "Note Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Notes,
            CommandGroup::Misc,
        ]
    }
}

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Add,
    ShowAll,
    Find,
    Delete,
    Edit,
    AddPhone,
    RemovePhone,
    Notes,
    AddNote,
    FindTag,
    SearchNotes,
    EditNote,
    TagNote,
    UntagNote,
    DeleteNote,
    Help,
    Exit,
}

impl ReplCommand {
    pub const ALL: &'static [ReplCommand] = &[
        ReplCommand::Add,
        ReplCommand::ShowAll,
        ReplCommand::Find,
        ReplCommand::Delete,
        ReplCommand::Edit,
        ReplCommand::AddPhone,
        ReplCommand::RemovePhone,
        ReplCommand::Notes,
        ReplCommand::AddNote,
        ReplCommand::FindTag,
        ReplCommand::SearchNotes,
        ReplCommand::EditNote,
        ReplCommand::TagNote,
        ReplCommand::UntagNote,
        ReplCommand::DeleteNote,
        ReplCommand::Help,
        ReplCommand::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReplCommand::Add => "add",
            ReplCommand::ShowAll => "show all",
            ReplCommand::Find => "find",
            ReplCommand::Delete => "delete",
            ReplCommand::Edit => "edit",
            ReplCommand::AddPhone => "add phone",
            ReplCommand::RemovePhone => "remove phone",
            ReplCommand::Notes => "notes",
            ReplCommand::AddNote => "add note",
            ReplCommand::FindTag => "find tag",
            ReplCommand::SearchNotes => "search notes",
            ReplCommand::EditNote => "edit note",
            ReplCommand::TagNote => "tag note",
            ReplCommand::UntagNote => "untag note",
            ReplCommand::DeleteNote => "delete note",
            ReplCommand::Help => "help",
            ReplCommand::Exit => "exit",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            ReplCommand::Add => "Add a new contact",
            ReplCommand::ShowAll => "Show all contacts",
            ReplCommand::Find => "Find a contact by name",
            ReplCommand::Delete => "Delete a contact by name",
            ReplCommand::Edit => "Edit a contact's phone, email, address or birthday",
            ReplCommand::AddPhone => "Add another phone to a contact",
            ReplCommand::RemovePhone => "Remove a phone from a contact",
            ReplCommand::Notes => "Show all notes",
            ReplCommand::AddNote => "Add a note with optional tags",
            ReplCommand::FindTag => "Show notes with a tag",
            ReplCommand::SearchNotes => "Search note text",
            ReplCommand::EditNote => "Replace the text of a note",
            ReplCommand::TagNote => "Add tags to a note",
            ReplCommand::UntagNote => "Remove tags from a note",
            ReplCommand::DeleteNote => "Delete a note",
            ReplCommand::Help => "Show this help message",
            ReplCommand::Exit => "Save and exit",
        }
    }

    pub fn group(&self) -> CommandGroup {
        match self {
            ReplCommand::Add
            | ReplCommand::ShowAll
            | ReplCommand::Find
            | ReplCommand::Delete
            | ReplCommand::Edit
            | ReplCommand::AddPhone
            | ReplCommand::RemovePhone => CommandGroup::Contacts,
            ReplCommand::Notes
            | ReplCommand::AddNote
            | ReplCommand::FindTag
            | ReplCommand::SearchNotes
            | ReplCommand::EditNote
            | ReplCommand::TagNote
            | ReplCommand::UntagNote
            | ReplCommand::DeleteNote => CommandGroup::Notes,
            ReplCommand::Help | ReplCommand::Exit => CommandGroup::Misc,
        }
    }
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "all" => return Ok(ReplCommand::ShowAll),
            "close" | "quit" => return Ok(ReplCommand::Exit),
            _ => {}
        }
        ReplCommand::ALL
            .iter()
            .find(|c| c.name() == normalized)
            .copied()
            .ok_or_else(|| format!("Unknown command: {}", s.trim()))
    }
}

/// Returns the grouped help output as a string
pub fn get_grouped_help() -> String {
    let mut output = String::new();
    output.push_str("Available commands:\n");

    for group in CommandGroup::all() {
        output.push('\n');
        output.push_str(&format!("{}\n", group.heading()));
        for cmd in ReplCommand::ALL.iter().filter(|c| c.group() == *group) {
            output.push_str(&format!("  {:<14} {}\n", cmd.name(), cmd.about()));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_by_name() {
        for cmd in ReplCommand::ALL {
            assert_eq!(cmd.name().parse::<ReplCommand>().unwrap(), *cmd);
        }
    }

    #[test]
    fn parsing_ignores_case_and_extra_spaces() {
        assert_eq!(
            "  Show   ALL ".parse::<ReplCommand>().unwrap(),
            ReplCommand::ShowAll
        );
        assert_eq!("ADD NOTE".parse::<ReplCommand>().unwrap(), ReplCommand::AddNote);
    }

    #[test]
    fn aliases() {
        assert_eq!("all".parse::<ReplCommand>().unwrap(), ReplCommand::ShowAll);
        assert_eq!("close".parse::<ReplCommand>().unwrap(), ReplCommand::Exit);
        assert_eq!("quit".parse::<ReplCommand>().unwrap(), ReplCommand::Exit);
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "dance".parse::<ReplCommand>().unwrap_err(),
            "Unknown command: dance"
        );
        assert!("".parse::<ReplCommand>().is_err());
    }

    #[test]
    fn help_lists_every_command_once() {
        let help = get_grouped_help();
        for cmd in ReplCommand::ALL {
            assert!(help.contains(cmd.about()), "missing {}", cmd.name());
        }
        assert!(help.contains("Contact Commands:"));
        assert!(help.contains("Note Commands:"));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["pal", "--home", "/tmp/pal", "-v"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/pal")));
        assert!(cli.verbose);
    }
}
