//! # CLI Layer
//!
//! The prompt loop is **one possible UI client** for pal, not the application
//! itself. This is the only place that reads stdin, writes stdout, or turns
//! errors into something a person reads.
//!
//! ## Structure
//!
//! - `run()`: resolves the data directory, loads config, starts logging, opens
//!   the API over a `FileStore`, and hands stdin/stdout to `session()`
//! - `session()`: the read-dispatch-print loop; generic over store and I/O so
//!   tests can drive it with in-memory values
//! - `handle_*()`: per-command field prompts and the API call
//!
//! Errors from a command are printed and the loop goes on. Only loading at
//! startup and saving at exit can fail the process.

use super::print::{print_messages, print_result};
use super::prompt::Prompt;
use super::setup::{get_grouped_help, Cli, ReplCommand};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use pal::api::{parse_tags, CmdMessage, CmdResult, ContactDraft, ContactEdit, PalApi};
use pal::config::PalConfig;
use pal::error::{PalError, Result, ValidationError};
use pal::logging::init_logging;
use pal::model::fields::{parse_birthday, validate_email, validate_phone};
use pal::store::fs::FileStore;
use pal::store::DataStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

const BANNER: &str = "Personal Assistant started. Type 'help' to see available commands.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let home = resolve_home(cli.home)?;
    let config = PalConfig::load(&home)?;
    init_logging(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });
    debug!(home = %home.display(), "starting");

    let store = FileStore::new(home).with_file_names(&config.contacts_file, &config.notes_file);
    let mut api = PalApi::open(store)?;

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    session(&mut api, &mut prompt)
}

fn resolve_home(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = flag {
        return Ok(home);
    }
    ProjectDirs::from("com", "pal", "pal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PalError::Store("Could not determine data directory".to_string()))
}

/// Runs commands until `exit` or end of input, then saves.
pub fn session<S, R, W>(api: &mut PalApi<S>, prompt: &mut Prompt<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    prompt.say(BANNER)?;

    loop {
        let Some(line) = prompt.ask("\nEnter a command: ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(message) => {
                let hint = CmdMessage::warning(format!(
                    "{}. Type 'help' to see available commands.",
                    message
                ));
                print_messages(prompt.out(), &[hint])?;
                continue;
            }
        };

        if command == ReplCommand::Exit {
            break;
        }

        match dispatch(api, prompt, command) {
            Ok(Some(result)) => print_result(prompt.out(), &result)?,
            Ok(None) => {}
            Err(e) => {
                warn!(command = command.name(), error = %e, "command failed");
                print_messages(prompt.out(), &[CmdMessage::error(e.to_string())])?;
            }
        }
    }

    prompt.say("Saving data...".dimmed())?;
    api.save()?;
    prompt.say("Goodbye!")?;
    Ok(())
}

/// `Ok(None)` means input ran out before the command's prompts were answered.
fn dispatch<S, R, W>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
    command: ReplCommand,
) -> Result<Option<CmdResult>>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    match command {
        ReplCommand::Add => handle_add(api, prompt),
        ReplCommand::ShowAll => api.list_contacts().map(Some),
        ReplCommand::Find => handle_find(api, prompt),
        ReplCommand::Delete => handle_delete(api, prompt),
        ReplCommand::Edit => handle_edit(api, prompt),
        ReplCommand::AddPhone => handle_add_phone(api, prompt),
        ReplCommand::RemovePhone => handle_remove_phone(api, prompt),
        ReplCommand::Notes => api.list_notes().map(Some),
        ReplCommand::AddNote => handle_add_note(api, prompt),
        ReplCommand::FindTag => handle_find_tag(api, prompt),
        ReplCommand::SearchNotes => handle_search_notes(api, prompt),
        ReplCommand::EditNote => handle_edit_note(api, prompt),
        ReplCommand::TagNote => handle_tag_note(api, prompt, true),
        ReplCommand::UntagNote => handle_tag_note(api, prompt, false),
        ReplCommand::DeleteNote => handle_delete_note(api, prompt),
        ReplCommand::Help => {
            prompt.say(get_grouped_help().trim_end())?;
            Ok(Some(CmdResult::default()))
        }
        ReplCommand::Exit => Ok(Some(CmdResult::default())),
    }
}

fn accept_any(_: &str) -> std::result::Result<(), ValidationError> {
    Ok(())
}

fn handle_add<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter name: ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt.ask_optional("Enter phone (optional): ", validate_phone)? else {
        return Ok(None);
    };
    let Some(email) = prompt.ask_optional("Enter email (optional): ", validate_email)? else {
        return Ok(None);
    };
    let Some(address) = prompt.ask_optional("Enter address (optional): ", accept_any)? else {
        return Ok(None);
    };
    let Some(birthday) = prompt.ask_optional(
        "Enter birthday (optional, format DD.MM.YYYY): ",
        parse_birthday,
    )?
    else {
        return Ok(None);
    };

    let draft = ContactDraft {
        name,
        phone,
        email,
        address,
        birthday,
    };
    api.add_contact(draft).map(Some)
}

fn handle_find<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter the name to search: ")? else {
        return Ok(None);
    };
    api.find_contact(&name).map(Some)
}

fn handle_delete<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter the name to delete: ")? else {
        return Ok(None);
    };
    api.delete_contact(&name).map(Some)
}

fn handle_edit<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter the name of the contact to edit: ")? else {
        return Ok(None);
    };
    let current = api.find_contact(&name)?;
    for record in &current.listed_records {
        prompt.say(format!("Editing contact: {}", record))?;
    }

    let Some(phone) =
        prompt.ask_optional("Enter new phone (leave empty to keep current): ", validate_phone)?
    else {
        return Ok(None);
    };
    let Some(email) =
        prompt.ask_optional("Enter new email (leave empty to keep current): ", validate_email)?
    else {
        return Ok(None);
    };
    let Some(address) =
        prompt.ask_optional("Enter new address (leave empty to keep current): ", accept_any)?
    else {
        return Ok(None);
    };
    let Some(birthday) = prompt.ask_optional(
        "Enter new birthday (leave empty to keep current): ",
        parse_birthday,
    )?
    else {
        return Ok(None);
    };

    let edit = ContactEdit {
        phone,
        email,
        address,
        birthday,
    };
    api.edit_contact(&name, edit).map(Some)
}

fn handle_add_phone<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter name: ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt.ask_required_valid("Enter phone: ", validate_phone)? else {
        return Ok(None);
    };
    api.add_phone(&name, &phone).map(Some)
}

fn handle_remove_phone<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(name) = prompt.ask_required("Enter name: ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt.ask_required("Enter phone to remove: ")? else {
        return Ok(None);
    };
    api.remove_phone(&name, &phone).map(Some)
}

fn handle_add_note<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(text) = prompt.ask_required("Enter note text: ")? else {
        return Ok(None);
    };
    let Some(tags) = prompt.ask("Enter tags (optional, comma separated): ")? else {
        return Ok(None);
    };
    api.add_note(&text, &parse_tags(&tags)).map(Some)
}

fn handle_find_tag<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(tag) = prompt.ask_required("Enter tag: ")? else {
        return Ok(None);
    };
    api.find_notes_by_tag(&tag).map(Some)
}

fn handle_search_notes<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(keyword) = prompt.ask_required("Enter keyword: ")? else {
        return Ok(None);
    };
    api.search_notes(&keyword).map(Some)
}

fn handle_edit_note<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(text) = prompt.ask_required("Enter the current note text: ")? else {
        return Ok(None);
    };
    let Some(new_text) = prompt.ask_required("Enter the new note text: ")? else {
        return Ok(None);
    };
    api.edit_note(&text, &new_text).map(Some)
}

fn handle_tag_note<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
    adding: bool,
) -> Result<Option<CmdResult>> {
    let Some(text) = prompt.ask_required("Enter the note text: ")? else {
        return Ok(None);
    };
    let Some(tags) = prompt.ask_required("Enter tags (comma separated): ")? else {
        return Ok(None);
    };
    let tags = parse_tags(&tags);
    if adding {
        api.tag_note(&text, &tags).map(Some)
    } else {
        api.untag_note(&text, &tags).map(Some)
    }
}

fn handle_delete_note<S: DataStore, R: BufRead, W: Write>(
    api: &mut PalApi<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<CmdResult>> {
    let Some(text) = prompt.ask_required("Enter the note text to delete: ")? else {
        return Ok(None);
    };
    api.delete_note(&text).map(Some)
}
