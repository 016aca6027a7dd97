use colored::Colorize;
use pal::error::{PalError, Result, ValidationError};
use std::io::{BufRead, Write};

/// Line-oriented prompt over any reader/writer pair.
///
/// Every `ask*` method returns `Ok(None)` once the input is exhausted, so a
/// caller can abandon the command in progress and let the session end.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(PalError::Io)
    }

    /// Prints `label` and reads one trimmed line.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label).map_err(PalError::Io)?;
        self.output.flush().map_err(PalError::Io)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(PalError::Io)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until a non-blank answer is given.
    pub fn ask_required(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            match self.ask(label)? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => {
                    self.say("This field is required.".yellow())?;
                }
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Asks for an optional value, re-asking while `validate` rejects it.
    ///
    /// `Ok(Some(None))` means the user left the field blank.
    pub fn ask_optional<T, F>(&mut self, label: &str, validate: F) -> Result<Option<Option<String>>>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            match self.ask(label)? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => return Ok(Some(None)),
                Some(answer) => match validate(&answer) {
                    Ok(_) => return Ok(Some(Some(answer))),
                    Err(e) => self.say(format!("{}", e).yellow())?,
                },
            }
        }
    }

    /// Like [`Prompt::ask_required`], but re-asks while `validate` rejects the answer.
    pub fn ask_required_valid<T, F>(&mut self, label: &str, validate: F) -> Result<Option<String>>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let Some(answer) = self.ask_required(label)? else {
                return Ok(None);
            };
            match validate(&answer) {
                Ok(_) => return Ok(Some(answer)),
                Err(e) => self.say(format!("{}", e).yellow())?,
            }
        }
    }
}
