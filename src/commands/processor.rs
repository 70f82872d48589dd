//! Execution of menu commands against a contact book.

use super::parser::{parse_count, split_arguments, Arguments};
use super::{Command, MENU};
use crate::book::ContactBook;
use crate::config::Config;
use crate::domain::{Birthday, Clock, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Contact;
use tracing::{info, warn};

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the message and keep reading commands.
    Reply(String),
    /// Show the message and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(msg) | Self::Exit(msg) => msg,
        }
    }
}

/// Owns the session's contact book and turns commands into book operations.
pub struct CommandProcessor {
    book: ContactBook,
    clock: Box<dyn Clock>,
    page_size: usize,
}

impl CommandProcessor {
    /// Create a processor over `book`.
    pub fn new(book: ContactBook, clock: Box<dyn Clock>, page_size: usize) -> Self {
        Self {
            book,
            clock,
            page_size,
        }
    }

    /// Create a processor with an empty book, configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ContactBook::new(), config.clock(), config.page_size)
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Run `command` with its raw argument line.
    ///
    /// Failures are rendered as a reply so the caller can keep going.
    pub fn execute(&mut self, command: Command, input: &str) -> Outcome {
        match self.try_execute(command, input) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(command = ?command, error = %err, "command failed");
                Outcome::Reply(render_error(&err))
            }
        }
    }

    /// Run `command`, returning failures as errors.
    pub fn try_execute(&mut self, command: Command, input: &str) -> BookResult<Outcome> {
        let reply = match command {
            Command::ShowCommands => MENU.to_string(),
            Command::Close => {
                info!("closing contact book");
                return Ok(Outcome::Exit("Good bye!".to_string()));
            }
            Command::AddContact => self.add_contact(split_arguments(input)?)?,
            Command::AddPhone => self.add_phone(split_arguments(input)?)?,
            Command::DeletePhone => self.delete_phone(split_arguments(input)?)?,
            Command::ChangePhone => self.change_phone(split_arguments(input)?)?,
            Command::AddBirthday => self.add_birthday(split_arguments(input)?)?,
            Command::DaysToBirthday => {
                let args = split_arguments(input)?;
                expect_values(&args, 0)?;
                self.book
                    .get(&args.name)?
                    .days_to_next_birthday(&*self.clock)
            }
            Command::ShowContact => {
                let args = split_arguments(input)?;
                expect_values(&args, 0)?;
                self.book.get(&args.name)?.to_string()
            }
            Command::ShowContacts => self.show_contacts(input)?,
        };
        Ok(Outcome::Reply(reply))
    }

    fn add_contact(&mut self, args: Arguments) -> BookResult<String> {
        if args.values.len() > 2 {
            return Err(BookError::MalformedInput(
                "Expected a name, a phone and an optional birthday".to_string(),
            ));
        }

        let mut contact = Contact::new(Name::new(args.name.as_str())?);
        let mut phone = None;
        let mut birthday = None;
        for value in &args.values {
            // Birthdays are the only values containing '/'
            if value.contains('/') {
                if birthday.is_some() {
                    return Err(BookError::MalformedInput(
                        "Only one birthday can be given".to_string(),
                    ));
                }
                birthday = Some(Birthday::with_clock(value.as_str(), &*self.clock)?);
            } else {
                if phone.is_some() {
                    return Err(BookError::MalformedInput(
                        "Only one phone can be given; add more with command 2".to_string(),
                    ));
                }
                phone = Some(Phone::new(value.as_str())?);
            }
        }

        let reply = match &phone {
            Some(p) => format!(
                "Contact {} with phone number {} has been added.",
                args.name, p
            ),
            None => format!("Contact {} has been added.", args.name),
        };
        if let Some(p) = phone {
            contact = contact.with_phone(p);
        }
        if let Some(b) = birthday {
            contact = contact.with_birthday(b);
        }
        self.book.add_contact(contact);
        Ok(reply)
    }

    fn add_phone(&mut self, args: Arguments) -> BookResult<String> {
        expect_values(&args, 1)?;
        let contact = self.book.get_mut(&args.name)?;
        let phone = Phone::new(args.values[0].as_str())?;
        let reply = format!(
            "Phone number {} has just been added to contact {}.",
            phone, args.name
        );
        contact.add_phone(phone);
        Ok(reply)
    }

    fn delete_phone(&mut self, args: Arguments) -> BookResult<String> {
        expect_values(&args, 1)?;
        let removed = self
            .book
            .get_mut(&args.name)?
            .delete_number(&args.values[0])?;
        Ok(format!(
            "Phone number {} has just been deleted from contact {}.",
            removed, args.name
        ))
    }

    fn change_phone(&mut self, args: Arguments) -> BookResult<String> {
        expect_values(&args, 2)?;
        let (old, new) = (&args.values[0], &args.values[1]);
        self.book.get_mut(&args.name)?.swap_number(old, new)?;
        Ok(format!(
            "The phone number of the user {} with old phone number {} changed to new {}.",
            args.name, old, new
        ))
    }

    fn add_birthday(&mut self, args: Arguments) -> BookResult<String> {
        expect_values(&args, 1)?;
        let contact = self.book.get_mut(&args.name)?;
        let birthday = Birthday::with_clock(args.values[0].as_str(), &*self.clock)?;
        let reply = format!(
            "Birthday {} has been added to contact {}.",
            birthday, args.name
        );
        contact.add_birthday(birthday)?;
        Ok(reply)
    }

    fn show_contacts(&self, input: &str) -> BookResult<String> {
        let count = parse_count(input, self.page_size)?;
        if self.book.is_empty() {
            return Ok("You haven't any contacts yet.".to_string());
        }
        let lines: Vec<String> = self
            .book
            .enumerate(count)
            .map(|(_, summary)| summary.to_string())
            .collect();
        Ok(lines.join("\n"))
    }
}

fn expect_values(args: &Arguments, expected: usize) -> BookResult<()> {
    if args.values.len() == expected {
        return Ok(());
    }
    let reason = match expected {
        0 => format!("Expected only a name, got extra values: {}", args.values.join(" ")),
        1 => "Expected a name followed by one value".to_string(),
        _ => format!("Expected a name followed by {} values", expected),
    };
    Err(BookError::MalformedInput(reason))
}

/// Turn a failure into a message for the user.
pub fn render_error(err: &BookError) -> String {
    match err {
        BookError::Validation(e) => format!(
            "{}. Check the correctness of the entered data and try again, please.",
            e
        ),
        BookError::ContactNotFound(name) => {
            format!("Contact {} not found. Check the name and try again, please.", name)
        }
        BookError::MalformedInput(reason) => format!(
            "{}. Check the command you entered and try again, please.",
            reason.trim_end_matches('.')
        ),
        other => format!("{}.", other),
    }
}
