//! Numbered command menu driving the contact book.
//!
//! [`run_session`] reads a menu key, shows the matching prompt, reads one
//! argument line and hands both to [`CommandProcessor::execute`]. The binary
//! only wires it to stdin and stdout.

mod parser;
mod processor;
mod session;

pub use parser::{capitalize, parse_count, split_arguments, Arguments};
pub use processor::{render_error, CommandProcessor, Outcome};
pub use session::run_session;

/// Text shown for the "show commands" entry and on empty input.
pub const MENU: &str = "\
Command list (enter the number corresponding to the command you need):
    0 : to show commands,
    1 : to add new contact  (input format: Name phone, birthday DD/MM/YYYY - optional),
    2 : to add new phone  (input format: Name new_phone),
    3 : to delete the phone  (input format: Name phone_to_delete),
    4 : to change phone  (input format: Name old_phone new_phone),
    5 : to add birthday  (input format: Name DD/MM/YYYY),
    6 : to see how many days to some contact birthday  (input format: Name),
    7 : to show contact  (input format: Name),
    8 : to show contacts  (input format: N - number of contacts you want to see),
    9 : to close the app";

/// Reply for a menu key that matches no command.
pub const UNKNOWN_COMMAND: &str = "You have just entered wrong number, try again please.";

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ShowCommands,
    AddContact,
    AddPhone,
    DeletePhone,
    ChangePhone,
    AddBirthday,
    DaysToBirthday,
    ShowContact,
    ShowContacts,
    Close,
}

impl Command {
    /// Every command in menu order.
    pub const ALL: [Command; 10] = [
        Command::ShowCommands,
        Command::AddContact,
        Command::AddPhone,
        Command::DeletePhone,
        Command::ChangePhone,
        Command::AddBirthday,
        Command::DaysToBirthday,
        Command::ShowContact,
        Command::ShowContacts,
        Command::Close,
    ];

    /// Resolve a menu key such as `"4"`. Surrounding whitespace is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "0" => Some(Self::ShowCommands),
            "1" => Some(Self::AddContact),
            "2" => Some(Self::AddPhone),
            "3" => Some(Self::DeletePhone),
            "4" => Some(Self::ChangePhone),
            "5" => Some(Self::AddBirthday),
            "6" => Some(Self::DaysToBirthday),
            "7" => Some(Self::ShowContact),
            "8" => Some(Self::ShowContacts),
            "9" => Some(Self::Close),
            _ => None,
        }
    }

    /// The menu key for this command.
    pub fn key(self) -> char {
        match self {
            Self::ShowCommands => '0',
            Self::AddContact => '1',
            Self::AddPhone => '2',
            Self::DeletePhone => '3',
            Self::ChangePhone => '4',
            Self::AddBirthday => '5',
            Self::DaysToBirthday => '6',
            Self::ShowContact => '7',
            Self::ShowContacts => '8',
            Self::Close => '9',
        }
    }

    /// Prompt for the argument line, or `None` if the command takes none.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::AddContact | Self::AddPhone | Self::DeletePhone => {
                Some("Enter the name and the phone, please: ")
            }
            Self::ChangePhone => Some("Enter the name and the phones, please: "),
            Self::AddBirthday => Some("Enter the name and birthday: "),
            Self::DaysToBirthday | Self::ShowContact => Some("Enter the name: "),
            Self::ShowContacts => Some("Enter the quantity of contacts you want to see: "),
            Self::ShowCommands | Self::Close => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_round_trips_menu() {
        for command in Command::ALL {
            let key = command.key().to_string();
            assert_eq!(Command::from_key(&key), Some(command));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Command::from_key("10"), None);
        assert_eq!(Command::from_key("add"), None);
        assert_eq!(Command::from_key(""), None);
        assert_eq!(Command::from_key(" 4 "), Some(Command::ChangePhone));
    }

    #[test]
    fn test_prompts() {
        assert!(Command::ShowCommands.prompt().is_none());
        assert!(Command::Close.prompt().is_none());
        assert_eq!(Command::ShowContact.prompt(), Some("Enter the name: "));
    }

    #[test]
    fn test_menu_lists_every_key() {
        for command in Command::ALL {
            assert!(MENU.contains(&format!("{} :", command.key())));
        }
    }
}
