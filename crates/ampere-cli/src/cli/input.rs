use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Exit,
    Reset,
    /// Zero based option index.
    Choice(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("unknown command /{0}, try /reset or /exit")]
    UnknownCommand(String),
    #[error("`{0}` is not an option, answer with a number or a letter")]
    NotAChoice(String),
    #[error("there is no option {choice}, pick one of 1 to {count}")]
    NoSuchOption { choice: String, count: usize },
}

pub(crate) struct InputParser {
    command: Regex,
}

impl InputParser {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            command: Regex::new(r"^/(\w+)(?:\s+(.*))?$")?,
        })
    }

    /// Options are chosen 1 based (`2`) or by letter (`b`). Commands start with a slash.
    pub(crate) fn parse(&self, line: &str, options: usize) -> Result<Input, InputError> {
        let line = line.trim();
        if let Some(captures) = self.command.captures(line) {
            let command = &captures[1];
            return match command {
                "exit" | "quit" => Ok(Input::Exit),
                "reset" => Ok(Input::Reset),
                _ => Err(InputError::UnknownCommand(command.to_owned())),
            };
        }

        let index = if let Ok(number) = line.parse::<usize>() {
            number.checked_sub(1)
        } else {
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => u8::try_from(letter.to_ascii_lowercase())
                    .ok()
                    .map(|byte| usize::from(byte - b'a')),
                _ => return Err(InputError::NotAChoice(line.to_owned())),
            }
        };
        match index {
            Some(index) if index < options => Ok(Input::Choice(index)),
            _ => Err(InputError::NoSuchOption {
                choice: line.to_owned(),
                count: options,
            }),
        }
    }
}

/// Letter shown in front of an option.
pub(crate) fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
