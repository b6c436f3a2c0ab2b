// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

/// One line of a form-driving script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Focus,
    Blur,
    /// Blur towards the submit control
    SubmitBlur,
    Type(String),
    Max,
    Toggle,
    Show,
    From(String),
    Asset(String),
    To(String),
    Memo(String),
    Submit,
    Reset,
    NewRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim())),
            None => (line, None),
        };
        let arg = |name: &'static str| {
            rest.filter(|r| !r.is_empty())
                .map(str::to_string)
                .ok_or(CommandParseError::MissingArgument(name))
        };

        match word {
            "focus" => Ok(Command::Focus),
            "blur" => Ok(Command::Blur),
            "submit-blur" => Ok(Command::SubmitBlur),
            // Typing may legitimately clear the input
            "type" => Ok(Command::Type(rest.unwrap_or_default().to_string())),
            "max" => Ok(Command::Max),
            "toggle" => Ok(Command::Toggle),
            "show" => Ok(Command::Show),
            "from" => arg("from").map(Command::From),
            "asset" => arg("asset").map(Command::Asset),
            "to" => arg("to").map(Command::To),
            "memo" => Ok(Command::Memo(rest.unwrap_or_default().to_string())),
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "new" => Ok(Command::NewRequest),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}
