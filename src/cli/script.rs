//! Line commands understood by the interactive driver.

use thiserror::Error;

use crate::ui::signin::SignInIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Replace the email field content.
    Email(String),
    /// Replace the password field content.
    Password(String),
    BlurEmail,
    BlurPassword,
    Submit,
    /// Print the current snapshot.
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'blur' expects 'email' or 'password', got '{0}'")]
    BadBlurTarget(String),
}

pub const HELP: &str = "\
commands:
  email <value>      set the email field
  password <value>   set the password field
  blur email         leave the email field
  blur password      leave the password field
  submit             sign in (or retry after a service error)
  state              print the current state
  help               show this text
  quit               exit";

/// Parse one input line. Blank lines and `#` comments yield `None`.
///
/// Field values are taken verbatim after the first space, so they may
/// contain spaces; a bare `email` or `password` clears the field.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };

    let command = match word {
        "email" => ScriptCommand::Email(rest.to_string()),
        "password" => ScriptCommand::Password(rest.to_string()),
        "blur" => match rest.trim() {
            "email" => ScriptCommand::BlurEmail,
            "password" => ScriptCommand::BlurPassword,
            other => return Err(ScriptError::BadBlurTarget(other.to_string())),
        },
        "submit" | "retry" => ScriptCommand::Submit,
        "state" => ScriptCommand::State,
        "help" => ScriptCommand::Help,
        "quit" | "exit" => ScriptCommand::Quit,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

impl ScriptCommand {
    /// The event this command sends to the form, if any.
    pub fn into_intent(self) -> Option<SignInIntent> {
        match self {
            Self::Email(value) => Some(SignInIntent::EnterEmail { value }),
            Self::Password(value) => Some(SignInIntent::EnterPassword { value }),
            Self::BlurEmail => Some(SignInIntent::EmailBlur),
            Self::BlurPassword => Some(SignInIntent::PasswordBlur),
            Self::Submit => Some(SignInIntent::Submit),
            Self::State | Self::Help | Self::Quit => None,
        }
    }
}
