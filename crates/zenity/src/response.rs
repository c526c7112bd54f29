//! Typed responses for successful dialog calls

use serde::Serialize;

use crate::command::Command;

/// Result of a dialog that exited with code 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// The confirmation dialog was accepted
    Confirmed(bool),
    /// Captured output, verbatim
    Text(String),
}

impl Response {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Confirmed(_) => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Confirmed(_) => String::new(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(true))
    }
}

/// Map a successful invocation to its response. Never fails: only called
/// once the exit code is known to be 0.
pub fn parse_response(command: Command, exit_code: i32, output: String) -> Response {
    match command {
        Command::Question => Response::Confirmed(exit_code == 0),
        _ => Response::Text(output),
    }
}
