//! Errors returned by dialog invocations

use thiserror::Error;

/// Errors specific to zenity invocations
#[derive(Error, Debug)]
pub enum ZenityError {
    #[error("{0} is not a valid Zenity command")]
    UnknownCommand(String),

    #[error("Zenity error {code}: {output}")]
    ProcessFailed { code: i32, output: String },

    #[error("Failed to run zenity: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Value cannot be passed to the shell: {0:?}")]
    InvalidArgument(String),
}

impl ZenityError {
    /// Exit code of the dialog process, if it ran
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ProcessFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZenityError>;
