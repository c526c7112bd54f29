//! Zenity subcommands and the alias table

use std::fmt;
use std::str::FromStr;

use crate::error::ZenityError;

/// Dialog modes supported by the zenity binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Calendar,
    Entry,
    Error,
    FileSelection,
    Info,
    List,
    Notification,
    Progress,
    Question,
    TextInfo,
    Warning,
    Scale,
    Version,
    Help,
}

/// Friendly names accepted in place of hyphenated subcommands
pub const ALIASES: &[(&str, Command)] = &[
    ("textInfo", Command::TextInfo),
    ("fileSelection", Command::FileSelection),
    ("doList", Command::List),
];

impl Command {
    pub const ALL: [Command; 14] = [
        Command::Calendar,
        Command::Entry,
        Command::Error,
        Command::FileSelection,
        Command::Info,
        Command::List,
        Command::Notification,
        Command::Progress,
        Command::Question,
        Command::TextInfo,
        Command::Warning,
        Command::Scale,
        Command::Version,
        Command::Help,
    ];

    /// Name of the subcommand as passed to zenity (without the leading `--`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Entry => "entry",
            Self::Error => "error",
            Self::FileSelection => "file-selection",
            Self::Info => "info",
            Self::List => "list",
            Self::Notification => "notification",
            Self::Progress => "progress",
            Self::Question => "question",
            Self::TextInfo => "text-info",
            Self::Warning => "warning",
            Self::Scale => "scale",
            Self::Version => "version",
            Self::Help => "help",
        }
    }

    /// Look up a subcommand by its exact zenity name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == name)
    }

    /// Resolve a caller-facing name: aliases first, then the allow-list.
    /// Matching is case-sensitive.
    pub fn resolve(name: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, command)| *command)
            .or_else(|| Self::from_name(name))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ZenityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ZenityError::UnknownCommand(s.to_string()))
    }
}
