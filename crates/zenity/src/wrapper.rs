//! The dialog dispatcher
//!
//! Resolves a command, merges the persistent general options with the call's
//! options, runs zenity and turns the exit code and output into a
//! [`Response`]. Every failure is returned as an error and also recorded in
//! the instance's success flag, which only ever describes the latest call.

use std::path::{Path, PathBuf};

use gnome_core::Config;
use tracing::{debug, warn};

use crate::command::Command;
use crate::encode;
use crate::error::{Result, ZenityError};
use crate::exec::{Executor, ShellExecutor};
use crate::options::{GeneralOption, GeneralOptions, Options};
use crate::response::{parse_response, Response};
use crate::DEFAULT_BINARY;

/// Wrapper around one zenity binary
pub struct Zenity {
    binary: PathBuf,
    general: GeneralOptions,
    executor: Box<dyn Executor>,
    failed: bool,
    last_exit_code: Option<i32>,
}

impl Default for Zenity {
    fn default() -> Self {
        Self::new()
    }
}

impl Zenity {
    /// Create a wrapper for the zenity found on PATH
    pub fn new() -> Self {
        Self::with_binary(locate_binary(None))
    }

    /// Create a wrapper for a specific binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            general: GeneralOptions::new(),
            executor: Box::new(ShellExecutor),
            failed: false,
            last_exit_code: None,
        }
    }

    /// Create a wrapper from the user configuration
    pub fn from_config(config: &Config) -> Self {
        let mut zenity = Self::with_binary(locate_binary(config.zenity_path.as_deref()));
        zenity.general = GeneralOptions::from_defaults(&config.general);
        zenity
    }

    /// Replace the process executor
    pub fn with_executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn general_options(&self) -> &GeneralOptions {
        &self.general
    }

    /// Set a general option by name. Returns false for unknown names.
    pub fn set_general_option(&mut self, name: &str, value: impl Into<String>) -> bool {
        match GeneralOption::from_name(name) {
            Some(option) => {
                self.general.set(option, value);
                true
            }
            None => false,
        }
    }

    /// Unset a general option by name. Returns false for unknown names.
    pub fn unset_general_option(&mut self, name: &str) -> bool {
        match GeneralOption::from_name(name) {
            Some(option) => {
                self.general.unset(option);
                true
            }
            None => false,
        }
    }

    pub fn set_general(&mut self, option: GeneralOption, value: impl Into<String>) {
        self.general.set(option, value);
    }

    pub fn unset_general(&mut self, option: GeneralOption) {
        self.general.unset(option);
    }

    /// Whether the most recent call succeeded
    pub fn was_successful(&self) -> bool {
        !self.failed
    }

    /// Exit code of the most recently executed dialog, if one ran
    pub fn last_exit_code(&self) -> Option<i32> {
        self.last_exit_code
    }

    /// Call a command by name, accepting the friendly aliases
    pub fn call(&mut self, name: &str, options: &Options, feeder: Option<&Path>) -> Result<Response> {
        match Command::resolve(name) {
            Some(command) => self.dispatch(command, options, feeder),
            None => {
                self.last_exit_code = None;
                warn!("{} is not a valid Zenity command", name);
                Err(self.fail(ZenityError::UnknownCommand(name.to_string())))
            }
        }
    }

    /// Run one dialog and parse its response
    pub fn dispatch(
        &mut self,
        command: Command,
        options: &Options,
        feeder: Option<&Path>,
    ) -> Result<Response> {
        self.failed = false;
        self.last_exit_code = None;

        let line = match self.command_line(command, options, feeder) {
            Ok(line) => line,
            Err(e) => return Err(self.fail(e)),
        };
        debug!("Executing: {}", line);

        let invocation = match self.executor.run(&line) {
            Ok(invocation) => invocation,
            Err(e) => {
                warn!("Failed to run zenity: {}", e);
                return Err(self.fail(ZenityError::Spawn(e)));
            }
        };
        self.last_exit_code = Some(invocation.exit_code);
        debug!(
            "Return value: {}, output: {:?}",
            invocation.exit_code, invocation.output
        );

        if invocation.success() {
            Ok(parse_response(command, invocation.exit_code, invocation.output))
        } else {
            warn!("Zenity error {}: {}", invocation.exit_code, invocation.output);
            Err(self.fail(ZenityError::ProcessFailed {
                code: invocation.exit_code,
                output: invocation.output,
            }))
        }
    }

    /// The shell line a call would execute
    pub fn command_line(
        &self,
        command: Command,
        options: &Options,
        feeder: Option<&Path>,
    ) -> Result<String> {
        let feeder = feeder.and_then(|path| {
            let resolved = executable_feeder(path);
            if resolved.is_none() {
                debug!("Ignoring feeder {:?}: not an executable file", path);
            }
            resolved
        });
        encode::command_line(
            &self.binary,
            command,
            &self.general,
            options,
            feeder.as_deref(),
        )
    }

    fn fail(&mut self, error: ZenityError) -> ZenityError {
        self.failed = true;
        error
    }
}

/// Find the zenity binary: configured path, then PATH, then the usual location
pub fn locate_binary(configured: Option<&Path>) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }
    which::which("zenity").unwrap_or_else(|_| PathBuf::from(DEFAULT_BINARY))
}

/// Path to run the feeder by, if it names an executable file. Bare names
/// resolve against the current directory, never PATH, so they come back as
/// `./name`.
fn executable_feeder(path: &Path) -> Option<PathBuf> {
    let candidate = feeder_candidate(path);
    (candidate.is_file() && which::which(&candidate).is_ok()).then_some(candidate)
}

fn feeder_candidate(path: &Path) -> PathBuf {
    if path.components().count() > 1 {
        path.to_path_buf()
    } else {
        Path::new(".").join(path)
    }
}
