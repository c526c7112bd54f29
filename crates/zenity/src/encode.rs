//! Command line construction
//!
//! Every literal that reaches the shell is quoted on its own with
//! [`shlex::try_quote`]; fragments are only ever joined after quoting.

use std::path::Path;

use crate::command::Command;
use crate::error::{Result, ZenityError};
use crate::options::{GeneralOptions, OptionValue, Options};

/// Option of the list dialog that carries the table rows
pub const LIST_VALUES: &str = "value";

/// Quote a single literal for a POSIX shell
pub fn quote(value: &str) -> Result<String> {
    shlex::try_quote(value)
        .map(|quoted| quoted.into_owned())
        .map_err(|_| ZenityError::InvalidArgument(value.to_string()))
}

fn valued(name: &str, value: &str) -> Result<String> {
    Ok(format!("--{}={}", quote(name)?, quote(value)?))
}

/// Encode the general options that are set
pub fn encode_general(general: &GeneralOptions) -> Result<Vec<String>> {
    general
        .iter()
        .map(|(option, value)| valued(option.as_str(), value))
        .collect()
}

/// Encode call options, one or more fragments per entry, in insertion order
pub fn encode_options(command: Command, options: &Options) -> Result<Vec<String>> {
    let mut args = Vec::new();

    for (name, value) in options.iter() {
        let bare_cells = command == Command::List && name == LIST_VALUES;

        match value {
            OptionValue::Flag => args.push(format!("--{}", quote(name)?)),
            OptionValue::Scalar(value) => args.push(valued(name, value)?),
            OptionValue::List(values) if bare_cells => {
                for cell in values {
                    args.push(quote(cell)?);
                }
            }
            OptionValue::List(values) => {
                for value in values {
                    args.push(valued(name, value)?);
                }
            }
            OptionValue::Rows(rows) => {
                for cell in rows.iter().flatten() {
                    if bare_cells {
                        args.push(quote(cell)?);
                    } else {
                        args.push(valued(name, cell)?);
                    }
                }
            }
        }
    }

    Ok(args)
}

/// Build the full shell line for one invocation
///
/// `[<feeder> | ]<binary> --<command> [general]... [options]... 2>&1`
pub fn command_line(
    binary: &Path,
    command: Command,
    general: &GeneralOptions,
    options: &Options,
    feeder: Option<&Path>,
) -> Result<String> {
    let mut parts = Vec::new();

    if let Some(feeder) = feeder {
        parts.push(quote(&feeder.to_string_lossy())?);
        parts.push("|".to_string());
    }

    parts.push(quote(&binary.to_string_lossy())?);
    parts.push(format!("--{}", command.as_str()));
    parts.extend(encode_general(general)?);
    parts.extend(encode_options(command, options)?);
    parts.push("2>&1".to_string());

    Ok(parts.join(" "))
}
