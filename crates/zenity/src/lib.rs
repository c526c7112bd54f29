//! zenity - Typed command builder for zenity dialogs
//!
//! Turns named options into a shell-safe zenity command line, runs it, and
//! maps the exit code and captured output back to typed values.
//!
//! ```no_run
//! use zenity::{ListDialog, Selection, Zenity};
//!
//! let mut zenity = Zenity::new();
//! zenity.set_general_option("title", "Backup");
//!
//! if zenity.question("Start the backup now?", false)? {
//!     let dialog = ListDialog::new("Pick the targets")
//!         .columns(["Target"])
//!         .row(["Documents"])
//!         .row(["Pictures"])
//!         .checklist("Copy")
//!         .multiple(true);
//!     if let Selection::Multiple(rows) = zenity.select_list(&dialog)? {
//!         println!("selected rows: {:?}", rows);
//!     }
//! }
//! # Ok::<(), zenity::ZenityError>(())
//! ```

mod command;
mod dialogs;
pub mod encode;
mod error;
pub mod exec;
pub mod list;
mod options;
mod response;
mod wrapper;

pub use command::{Command, ALIASES};
pub use dialogs::{DEFAULT_DATE_FORMAT, FILE_SEPARATOR};
pub use error::{Result, ZenityError};
pub use exec::{Executor, Invocation, ShellExecutor};
pub use list::{lenient_int, ListDialog, ListMode, Selection};
pub use options::{GeneralOption, GeneralOptions, OptionValue, Options};
pub use response::{parse_response, Response};
pub use wrapper::{locate_binary, Zenity};

/// Where zenity lives when it is not on PATH
pub const DEFAULT_BINARY: &str = "/usr/bin/zenity";
