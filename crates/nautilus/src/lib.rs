//! nautilus - Context for Nautilus scripts
//!
//! Scripts placed in `~/.local/share/nautilus/scripts` are started by the
//! file manager with the current folder and the selection in environment
//! variables. [`ScriptContext`] reads them, or falls back to the command line
//! arguments when the script is started from a terminal.

mod context;

pub use context::{path_to_uri, uri_to_path, ScriptContext, CURRENT_URI_VAR, SELECTED_URIS_VAR};
