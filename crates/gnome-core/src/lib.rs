//! gnome-scripts Core - Shared functionality for gnome-scripts tools
//!
//! Standard locations and the user configuration shared by the dialog
//! wrapper and the file-manager script helpers.

pub mod config;
pub mod paths;

pub use config::{Config, GeneralDefaults};
pub use paths::Paths;
