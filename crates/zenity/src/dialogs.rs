//! Convenience dialogs
//!
//! Thin helpers that fill in the options for the common dialogs and hand them
//! to [`Zenity::dispatch`].

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::error::{Result, ZenityError};
use crate::list::{lenient_int, ListDialog, Selection};
use crate::options::Options;
use crate::wrapper::Zenity;

/// Separator zenity uses between multiple selected files
pub const FILE_SEPARATOR: &str = "|";

/// Default date format for the calendar dialog
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

fn message(text: &str, nowrap: bool) -> Options {
    let mut options = Options::new().with("text", text);
    if nowrap {
        options.set_flag("no-wrap");
    }
    options
}

impl Zenity {
    /// Show a notification in the notification area
    pub fn show_notification(&mut self, text: &str) -> Result<()> {
        self.dispatch(Command::Notification, &Options::new().with("text", text), None)?;
        Ok(())
    }

    /// Ask a yes/no question. "No" (exit code 1) is `Ok(false)`.
    pub fn question(&mut self, text: &str, nowrap: bool) -> Result<bool> {
        match self.dispatch(Command::Question, &message(text, nowrap), None) {
            Ok(response) => Ok(response.is_confirmed()),
            Err(ZenityError::ProcessFailed { code: 1, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn info(&mut self, text: &str, nowrap: bool) -> Result<()> {
        self.dispatch(Command::Info, &message(text, nowrap), None)?;
        Ok(())
    }

    pub fn warning(&mut self, text: &str, nowrap: bool) -> Result<()> {
        self.dispatch(Command::Warning, &message(text, nowrap), None)?;
        Ok(())
    }

    pub fn error(&mut self, text: &str, nowrap: bool) -> Result<()> {
        self.dispatch(Command::Error, &message(text, nowrap), None)?;
        Ok(())
    }

    /// Single line text entry
    pub fn input_text(&mut self, text: &str, default: Option<&str>) -> Result<String> {
        let mut options = Options::new().with("text", text);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            options.set("entry-text", default);
        }
        Ok(self.dispatch(Command::Entry, &options, None)?.into_text())
    }

    /// Text entry with the typed characters hidden
    pub fn input_password(&mut self, text: &str, default: Option<&str>) -> Result<String> {
        let mut options = Options::new().with("text", text).flag("hide-text");
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            options.set("entry-text", default);
        }
        Ok(self.dispatch(Command::Entry, &options, None)?.into_text())
    }

    /// Multi-line text dialog, optionally editable and pre-filled from a file.
    /// The file is only passed on when it is a readable regular file.
    pub fn input_multiline_text(&mut self, editable: bool, filename: Option<&Path>) -> Result<String> {
        let mut options = Options::new();
        if editable {
            options.set_flag("editable");
        }
        if let Some(path) = filename.filter(|p| p.is_file() && File::open(p).is_ok()) {
            options.set("filename", path.to_string_lossy().into_owned());
        }
        Ok(self.dispatch(Command::TextInfo, &options, None)?.into_text())
    }

    fn file_selection(&mut self, text: &str, multiple: bool, directory: bool) -> Result<Vec<PathBuf>> {
        let mut options = Options::new().with("text", text);
        if multiple {
            options.set_flag("multiple");
        }
        if directory {
            options.set_flag("directory");
        }
        let output = self.dispatch(Command::FileSelection, &options, None)?.into_text();
        Ok(output
            .split(FILE_SEPARATOR)
            .filter(|piece| !piece.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    pub fn select_file(&mut self, text: &str) -> Result<PathBuf> {
        Ok(first_path(self.file_selection(text, false, false)?))
    }

    pub fn select_files(&mut self, text: &str) -> Result<Vec<PathBuf>> {
        self.file_selection(text, true, false)
    }

    pub fn select_directory(&mut self, text: &str) -> Result<PathBuf> {
        Ok(first_path(self.file_selection(text, false, true)?))
    }

    pub fn select_directories(&mut self, text: &str) -> Result<Vec<PathBuf>> {
        self.file_selection(text, true, true)
    }

    /// Show a list dialog; see [`ListDialog`]
    pub fn select_list(&mut self, dialog: &ListDialog) -> Result<Selection> {
        self.show_list(dialog)
    }

    /// Radio list: exactly one row can be picked
    pub fn select_radiolist(
        &mut self,
        text: &str,
        columns: &[&str],
        rows: Vec<Vec<String>>,
        label: &str,
        defaults: Vec<bool>,
    ) -> Result<Selection> {
        let dialog = ListDialog::new(text)
            .columns(columns.iter().copied())
            .rows(rows)
            .defaults(defaults)
            .radiolist(label);
        self.show_list(&dialog)
    }

    /// Check list: rows with a checkbox in front
    pub fn select_checklist(
        &mut self,
        text: &str,
        columns: &[&str],
        rows: Vec<Vec<String>>,
        label: &str,
        multiple: bool,
        defaults: Vec<bool>,
    ) -> Result<Selection> {
        let dialog = ListDialog::new(text)
            .columns(columns.iter().copied())
            .rows(rows)
            .multiple(multiple)
            .defaults(defaults)
            .checklist(label);
        self.show_list(&dialog)
    }

    /// Calendar dialog; returns the date in `format` (strftime syntax)
    pub fn calendar(
        &mut self,
        text: &str,
        format: Option<&str>,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<String> {
        let mut options = Options::new()
            .with("text", text)
            .with("date-format", format.unwrap_or(DEFAULT_DATE_FORMAT));
        if let Some(day) = day {
            options.set("day", day);
        }
        if let Some(month) = month {
            options.set("month", month);
        }
        if let Some(year) = year {
            options.set("year", year);
        }
        Ok(self.dispatch(Command::Calendar, &options, None)?.into_text())
    }

    /// Progress dialog. `input` is an executable whose output drives the bar.
    pub fn show_progress(
        &mut self,
        text: &str,
        initial: u32,
        pulsate: bool,
        autoclose: bool,
        input: Option<&Path>,
        autokill: bool,
    ) -> Result<()> {
        let mut options = Options::new().with("text", text).with("percentage", initial);
        if pulsate {
            options.set_flag("pulsate");
        }
        if autokill {
            options.set_flag("auto-kill");
        }
        if autoclose {
            options.set_flag("auto-close");
        }
        self.dispatch(Command::Progress, &options, input)?;
        Ok(())
    }

    /// Slider dialog; returns the chosen value
    pub fn scale(&mut self, text: &str, min: i64, max: i64, step: i64, default: Option<i64>) -> Result<i64> {
        let mut options = Options::new()
            .with("text", text)
            .with("min-value", min)
            .with("max-value", max)
            .with("step", step);
        if let Some(value) = default {
            options.set("value", value);
        }
        let output = self.dispatch(Command::Scale, &options, None)?.into_text();
        Ok(lenient_int(&output))
    }

    /// Version string of the zenity binary
    pub fn version(&mut self) -> Result<String> {
        Ok(self.dispatch(Command::Version, &Options::new(), None)?.into_text())
    }
}

fn first_path(paths: Vec<PathBuf>) -> PathBuf {
    paths.into_iter().next().unwrap_or_default()
}
