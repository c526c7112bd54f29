//! Selection lists
//!
//! zenity prints the chosen rows as free text. To get row indices back, every
//! row gets a hidden leading identity cell holding its index, and multiple
//! selections are joined with a separator that real cells are unlikely to
//! contain. Checklist and radiolist dialogs need one more leading cell for
//! the toggle; zenity shows that column itself, so the hidden column shifts
//! one place to the right.

use serde::Serialize;

use crate::command::Command;
use crate::encode::LIST_VALUES;
use crate::error::Result;
use crate::options::{OptionValue, Options};
use crate::wrapper::Zenity;

/// Header of the hidden identity column
pub const ID_COLUMN: &str = "@@@PHPZENITYID@@@";

/// Separator between selected rows in multi-select output
pub const SEPARATOR: &str = "@@@PHPZENITYSEP@@@";

/// Kind of list dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Plain,
    Checklist,
    Radiolist,
}

impl ListMode {
    /// zenity switch enabling the toggle column
    pub fn toggle_flag(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Checklist => Some("checklist"),
            Self::Radiolist => Some("radiolist"),
        }
    }

    /// Leading columns added to the header and to every row
    pub fn synthetic_columns(&self) -> usize {
        match self {
            Self::Plain => 1,
            Self::Checklist | Self::Radiolist => 2,
        }
    }
}

/// Rows picked by the user, as indices into the rows passed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection {
    Single(i64),
    Multiple(Vec<i64>),
}

impl Selection {
    pub fn indices(&self) -> Vec<i64> {
        match self {
            Self::Single(index) => vec![*index],
            Self::Multiple(indices) => indices.clone(),
        }
    }
}

/// A list, checklist or radiolist dialog
#[derive(Debug, Clone, Default)]
pub struct ListDialog {
    pub text: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub multiple: bool,
    /// Initial toggle state per row; rows without an entry start unchecked
    pub defaults: Vec<bool>,
    /// Header of the toggle column
    pub extra_label: String,
    pub mode: ListMode,
}

impl ListDialog {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn defaults(mut self, defaults: Vec<bool>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn checklist(mut self, label: impl Into<String>) -> Self {
        self.mode = ListMode::Checklist;
        self.extra_label = label.into();
        self
    }

    pub fn radiolist(mut self, label: impl Into<String>) -> Self {
        self.mode = ListMode::Radiolist;
        self.extra_label = label.into();
        self
    }

    /// 1-based index of the column zenity is told to hide
    pub fn hidden_column(&self) -> usize {
        self.mode.synthetic_columns()
    }

    /// Header with the synthetic columns in front
    fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 2);
        if self.mode.toggle_flag().is_some() {
            header.push(self.extra_label.clone());
        }
        header.push(ID_COLUMN.to_string());
        header.extend(self.columns.iter().cloned());
        header
    }

    /// Rows with the synthetic cells in front
    fn table(&self) -> Vec<Vec<String>> {
        let toggles = self.mode.toggle_flag().is_some();

        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let mut row = Vec::with_capacity(cells.len() + 2);
                if toggles {
                    let checked = self.defaults.get(index).copied().unwrap_or(false);
                    row.push(if checked { "TRUE" } else { "FALSE" }.to_string());
                }
                row.push(index.to_string());
                row.extend(cells.iter().cloned());
                row
            })
            .collect()
    }

    /// Options for the list subcommand
    pub fn to_options(&self) -> Options {
        let mut options = Options::new().with("text", self.text.as_str());

        if let Some(flag) = self.mode.toggle_flag() {
            options.set_flag(flag);
        }
        options.set("hide-column", self.hidden_column());
        options.set("column", OptionValue::List(self.header()));
        options.set(LIST_VALUES, OptionValue::Rows(self.table()));

        if self.multiple {
            options.set_flag("multiple");
        }
        options.set("separator", SEPARATOR);
        options
    }

    /// Turn zenity's output back into row indices
    ///
    /// Empty output in multiple mode means nothing was picked.
    pub fn decode(&self, output: &str) -> Selection {
        if self.multiple {
            if output.is_empty() {
                return Selection::Multiple(Vec::new());
            }
            Selection::Multiple(output.split(SEPARATOR).map(lenient_int).collect())
        } else {
            Selection::Single(lenient_int(output))
        }
    }
}

/// Lenient integer parsing: optional leading whitespace and sign, then as
/// many digits as are present. Text without a leading number is 0; values
/// past the i64 range saturate.
pub fn lenient_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }
    value
}

impl Zenity {
    /// Show a list dialog and return the selected row indices
    pub fn show_list(&mut self, dialog: &ListDialog) -> Result<Selection> {
        let response = self.dispatch(Command::List, &dialog.to_options(), None)?;
        Ok(dialog.decode(response.as_text().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::RecordingExecutor;
    use crate::ZenityError;

    fn fruit() -> ListDialog {
        ListDialog::new("Pick a fruit")
            .columns(["Name", "Colour", "Price"])
            .row(["Apple", "red", "1.20"])
            .row(["Banana", "yellow", "0.80"])
    }

    fn wrapper() -> (Zenity, RecordingExecutor) {
        let executor = RecordingExecutor::default();
        let zenity = Zenity::with_binary("zenity").with_executor(executor.clone());
        (zenity, executor)
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("1"), 1);
        assert_eq!(lenient_int("  42"), 42);
        assert_eq!(lenient_int("12abc"), 12);
        assert_eq!(lenient_int("-7"), -7);
        assert_eq!(lenient_int("+3"), 3);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_plain_encoding() {
        let options = fruit().to_options();
        assert_eq!(options.get("hide-column"), Some(&OptionValue::Scalar("1".into())));
        assert_eq!(
            options.get("column"),
            Some(&OptionValue::from(vec![ID_COLUMN, "Name", "Colour", "Price"]))
        );
        assert_eq!(
            options.get(LIST_VALUES),
            Some(&OptionValue::Rows(vec![
                vec!["0".into(), "Apple".into(), "red".into(), "1.20".into()],
                vec!["1".into(), "Banana".into(), "yellow".into(), "0.80".into()],
            ]))
        );
        assert!(options.get("checklist").is_none());
        assert!(options.get("multiple").is_none());
        assert_eq!(options.get("separator"), Some(&OptionValue::from(SEPARATOR)));
    }

    #[test]
    fn test_checklist_encoding() {
        let dialog = fruit().checklist("Buy").defaults(vec![true]).multiple(true);
        let options = dialog.to_options();
        assert_eq!(options.get("checklist"), Some(&OptionValue::Flag));
        assert_eq!(options.get("hide-column"), Some(&OptionValue::Scalar("2".into())));
        assert_eq!(
            options.get("column"),
            Some(&OptionValue::from(vec!["Buy", ID_COLUMN, "Name", "Colour", "Price"]))
        );
        match options.get(LIST_VALUES) {
            Some(OptionValue::Rows(rows)) => {
                assert_eq!(rows[0][..2], ["TRUE".to_string(), "0".to_string()]);
                assert_eq!(rows[1][..2], ["FALSE".to_string(), "1".to_string()]);
            }
            other => panic!("unexpected rows {:?}", other),
        }
        assert_eq!(options.get("multiple"), Some(&OptionValue::Flag));
    }

    #[test]
    fn test_radiolist_without_defaults_keeps_columns_aligned() {
        let dialog = fruit().radiolist("Pick");
        let options = dialog.to_options();
        let header_len = match options.get("column") {
            Some(OptionValue::List(header)) => header.len(),
            other => panic!("unexpected header {:?}", other),
        };
        match options.get(LIST_VALUES) {
            Some(OptionValue::Rows(rows)) => {
                for row in rows {
                    assert_eq!(row.len(), header_len);
                    assert_eq!(row[0], "FALSE");
                }
            }
            other => panic!("unexpected rows {:?}", other),
        }
    }

    #[test]
    fn test_toggle_modes_hide_one_column_further() {
        let plain = fruit().hidden_column();
        assert_eq!(fruit().checklist("x").hidden_column(), plain + 1);
        assert_eq!(fruit().radiolist("x").hidden_column(), plain + 1);
    }

    #[test]
    fn test_synthetic_columns_match_rows() {
        for dialog in [fruit(), fruit().checklist("c"), fruit().radiolist("r")] {
            let extra = dialog.mode.synthetic_columns();
            assert_eq!(dialog.header().len(), dialog.columns.len() + extra);
            for (row, original) in dialog.table().iter().zip(&dialog.rows) {
                assert_eq!(row.len(), original.len() + extra);
            }
        }
    }

    #[test]
    fn test_plain_single_selection() {
        let (mut zenity, executor) = wrapper();
        executor.reply(0, "1");
        assert_eq!(zenity.show_list(&fruit()).unwrap(), Selection::Single(1));

        let args = executor.last_args();
        assert_eq!(&args[..2], ["zenity", "--list"]);
        assert!(args.contains(&"--hide-column=1".to_string()));
        assert!(args.contains(&format!("--separator={}", SEPARATOR)));
        let first_cell = args.iter().position(|arg| arg == "Apple").unwrap();
        assert_eq!(args[first_cell - 1], "0");
        assert_eq!(&args[first_cell..first_cell + 3], ["Apple", "red", "1.20"]);
        assert_eq!(&args[first_cell + 3..first_cell + 7], ["1", "Banana", "yellow", "0.80"]);
    }

    #[test]
    fn test_checklist_multiple_selection() {
        let (mut zenity, executor) = wrapper();
        executor.reply(0, "0@@@PHPZENITYSEP@@@1");
        let dialog = fruit().checklist("Buy").multiple(true);
        assert_eq!(zenity.show_list(&dialog).unwrap(), Selection::Multiple(vec![0, 1]));
        assert!(executor.last_args().contains(&"--hide-column=2".to_string()));
        assert!(executor.last_args().contains(&"--checklist".to_string()));
    }

    #[test]
    fn test_zero_index_is_a_valid_selection() {
        let (mut zenity, executor) = wrapper();
        executor.reply(0, "0");
        assert_eq!(zenity.show_list(&fruit()).unwrap(), Selection::Single(0));
        assert!(zenity.was_successful());
    }

    #[test]
    fn test_dismissed_dialog_is_not_parsed() {
        let (mut zenity, executor) = wrapper();
        executor.reply(1, "");
        let result = zenity.show_list(&fruit().multiple(true));
        assert!(matches!(result, Err(ZenityError::ProcessFailed { code: 1, .. })));
        assert!(!zenity.was_successful());
    }

    #[test]
    fn test_decode_lenient_pieces() {
        let dialog = fruit().multiple(true);
        assert_eq!(
            dialog.decode("2@@@PHPZENITYSEP@@@junk@@@PHPZENITYSEP@@@5"),
            Selection::Multiple(vec![2, 0, 5])
        );
        assert_eq!(dialog.decode(""), Selection::Multiple(vec![]));
        assert_eq!(fruit().decode("oops"), Selection::Single(0));
    }
}
