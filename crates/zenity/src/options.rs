//! Option values passed to a dialog, and the persistent general options

use gnome_core::GeneralDefaults;

/// A single option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Switch with no value (`--name`)
    Flag,
    /// `--name=value`
    Scalar(String),
    /// Repeated `--name=value`, one per element
    List(Vec<String>),
    /// Table rows, passed as bare cells to the list dialog
    Rows(Vec<Vec<String>>),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_number!(i32, i64, u32, u64, usize);

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(String::from).collect())
    }
}

impl From<Vec<Vec<String>>> for OptionValue {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::Rows(rows)
    }
}

/// Ordered option set for one dialog call
///
/// Setting a name that is already present replaces its value and keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Options::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Options::set_flag`]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_flag(name);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.set(name, OptionValue::Flag);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (name, value) in iter {
            options.set(name, value);
        }
        options
    }
}

/// The five options that persist across calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralOption {
    Title,
    WindowIcon,
    Width,
    Height,
    Timeout,
}

impl GeneralOption {
    pub const ALL: [GeneralOption; 5] = [
        GeneralOption::Title,
        GeneralOption::WindowIcon,
        GeneralOption::Width,
        GeneralOption::Height,
        GeneralOption::Timeout,
    ];

    /// Flag name passed to zenity
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::WindowIcon => "window-icon",
            Self::Width => "width",
            Self::Height => "height",
            Self::Timeout => "timeout",
        }
    }

    /// Parse an option name; `icon` is accepted for the window icon
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "window-icon" | "icon" => Some(Self::WindowIcon),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "timeout" => Some(Self::Timeout),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Current values of the general options. Unset values are omitted from
/// the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralOptions {
    values: [Option<String>; 5],
}

impl GeneralOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the configured defaults
    pub fn from_defaults(defaults: &GeneralDefaults) -> Self {
        let mut options = Self::new();
        if let Some(title) = &defaults.title {
            options.set(GeneralOption::Title, title.as_str());
        }
        if let Some(icon) = &defaults.window_icon {
            options.set(GeneralOption::WindowIcon, icon.as_str());
        }
        if let Some(width) = defaults.width {
            options.set(GeneralOption::Width, width.to_string());
        }
        if let Some(height) = defaults.height {
            options.set(GeneralOption::Height, height.to_string());
        }
        if let Some(timeout) = defaults.timeout {
            options.set(GeneralOption::Timeout, timeout.to_string());
        }
        options
    }

    /// Set an option. An empty value is the same as unsetting it.
    pub fn set(&mut self, option: GeneralOption, value: impl Into<String>) {
        let value = value.into();
        self.values[option.index()] = if value.is_empty() { None } else { Some(value) };
    }

    pub fn unset(&mut self, option: GeneralOption) {
        self.values[option.index()] = None;
    }

    pub fn get(&self, option: GeneralOption) -> Option<&str> {
        self.values[option.index()].as_deref()
    }

    /// Options that are currently set, in their fixed order
    pub fn iter(&self) -> impl Iterator<Item = (GeneralOption, &str)> {
        GeneralOption::ALL
            .into_iter()
            .filter_map(|option| self.get(option).map(|value| (option, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let options = Options::new()
            .with("text", "Pick one")
            .flag("multiple")
            .with("separator", "|");
        let names: Vec<&str> = options.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["text", "multiple", "separator"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut options = Options::new().with("text", "a").with("width", 10);
        options.set("text", "b");
        assert_eq!(options.len(), 2);
        assert_eq!(options.iter().next(), Some(("text", &OptionValue::Scalar("b".into()))));
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(OptionValue::from(42u32), OptionValue::Scalar("42".into()));
        assert_eq!(OptionValue::from(-3i64), OptionValue::Scalar("-3".into()));
        assert_eq!(
            OptionValue::from(vec!["a", "b"]),
            OptionValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_general_option_names() {
        assert_eq!(GeneralOption::from_name("icon"), Some(GeneralOption::WindowIcon));
        assert_eq!(GeneralOption::from_name("window-icon"), Some(GeneralOption::WindowIcon));
        assert_eq!(GeneralOption::from_name("colour"), None);
        for option in GeneralOption::ALL {
            assert_eq!(GeneralOption::from_name(option.as_str()), Some(option));
        }
    }

    #[test]
    fn test_general_options_empty_means_unset() {
        let mut general = GeneralOptions::new();
        general.set(GeneralOption::Title, "Hello");
        assert_eq!(general.get(GeneralOption::Title), Some("Hello"));
        general.set(GeneralOption::Title, "");
        assert_eq!(general.get(GeneralOption::Title), None);
    }

    #[test]
    fn test_general_options_iterate_in_fixed_order() {
        let mut general = GeneralOptions::new();
        general.set(GeneralOption::Timeout, "5");
        general.set(GeneralOption::Title, "T");
        let set: Vec<_> = general.iter().collect();
        assert_eq!(set, vec![(GeneralOption::Title, "T"), (GeneralOption::Timeout, "5")]);
    }

    #[test]
    fn test_from_defaults() {
        let defaults = GeneralDefaults {
            title: Some("Scripts".into()),
            width: Some(300),
            ..Default::default()
        };
        let general = GeneralOptions::from_defaults(&defaults);
        assert_eq!(general.get(GeneralOption::Title), Some("Scripts"));
        assert_eq!(general.get(GeneralOption::Width), Some("300"));
        assert_eq!(general.get(GeneralOption::Height), None);
    }
}
