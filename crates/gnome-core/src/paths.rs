//! Standard paths used by gnome-scripts tools

use std::path::PathBuf;

/// Standard gnome-scripts paths
pub struct Paths {
    /// Config directory (~/.config/gnome-scripts)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("gnome-scripts");

        Self { config }
    }

    /// Default location of the user configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let paths = Paths::new();
        assert!(paths.config_file().starts_with(&paths.config));
        assert!(paths.config_file().ends_with("config.json"));
    }

    #[test]
    fn test_config_dir_is_namespaced() {
        assert!(Paths::new().config.ends_with("gnome-scripts"));
    }
}
