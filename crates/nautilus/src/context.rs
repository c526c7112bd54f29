//! What Nautilus tells a script about where it was started
//!
//! Nautilus passes the current location and the selected items through
//! environment variables. When the selection variable is missing the script
//! is assumed to run from a terminal, and its command line arguments become
//! the selection instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// URI of the folder the script was started from
pub const CURRENT_URI_VAR: &str = "NAUTILUS_SCRIPT_CURRENT_URI";

/// Newline separated URIs of the selected items
pub const SELECTED_URIS_VAR: &str = "NAUTILUS_SCRIPT_SELECTED_URIS";

/// Location and selection a script was invoked with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptContext {
    current_directory: Option<String>,
    selected_files: Vec<String>,
    selected_folders: Vec<String>,
    standalone: bool,
}

impl ScriptContext {
    /// Read the context of the running process
    pub fn capture() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self::from_sources(
            std::env::var(CURRENT_URI_VAR).ok(),
            std::env::var(SELECTED_URIS_VAR).ok(),
            std::env::args().skip(1),
            &cwd,
        ))
    }

    /// Build the context from explicit inputs. `selected_uris` being `None`
    /// selects standalone mode, where `args` are classified instead.
    pub fn from_sources<I, S>(
        current_uri: Option<String>,
        selected_uris: Option<String>,
        args: I,
        cwd: &Path,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match selected_uris {
            Some(uris) => Self::from_environment(current_uri, &uris),
            None => {
                debug!("{} not set, reading selection from arguments", SELECTED_URIS_VAR);
                Self::from_arguments(args, cwd)
            }
        }
    }

    fn from_environment(current_uri: Option<String>, uris: &str) -> Self {
        let mut context = Self {
            current_directory: current_uri,
            ..Default::default()
        };

        for uri in uris.lines().map(str::trim).filter(|uri| !uri.is_empty()) {
            let is_dir = uri_to_path(uri).is_some_and(|path| path.is_dir());
            if is_dir {
                context.selected_folders.push(uri.to_string());
            } else {
                context.selected_files.push(uri.to_string());
            }
        }
        context
    }

    fn from_arguments<I, S>(args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = Self {
            current_directory: Some(path_to_uri(cwd)),
            standalone: true,
            ..Default::default()
        };

        for arg in args {
            let path = cwd.join(arg.as_ref());
            if path.is_dir() {
                context.selected_folders.push(path_to_uri(&path));
            } else if path.is_file() {
                context.selected_files.push(path_to_uri(&path));
            } else {
                debug!("Skipping {:?}: no such file or directory", path);
            }
        }

        context.selected_folders.sort();
        context.selected_files.sort();
        context
    }

    /// URI of the folder the script was started from
    pub fn current_directory(&self) -> Option<&str> {
        self.current_directory.as_deref()
    }

    /// Whether the script runs outside Nautilus
    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn selected_files(&self) -> &[String] {
        &self.selected_files
    }

    pub fn have_selected_files(&self) -> bool {
        !self.selected_files.is_empty()
    }

    pub fn selected_folders(&self) -> &[String] {
        &self.selected_folders
    }

    pub fn have_selected_folders(&self) -> bool {
        !self.selected_folders.is_empty()
    }

    /// Local paths of every selected item that is a `file://` URI
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.selected_folders
            .iter()
            .chain(&self.selected_files)
            .filter_map(|uri| uri_to_path(uri))
            .collect()
    }
}

/// Local path of a `file://` URI
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// `file://` URI for a path, falling back to plain prefixing for paths the
/// url crate rejects (relative ones)
pub fn path_to_uri(path: &Path) -> String {
    Url::from_file_path(path)
        .map(String::from)
        .unwrap_or_else(|_| format!("file://{}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("photos")).unwrap();
        std::fs::create_dir(tmp.path().join("albums")).unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "n").unwrap();
        std::fs::write(tmp.path().join("b report.pdf"), "r").unwrap();
        tmp
    }

    #[test]
    fn test_standalone_without_arguments() {
        let tmp = fixture();
        let context = ScriptContext::from_sources(None, None, Vec::<String>::new(), tmp.path());
        assert!(context.is_standalone());
        assert_eq!(context.current_directory(), Some(path_to_uri(tmp.path()).as_str()));
        assert!(context.current_directory().unwrap().starts_with("file:///"));
        assert!(!context.have_selected_files());
        assert!(!context.have_selected_folders());
    }

    #[test]
    fn test_standalone_classifies_and_sorts() {
        let tmp = fixture();
        let args = ["photos", "notes.txt", "missing", "albums", "b report.pdf"];
        let context = ScriptContext::from_sources(None, None, args, tmp.path());

        assert_eq!(
            context.selected_folders(),
            [
                path_to_uri(&tmp.path().join("albums")),
                path_to_uri(&tmp.path().join("photos")),
            ]
        );
        assert_eq!(
            context.selected_files(),
            [
                path_to_uri(&tmp.path().join("b report.pdf")),
                path_to_uri(&tmp.path().join("notes.txt")),
            ]
        );
    }

    #[test]
    fn test_environment_mode() {
        let tmp = fixture();
        let folder = path_to_uri(&tmp.path().join("photos"));
        let file = path_to_uri(&tmp.path().join("b report.pdf"));
        let remote = "sftp://host/home/me/thing";
        let selected = format!("{}\n{}\n{}\n", file, folder, remote);

        let context = ScriptContext::from_sources(
            Some("file:///home/me".to_string()),
            Some(selected),
            ["ignored-argument"],
            tmp.path(),
        );

        assert!(!context.is_standalone());
        assert_eq!(context.current_directory(), Some("file:///home/me"));
        assert_eq!(context.selected_folders(), [folder]);
        assert_eq!(context.selected_files(), [file, remote.to_string()]);
    }

    #[test]
    fn test_empty_selection_variable() {
        let tmp = fixture();
        let context = ScriptContext::from_sources(None, Some("  \n".to_string()), ["notes.txt"], tmp.path());
        assert!(!context.is_standalone());
        assert!(context.current_directory().is_none());
        assert!(!context.have_selected_files());
        assert!(!context.have_selected_folders());
    }

    #[test]
    fn test_selected_paths() {
        let tmp = fixture();
        let context = ScriptContext::from_sources(None, None, ["notes.txt", "photos"], tmp.path());
        let paths = context.selected_paths();
        assert_eq!(paths, vec![tmp.path().join("photos"), tmp.path().join("notes.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_uri_round_trip_with_spaces() {
        let path = Path::new("/home/me/My Documents/a#b.txt");
        let uri = path_to_uri(path);
        assert_eq!(uri, "file:///home/me/My%20Documents/a%23b.txt");
        assert_eq!(uri_to_path(&uri), Some(path.to_path_buf()));
    }

    #[test]
    fn test_non_file_uris_have_no_path() {
        assert_eq!(uri_to_path("smb://server/share"), None);
        assert_eq!(uri_to_path("not a uri"), None);
    }
}
