//! Path resolution for the bookmark and result files.
//!
//! Both files live in the user's home directory unless overridden on the
//! command line. Shell expansions like `~` are resolved.

use std::env;
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

/// Default path for the bookmarks list, one path per line
const DEFAULT_BOOKMARKS_PATH: &str = "~/.bookmarks";
/// Default path for the picked directory, read by the wrapping shell function
const DEFAULT_RESULT_PATH: &str = "~/.bookmarks_res";

/// Resolves the bookmarks file path.
///
/// Uses the custom path when given, the default otherwise. When `HOME`
/// cannot be determined the `~` is left as is.
///
/// # Examples
///
/// ```
/// use rust_marks::config::get_bookmarks_path;
///
/// let custom_path = get_bookmarks_path(&Some("/tmp/marks".to_string()));
/// assert_eq!(custom_path, "/tmp/marks");
/// ```
pub fn get_bookmarks_path(bookmarks_path_arg: &Option<String>) -> String {
    let bookmarks_path = match bookmarks_path_arg {
        Some(bookmarks_path) => bookmarks_path,
        None => DEFAULT_BOOKMARKS_PATH,
    };

    shellexpand::tilde(bookmarks_path).to_string()
}

/// Resolves the result file path, with the same rules as [`get_bookmarks_path`].
pub fn get_result_path(result_path_arg: &Option<String>) -> String {
    let result_path = match result_path_arg {
        Some(result_path) => result_path,
        None => DEFAULT_RESULT_PATH,
    };

    shellexpand::tilde(result_path).to_string()
}

/// Returns the current working directory as a string.
///
/// A path that is not valid UTF-8 is converted lossily, with a warning.
///
/// # Errors
///
/// Fails if the directory was removed or is not accessible.
pub fn current_directory() -> Result<String> {
    let cwd = env::current_dir().map_err(Error::CurrentDirectory)?;
    Ok(path_to_string(&cwd))
}

fn path_to_string(path: &Path) -> String {
    match path.to_str() {
        Some(path) => path.to_string(),
        None => {
            let lossy = path.to_string_lossy().into_owned();
            warn!("Path `{lossy}` is not valid UTF-8, invalid bytes were replaced");
            lossy
        }
    }
}

/// Resolved locations of the files a session reads and writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionPaths {
    pub bookmarks_path: String,
    pub result_path: String,
}

impl SessionPaths {
    pub fn resolve(bookmarks_path_arg: &Option<String>, result_path_arg: &Option<String>) -> Self {
        Self {
            bookmarks_path: get_bookmarks_path(bookmarks_path_arg),
            result_path: get_result_path(result_path_arg),
        }
    }
}
