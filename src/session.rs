//! Loading and persisting everything a picker session touches.

use log::{debug, error, warn};

use crate::config::SessionPaths;
use crate::error::Result;
use crate::file_handling::{get_bookmarks, write_bookmarks, write_result};
use crate::selection::{LoopExit, PickerState};

/// Bookmarks loaded for a session, and whether the file may be rewritten at exit.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadedBookmarks {
    pub bookmarks: Vec<String>,
    /// False when the file could not be read back exactly, so rewriting it would lose data
    pub can_overwrite: bool,
}

/// Loads the bookmarks list, degrading to an empty list on any read error.
///
/// A file that failed to read, or had lines that were not valid UTF-8, is
/// marked as not to be overwritten.
pub fn load_bookmarks(paths: &SessionPaths) -> LoadedBookmarks {
    match get_bookmarks(&paths.bookmarks_path) {
        Ok(bookmarks_file) if bookmarks_file.replaced_lines > 0 => {
            warn!(
                "{} lines of `{}` are not valid UTF-8, the file will not be rewritten",
                bookmarks_file.replaced_lines, paths.bookmarks_path
            );
            LoadedBookmarks {
                bookmarks: bookmarks_file.bookmarks,
                can_overwrite: false,
            }
        }
        Ok(bookmarks_file) => {
            debug!(
                "Loaded {} bookmarks from `{}`",
                bookmarks_file.bookmarks.len(),
                paths.bookmarks_path
            );
            LoadedBookmarks {
                bookmarks: bookmarks_file.bookmarks,
                can_overwrite: true,
            }
        }
        Err(e) => {
            warn!("{e}");
            LoadedBookmarks {
                bookmarks: vec![],
                can_overwrite: false,
            }
        }
    }
}

/// The path handed back to the shell: the selected bookmark if the user
/// confirmed one, the current directory otherwise.
pub fn resolve_result<'a>(state: &'a PickerState, exit: LoopExit, cwd: &'a str) -> &'a str {
    match (exit, state.selected_bookmark()) {
        (LoopExit::Confirmed, Some(bookmark)) => bookmark,
        _ => cwd,
    }
}

/// Persists the bookmark list and writes the result file.
///
/// The list is written whatever `exit` is, so `+`/`-` edits are kept even
/// when the user leaves without picking. It is skipped when `can_overwrite`
/// is false (see [`LoadedBookmarks`]). A failed write is reported on stderr
/// and does not stop the result from being written.
///
/// Returns the path written to the result file.
///
/// # Errors
///
/// Returns an error if the result file cannot be written.
pub fn finish_session(
    paths: &SessionPaths,
    state: &PickerState,
    exit: LoopExit,
    cwd: &str,
    can_overwrite: bool,
) -> Result<String> {
    if can_overwrite {
        if let Err(e) = write_bookmarks(&paths.bookmarks_path, &state.bookmarks) {
            error!("Unable to save bookmarks: {e}");
        }
    } else {
        error!(
            "Not saving bookmarks: `{}` could not be read back exactly and was left untouched",
            paths.bookmarks_path
        );
    }

    let result = resolve_result(state, exit, cwd);
    debug!("Writing `{result}` to `{}`", paths.result_path);
    write_result(&paths.result_path, result)?;

    Ok(result.to_string())
}
