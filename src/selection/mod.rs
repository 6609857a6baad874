//! Interactive bookmark selection.
//!
//! This module provides the full-screen picker: a search line, the ranked
//! bookmark list and the key bindings that edit both.
//!
//! # User Interface
//!
//! - Typing edits the search query and re-ranks the list
//! - Arrow keys, page keys or the mouse wheel move the selection
//! - Enter (or a click) picks the selected bookmark
//! - `+` bookmarks the current directory, `-` removes the selected bookmark
//! - Escape or Ctrl-C leaves without picking

pub mod input;
pub mod types;
pub mod ui;

pub use types::{CycleDirection, LoopExit, PickerState, ViewportState};
pub use ui::prompt_for_bookmark;

/// Key that bookmarks the current working directory
pub const ADD_BOOKMARK_KEY: char = '+';

/// Key that removes the selected bookmark
pub const REMOVE_BOOKMARK_KEY: char = '-';

/// First terminal row of the list, below the header and the search line
pub const LIST_TOP_ROW: u16 = 2;
