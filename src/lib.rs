//! Rust Marks Library
//!
//! This crate provides a full-screen terminal picker for directory
//! bookmarks. Bookmarks are kept one per line in `~/.bookmarks`; the picked
//! directory (or the current one, when nothing is picked) is written to
//! `~/.bookmarks_res` for a wrapping shell function to `cd` into.
//!
//! # Key Features
//!
//! - **Fuzzy Ranking**: Bookmarks are re-ranked by similarity on every keystroke
//! - **Editing In Place**: Add the current directory or remove the selected entry
//! - **Always Persisted**: The bookmark list is saved on every exit
//!
//! # Architecture
//!
//! - [`file_handling`]: Reading and writing the bookmarks and result files
//! - [`ranking`]: Fuzzy scoring and ordering of bookmarks
//! - [`selection`]: Picker state, key bindings and terminal drawing
//! - [`session`]: Loading at startup and persisting at exit
//!
//! # Examples
//!
//! ```bash
//! # Shell function wrapping the picker
//! bmcd() { bm && cd "$(cat ~/.bookmarks_res)"; }
//!
//! # Use other files
//! bm --bookmarks-path ~/work/.bookmarks --result-path /tmp/picked
//! ```

pub mod cli_args;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod ranking;
pub mod selection;
pub mod session;
