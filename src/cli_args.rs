//! Command-line argument parsing.

use clap::Parser;

/// Command-line arguments for the `bm` bookmark picker.
///
/// Without arguments the picker uses `~/.bookmarks` and `~/.bookmarks_res`.
/// A wrapping shell function is expected to `cd` into the contents of the
/// result file once `bm` exits.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the bookmarks file, one path per line.
    ///
    /// If not provided, defaults to `~/.bookmarks`.
    #[arg(long, short = 'b')]
    pub bookmarks_path: Option<String>,

    /// Path to the file that receives the picked directory.
    ///
    /// If not provided, defaults to `~/.bookmarks_res`.
    #[arg(long, short = 'r')]
    pub result_path: Option<String>,
}
