use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};
use rust_marks::cli_args::Args;
use rust_marks::config::{self, SessionPaths};
use rust_marks::error::Result;
use rust_marks::selection::ui::initial_viewport;
use rust_marks::selection::{prompt_for_bookmark, LoopExit, PickerState, ViewportState};
use rust_marks::session;

/// Viewport used when the terminal size cannot be read
fn fallback_viewport() -> ViewportState {
    ViewportState {
        offset: 0,
        height: 22,
        width: 80,
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let paths = SessionPaths::resolve(&args.bookmarks_path, &args.result_path);
    debug!("Bookmarks path: `{}`, result path: `{}`", paths.bookmarks_path, paths.result_path);

    let cwd = config::current_directory()?;
    let loaded = session::load_bookmarks(&paths);

    let viewport = initial_viewport().unwrap_or_else(|e| {
        warn!("Could not read terminal size: {e}");
        fallback_viewport()
    });
    let mut state = PickerState::new(loaded.bookmarks, viewport);

    // A broken terminal still ends in a normal exit so edits and the result get written
    let exit = match prompt_for_bookmark(&mut state, &cwd) {
        Ok(exit) => exit,
        Err(e) => {
            error!("{e}");
            LoopExit::Aborted
        }
    };

    match session::finish_session(&paths, &state, exit, &cwd, loaded.can_overwrite) {
        Ok(result) => info!("Picked `{result}`"),
        Err(e) => warn!("{e}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
