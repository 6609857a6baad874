use std::fmt::Display;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, queue, terminal, ExecutableCommand};
use log::debug;

use super::input::{handle_key_event, handle_mouse_event};
use super::types::{LoopExit, PickerState, ViewportState};
use super::{ADD_BOOKMARK_KEY, LIST_TOP_ROW, REMOVE_BOOKMARK_KEY};
use crate::error::Result;
use crate::ranking::match_indices;

const SEARCH_PROMPT: &str = " Search Pattern: ";

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Builds the initial viewport from the current terminal size.
///
/// # Errors
///
/// Fails if the terminal size cannot be queried.
pub fn initial_viewport() -> Result<ViewportState> {
    let (width, height) = terminal::size()?;

    Ok(ViewportState {
        offset: 0,
        height: height.saturating_sub(LIST_TOP_ROW),
        width,
    })
}

/// Runs the picker until the user confirms or leaves.
///
/// All edits are made on `state`, so they survive an early return through
/// an error. Raw mode, the alternate screen and mouse capture are always
/// restored.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or read from.
pub fn prompt_for_bookmark(state: &mut PickerState, cwd: &str) -> Result<LoopExit> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(EnableMouseCapture)?;

    let mut drawn_state: Option<PickerState> = None;
    let mut pressed_row: Option<u16> = None;

    loop {
        if drawn_state.as_ref() != Some(&*state) {
            redraw_ui(&mut stdout, state)?;
            drawn_state = Some(state.clone());
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let exit = match event::read()? {
            Event::Key(key_event) => handle_key_event(key_event, state, cwd),
            Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, state, &mut pressed_row),
            Event::Resize(width, height) => {
                state.resize(width, height.saturating_sub(LIST_TOP_ROW));
                // Terminal contents are not reliable after a resize
                drawn_state = None;
                None
            }
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        };

        if let Some(exit) = exit {
            debug!("Picker finished with {exit:?}");
            return Ok(exit);
        }
    }
}

fn redraw_ui(stdout: &mut Stdout, state: &PickerState) -> Result<()> {
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(stdout, state)?;

    if state.filtered.is_empty() {
        queue!(
            stdout,
            MoveTo(0, LIST_TOP_ROW),
            SetForegroundColor(Color::Red),
            Print(format!("No bookmarks! Press `{ADD_BOOKMARK_KEY}` to add the current directory.")),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        print_bookmarks_with_selection(stdout, state)?;
    }

    print_search_line(stdout, state)?;

    stdout.flush()?;
    Ok(())
}

/// Print the header bar with the key bindings and the position counter
fn print_header(stdout: &mut Stdout, state: &PickerState) -> Result<()> {
    let width = usize::from(state.viewport.width);
    let count = state.filtered.len();
    let position = if count == 0 { 0 } else { state.selected_index + 1 };

    let left_padding = "  ";
    let instructions = format!(
        "enter: Go   |   {ADD_BOOKMARK_KEY}: Add cwd   |   {REMOVE_BOOKMARK_KEY}: Remove   |   esc: Quit   |   {}/{}",
        pad_to_width_of(position, count),
        count
    );

    let content = truncate_to_width(&format!("{left_padding}{instructions}"), width);
    let right_padding = " ".repeat(width.saturating_sub(content.chars().count()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(content),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print the search line and leave the cursor at the end of the query
fn print_search_line(stdout: &mut Stdout, state: &PickerState) -> Result<()> {
    queue!(
        stdout,
        MoveTo(0, 1),
        Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Bold),
        Print(SEARCH_PROMPT),
        SetAttribute(Attribute::Reset),
        Print(&state.query),
    )?;

    let column = SEARCH_PROMPT.chars().count() + state.query.chars().count();
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    queue!(stdout, MoveTo(column.min(state.viewport.width.saturating_sub(1)), 1))?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

fn truncate_to_width(content: &str, width: usize) -> String {
    content.chars().take(width).collect()
}

/// Print all visible bookmarks with the selected one highlighted
fn print_bookmarks_with_selection(stdout: &mut Stdout, state: &PickerState) -> Result<()> {
    let viewport = &state.viewport;

    let visible_bookmarks = state
        .filtered
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(usize::from(viewport.height));

    for (row, (index, bookmark)) in (LIST_TOP_ROW..).zip(visible_bookmarks) {
        let is_selected = index == state.selected_index;
        write_bookmark_row(stdout, row, bookmark, &state.query, is_selected, viewport.width)?;
    }

    Ok(())
}

/// Write one bookmark row, highlighting the characters that match the query
fn write_bookmark_row(
    stdout: &mut Stdout,
    row: u16,
    bookmark: &str,
    query: &str,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let (marker, base_background, base_foreground) = if is_selected {
        ("> ", DarkBlue, Yellow)
    } else {
        ("  ", Reset, Reset)
    };

    queue!(
        stdout,
        SetBackgroundColor(base_background),
        SetForegroundColor(base_foreground),
    )?;
    if is_selected {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }

    let content = truncate_to_width(&format!("{marker}{bookmark}"), usize::from(terminal_width));
    let marker_len = marker.chars().count();
    let highlighted = match_indices(query, bookmark);

    for (position, c) in content.chars().enumerate() {
        let is_match = position >= marker_len && highlighted.contains(&(position - marker_len));
        if is_match {
            queue!(stdout, SetAttribute(Attribute::Underlined), SetForegroundColor(Color::Cyan))?;
        }
        queue!(stdout, Print(c))?;
        if is_match {
            queue!(
                stdout,
                SetAttribute(Attribute::NoUnderline),
                SetForegroundColor(base_foreground),
            )?;
        }
    }

    let padding = usize::from(terminal_width).saturating_sub(content.chars().count());
    queue!(
        stdout,
        Print(" ".repeat(padding)),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(3, 120), "  3");
        assert_eq!(pad_to_width_of(42, 9), "42");
        assert_eq!(pad_to_width_of(0, 0), "0");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("/a/project", 4), "/a/p");
        assert_eq!(truncate_to_width("/a", 10), "/a");
        assert_eq!(truncate_to_width("/ünï", 3), "/ün");
        assert_eq!(truncate_to_width("/a", 0), "");
    }
}
