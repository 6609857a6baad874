//! Keyboard and mouse handling for the picker.
//!
//! These functions only touch [`PickerState`]; drawing happens elsewhere.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};

use super::types::CycleDirection::{Down, Up};
use super::types::{LoopExit, PickerState};
use super::{ADD_BOOKMARK_KEY, LIST_TOP_ROW, REMOVE_BOOKMARK_KEY};

/// Applies a key press to the picker state.
///
/// Returns `Some` when the key ends the loop.
pub fn handle_key_event(key_event: KeyEvent, state: &mut PickerState, cwd: &str) -> Option<LoopExit> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let is_control = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Enter => Some(LoopExit::Confirmed),
        KeyCode::Esc => Some(LoopExit::Aborted),
        KeyCode::Char('c' | 'd') if is_control => Some(LoopExit::Aborted),
        KeyCode::Up => {
            state.move_selection(Up, 1);
            None
        }
        KeyCode::Down => {
            state.move_selection(Down, 1);
            None
        }
        KeyCode::PageUp => {
            state.move_selection(Up, state.page_size());
            None
        }
        KeyCode::PageDown => {
            state.move_selection(Down, state.page_size());
            None
        }
        KeyCode::Backspace => {
            state.pop_query_char();
            None
        }
        KeyCode::Char(REMOVE_BOOKMARK_KEY) => {
            match state.remove_selected() {
                Some(removed) => info!("Removed bookmark `{removed}`"),
                None => debug!("Nothing selected to remove"),
            }
            None
        }
        KeyCode::Char(ADD_BOOKMARK_KEY) => {
            if state.add_bookmark(cwd) {
                info!("Added bookmark `{cwd}`");
            } else {
                debug!("`{cwd}` is already bookmarked");
            }
            None
        }
        KeyCode::Char(c) if !is_control => {
            state.push_query_char(c);
            None
        }
        _ => None,
    }
}

/// Applies a mouse event to the picker state.
///
/// A left click selects the row under the pointer on press and confirms it
/// on release over the same row. `pressed_row` carries the press between calls.
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    state: &mut PickerState,
    pressed_row: &mut Option<u16>,
) -> Option<LoopExit> {
    if mouse_event.modifiers != KeyModifiers::NONE {
        return None;
    }

    match mouse_event.kind {
        MouseEventKind::ScrollUp => state.move_selection(Up, 1),
        MouseEventKind::ScrollDown => state.move_selection(Down, 1),
        MouseEventKind::Down(MouseButton::Left) => {
            *pressed_row = None;
            if let Some(list_row) = mouse_event.row.checked_sub(LIST_TOP_ROW) {
                if state.select_visible_row(usize::from(list_row)) {
                    *pressed_row = Some(mouse_event.row);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if pressed_row.take() == Some(mouse_event.row) {
                return Some(LoopExit::Confirmed);
            }
        }
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::types::ViewportState;
    use crossterm::event::KeyEventState;

    const CWD: &str = "/home/user/work";

    fn state_with(items: &[&str]) -> PickerState {
        PickerState::new(
            items.iter().map(ToString::to_string).collect(),
            ViewportState {
                offset: 0,
                height: 5,
                width: 80,
            },
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_confirms() {
        let mut state = state_with(&["/a"]);
        assert_eq!(handle_key_event(press(KeyCode::Enter), &mut state, CWD), Some(LoopExit::Confirmed));
    }

    #[test]
    fn test_escape_and_ctrl_c_abort() {
        let mut state = state_with(&["/a"]);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut state, CWD), Some(LoopExit::Aborted));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut state, CWD), Some(LoopExit::Aborted));
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_typing_edits_query() {
        let mut state = state_with(&["/b/tool", "/a/project"]);
        for c in "proj".chars() {
            assert_eq!(handle_key_event(press(KeyCode::Char(c)), &mut state, CWD), None);
        }
        assert_eq!(state.query, "proj");
        assert_eq!(state.selected_bookmark(), Some("/a/project"));

        handle_key_event(press(KeyCode::Backspace), &mut state, CWD);
        assert_eq!(state.query, "pro");
    }

    #[test]
    fn test_plus_and_minus_do_not_edit_query() {
        let mut state = state_with(&["/a"]);
        handle_key_event(press(KeyCode::Char('+')), &mut state, CWD);
        handle_key_event(press(KeyCode::Char('+')), &mut state, CWD);
        assert!(state.query.is_empty());
        assert_eq!(state.bookmarks, vec!["/a", CWD]);

        handle_key_event(press(KeyCode::Char('-')), &mut state, CWD);
        assert!(state.query.is_empty());
        assert_eq!(state.bookmarks, vec![CWD]);
    }

    #[test]
    fn test_minus_on_empty_list() {
        let mut state = state_with(&[]);
        assert_eq!(handle_key_event(press(KeyCode::Char('-')), &mut state, CWD), None);
        assert!(state.bookmarks.is_empty());
    }

    #[test]
    fn test_arrows_and_pages() {
        let mut state = state_with(&["/0", "/1", "/2", "/3", "/4", "/5", "/6", "/7"]);
        handle_key_event(press(KeyCode::Down), &mut state, CWD);
        assert_eq!(state.selected_index, 1);

        handle_key_event(press(KeyCode::PageDown), &mut state, CWD);
        assert_eq!(state.selected_index, 6);

        handle_key_event(press(KeyCode::PageDown), &mut state, CWD);
        assert_eq!(state.selected_index, 7);

        handle_key_event(press(KeyCode::PageUp), &mut state, CWD);
        assert_eq!(state.selected_index, 2);

        handle_key_event(press(KeyCode::Up), &mut state, CWD);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = state_with(&["/a"]);
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release, &mut state, CWD), None);
    }

    #[test]
    fn test_other_control_chords_are_ignored() {
        let mut state = state_with(&["/a"]);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_a, &mut state, CWD), None);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_click_selects_and_confirms() {
        let mut state = state_with(&["/0", "/1", "/2"]);
        let mut pressed_row = None;

        let row = LIST_TOP_ROW + 2;
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), row), &mut state, &mut pressed_row), None);
        assert_eq!(state.selected_index, 2);
        assert_eq!(pressed_row, Some(row));

        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), row), &mut state, &mut pressed_row),
            Some(LoopExit::Confirmed)
        );
        assert_eq!(pressed_row, None);
    }

    #[test]
    fn test_click_on_header_does_nothing() {
        let mut state = state_with(&["/0", "/1"]);
        let mut pressed_row = None;

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0), &mut state, &mut pressed_row);
        assert_eq!(pressed_row, None);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0), &mut state, &mut pressed_row),
            None
        );
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_drag_to_other_row_does_not_confirm() {
        let mut state = state_with(&["/0", "/1", "/2"]);
        let mut pressed_row = None;

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), LIST_TOP_ROW), &mut state, &mut pressed_row);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), LIST_TOP_ROW + 1), &mut state, &mut pressed_row),
            None
        );
    }

    #[test]
    fn test_scroll_moves_selection() {
        let mut state = state_with(&["/0", "/1"]);
        let mut pressed_row = None;

        handle_mouse_event(mouse(MouseEventKind::ScrollDown, 3), &mut state, &mut pressed_row);
        assert_eq!(state.selected_index, 1);
        handle_mouse_event(mouse(MouseEventKind::ScrollUp, 3), &mut state, &mut pressed_row);
        assert_eq!(state.selected_index, 0);
    }
}
