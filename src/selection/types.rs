//! Type definitions for the bookmark picker and its state.
//!
//! [`PickerState`] is the single owner of everything the picker mutates.
//! Event handlers receive it by `&mut` and the drawing code by `&`.

use crate::ranking::rank_bookmarks;

/// How the interactive loop ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopExit {
    /// The user picked the selected bookmark.
    Confirmed,
    /// The user left without picking; the caller falls back to the current directory.
    Aborted,
}

/// Direction to move the selection in the list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Visible window of the bookmark list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete state of one picker session.
#[derive(Clone, PartialEq, Debug)]
pub struct PickerState {
    /// Current search text
    pub query: String,
    /// Full bookmark list in insertion order, persisted on exit
    pub bookmarks: Vec<String>,
    /// `bookmarks` ranked against `query`
    pub filtered: Vec<String>,
    /// Index into `filtered`
    pub selected_index: usize,
    pub viewport: ViewportState,
}

impl PickerState {
    /// Starts with the list in file order; ranking begins with the first query edit.
    #[must_use]
    pub fn new(bookmarks: Vec<String>, viewport: ViewportState) -> Self {
        let mut state = Self {
            query: String::new(),
            filtered: bookmarks.clone(),
            bookmarks,
            selected_index: 0,
            viewport,
        };
        state.clamp_selection();
        state
    }

    /// Re-ranks the full list against the query and re-clamps the selection.
    pub fn refilter(&mut self) {
        self.filtered = rank_bookmarks(&self.query, &self.bookmarks);
        self.clamp_selection();
    }

    /// Bookmark under the selection, if the filtered view is not empty.
    #[must_use]
    pub fn selected_bookmark(&self) -> Option<&str> {
        self.filtered.get(self.selected_index).map(String::as_str)
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
        self.refilter();
    }

    /// Removes the last query character. Returns false if the query was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }

        self.selected_index = 0;
        self.refilter();
        true
    }

    /// Removes the selected bookmark from the full list.
    ///
    /// Returns the removed entry, or `None` when nothing is selected.
    pub fn remove_selected(&mut self) -> Option<String> {
        let target = self.selected_bookmark()?;
        let position = self.bookmarks.iter().position(|b| b == target)?;
        let removed = self.bookmarks.remove(position);
        self.refilter();
        Some(removed)
    }

    /// Appends `path` unless it is already bookmarked. Returns whether it was added.
    pub fn add_bookmark(&mut self, path: &str) -> bool {
        if self.bookmarks.iter().any(|b| b == path) {
            return false;
        }

        self.bookmarks.push(path.to_string());
        self.refilter();
        true
    }

    /// Moves the selection by `steps`, stopping at either end of the list.
    pub fn move_selection(&mut self, direction: CycleDirection, steps: usize) {
        let last = self.filtered.len().saturating_sub(1);

        self.selected_index = match direction {
            CycleDirection::Up => self.selected_index.saturating_sub(steps),
            CycleDirection::Down => self.selected_index.saturating_add(steps).min(last),
        };
        self.scroll_to_selection();
    }

    /// Selects the entry shown on `row` of the viewport.
    ///
    /// Returns false, leaving the selection alone, if no entry is shown there.
    pub fn select_visible_row(&mut self, row: usize) -> bool {
        if row >= usize::from(self.viewport.height) {
            return false;
        }

        let index = self.viewport.offset + row;
        if index >= self.filtered.len() {
            return false;
        }

        self.selected_index = index;
        true
    }

    pub fn resize(&mut self, width: u16, list_height: u16) {
        self.viewport.width = width;
        self.viewport.height = list_height;
        self.scroll_to_selection();
    }

    /// Number of entries a page movement skips.
    #[must_use]
    pub fn page_size(&self) -> usize {
        usize::from(self.viewport.height).max(1)
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.filtered.len().saturating_sub(1));
        self.scroll_to_selection();
    }

    fn scroll_to_selection(&mut self) {
        let height = self.page_size();
        let viewport = &mut self.viewport;

        // Don't leave blank rows at the bottom after the list shrinks
        viewport.offset = viewport
            .offset
            .min(self.filtered.len().saturating_sub(height));

        if self.selected_index < viewport.offset {
            viewport.offset = self.selected_index;
        } else if self.selected_index >= viewport.offset + height {
            viewport.offset = self.selected_index + 1 - height;
        }
    }
}
