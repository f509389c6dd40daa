//! Option list navigation
//!
//! A two-state machine, `Closed` and `Open(selected)`, driven by list
//! actions and pointer events. The selected index is always either `None`
//! or a valid position in the current options.

use super::action::ListAction;
use crate::scroll::ScrollState;

/// Rows shown before the list scrolls
pub const MAX_VISIBLE_OPTIONS: u16 = 8;

/// Input to the option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Key(ListAction),
    /// Pointer moved over the option at this index
    Hover(usize),
    /// Pointer clicked the option at this index
    Click(usize),
    /// Pointer left the list area
    Leave,
}

/// What the host has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// Nothing changed
    Unchanged,
    /// Keyboard moved the highlight; the row has been scrolled into view
    Moved(usize),
    /// Pointer changed the highlight
    Hovered(Option<usize>),
    /// The option at this index was chosen; the list is already closed
    Selected(usize),
    /// Escape: the host clears the input
    Dismissed,
}

/// Navigation state for the option popup
#[derive(Debug, Clone)]
pub struct AutocompleteState {
    visible: bool,
    selected: Option<usize>,
    option_count: usize,
    /// Option rows the popup can actually show
    viewport_rows: u16,
    scroll: ScrollState,
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: None,
            option_count: 0,
            viewport_rows: MAX_VISIBLE_OPTIONS,
            scroll: ScrollState::new(),
        }
    }

    /// Show the list with nothing highlighted (text was typed)
    pub fn open(&mut self) {
        self.visible = true;
        self.selected = None;
        self.scroll.reset();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset as usize
    }

    /// Adopt a new option count, clamping the highlight to it
    pub fn sync_options(&mut self, count: usize) {
        self.option_count = count;
        self.selected = match self.selected {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
        self.scroll.update_bounds(count, self.viewport_rows);
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Fit the scroll window to the rows the popup has room for
    ///
    /// Capped at [`MAX_VISIBLE_OPTIONS`]. The highlighted option is kept in
    /// view.
    pub fn set_viewport(&mut self, rows: u16) {
        let rows = rows.min(MAX_VISIBLE_OPTIONS);
        if rows == self.viewport_rows {
            return;
        }
        self.viewport_rows = rows;
        self.scroll.update_bounds(self.option_count, rows);
        if let Some(index) = self.selected {
            self.scroll.ensure_visible(index);
        }
    }

    /// Option shown on `row` of the list body, accounting for scroll
    pub fn option_at_row(&self, row: u16) -> Option<usize> {
        let index = self.scroll_offset() + row as usize;
        (row < self.viewport_rows && index < self.option_count).then_some(index)
    }

    pub fn handle(&mut self, event: ListEvent) -> ListOutcome {
        match event {
            ListEvent::Key(ListAction::Down) => self.move_down(),
            ListEvent::Key(ListAction::Up) => self.move_up(),
            ListEvent::Key(ListAction::Enter) => match self.selected {
                Some(index) => self.commit(index),
                None => ListOutcome::Unchanged,
            },
            ListEvent::Key(ListAction::Escape) => {
                self.selected = None;
                ListOutcome::Dismissed
            }
            ListEvent::Hover(index) => {
                if !self.visible || index >= self.option_count || self.selected == Some(index) {
                    return ListOutcome::Unchanged;
                }
                self.selected = Some(index);
                ListOutcome::Hovered(Some(index))
            }
            ListEvent::Click(index) => self.commit(index),
            ListEvent::Leave => {
                if self.selected.take().is_none() {
                    return ListOutcome::Unchanged;
                }
                ListOutcome::Hovered(None)
            }
        }
    }

    fn move_down(&mut self) -> ListOutcome {
        if !self.visible {
            return ListOutcome::Unchanged;
        }
        let next = self.selected.map_or(0, |i| i + 1);
        if next >= self.option_count {
            return ListOutcome::Unchanged;
        }
        self.selected = Some(next);
        self.scroll.ensure_visible(next);
        ListOutcome::Moved(next)
    }

    fn move_up(&mut self) -> ListOutcome {
        match self.selected {
            Some(current) if self.visible && current > 0 => {
                let prev = current - 1;
                self.selected = Some(prev);
                self.scroll.ensure_visible(prev);
                ListOutcome::Moved(prev)
            }
            _ => ListOutcome::Unchanged,
        }
    }

    fn commit(&mut self, index: usize) -> ListOutcome {
        if !self.visible || index >= self.option_count {
            return ListOutcome::Unchanged;
        }
        self.close();
        ListOutcome::Selected(index)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
