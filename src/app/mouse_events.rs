//! Mouse handling for the option popup
//!
//! Hovering an option highlights it, clicking commits it, and leaving the
//! popup clears the highlight.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::autocomplete::ListEvent;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse, now),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse, now),
            _ => {}
        }
    }

    fn handle_hover(&mut self, mouse: MouseEvent, now: Instant) {
        match self.list_row_at(mouse) {
            Some(row) => {
                self.pointer_in_list = true;
                if let Some(index) = self.search.list().option_at_row(row) {
                    self.search.handle_list_event(ListEvent::Hover(index), now);
                }
            }
            None if self.pointer_in_list => {
                self.pointer_in_list = false;
                self.search.handle_list_event(ListEvent::Leave, now);
            }
            None => {}
        }
    }

    fn handle_click(&mut self, mouse: MouseEvent, now: Instant) {
        let index = self
            .list_row_at(mouse)
            .and_then(|row| self.search.list().option_at_row(row));
        if let Some(index) = index {
            self.search.handle_list_event(ListEvent::Click(index), now);
            self.pointer_in_list = false;
        }
    }

    /// Row inside the popup's border under the pointer, if any
    fn list_row_at(&self, mouse: MouseEvent) -> Option<u16> {
        if !self.search.list().is_visible() {
            return None;
        }
        let area = self.list_area?;

        let inner_x = area.x.saturating_add(1);
        let inner_y = area.y.saturating_add(1);
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);

        if mouse.column < inner_x
            || mouse.column >= inner_x.saturating_add(inner_width)
            || mouse.row < inner_y
            || mouse.row >= inner_y.saturating_add(inner_height)
        {
            return None;
        }

        Some(mouse.row - inner_y)
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
