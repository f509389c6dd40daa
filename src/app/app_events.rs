//! Terminal event dispatch

use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only process key press events (avoid duplicates on Windows)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) => self.handle_paste_event(&text, now),
            _ => {}
        }
    }

    /// Handle a key press
    ///
    /// Ctrl+C quits; everything else belongs to the search controller.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        self.search.handle_key(key, now);
    }

    /// Append pasted text to the query
    pub fn handle_paste_event(&mut self, text: &str, now: Instant) {
        let query = format!("{}{}", self.search.query(), text);
        self.search.set_query(&query, now);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
