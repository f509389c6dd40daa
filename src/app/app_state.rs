use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::search::SearchState;

/// Application state
pub struct App {
    pub search: SearchState,
    should_quit: bool,
    /// Where the option popup was last drawn, for pointer hit testing
    pub(super) list_area: Option<Rect>,
    /// Whether the pointer was inside the popup on the last move
    pub(super) pointer_in_list: bool,
}

impl App {
    pub fn new(search: SearchState) -> Self {
        Self {
            search,
            should_quit: false,
            list_area: None,
            pointer_in_list: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Advance timers and collect lookup results
    pub fn tick(&mut self, now: Instant) {
        self.search.tick(now);
    }

    /// How long the event loop may wait for input before ticking again
    ///
    /// Capped at `max` so lookup results are picked up while idle.
    pub fn next_wakeup(&self, now: Instant, max: Duration) -> Duration {
        self.search
            .next_deadline(now)
            .map_or(max, |due| due.min(max))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
