use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::autocomplete::autocomplete_render;
use crate::details::details_render;
use crate::input::input_render;

const KEY_HINTS: &str = " ↑/↓ move · Enter select · Esc clear · Ctrl+C quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, details_area, status_area) = (layout[0], layout[1], layout[2]);

        input_render::render_field(&self.search, frame, input_area);
        details_render::render_details(self.search.selected_drink(), frame, details_area);
        self.render_status_line(frame, status_area);

        // Popup last so it draws over the details panel
        self.search
            .fit_list_viewport(autocomplete_render::available_rows(input_area, frame.area()));
        self.list_area = autocomplete_render::render_popup(
            &self.search.view(),
            self.search.list(),
            frame,
            input_area,
        );
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = match self.search.error() {
            Some(error) => Line::from(Span::styled(
                format!(" ⚠ {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
