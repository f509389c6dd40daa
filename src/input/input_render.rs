//! Input field rendering
//!
//! Draws the search field with a loading indicator in the top-right border.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::search::SearchState;

const LOADING_LABEL: &str = " Loading… ";

/// Render the search field
pub fn render_field(search: &SearchState, frame: &mut Frame, area: Rect) {
    let loading = search.view().loading_visible();

    let border_color = if search.list().is_visible() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if loading {
        block = block.title_top(
            Line::from(Span::styled(LOADING_LABEL, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&search.input().textarea, inner);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
