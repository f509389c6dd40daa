//! Option popup rendering
//!
//! Draws the option list directly below the search field, highlighting the
//! part of each label that matches the query.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{AutocompleteState, AutocompleteView, MAX_VISIBLE_OPTIONS};
use crate::highlight::highlight;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 24;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the option popup below `anchor`
///
/// Returns the area drawn, if any, so pointer events can be hit-tested
/// against it.
pub fn render_popup<T>(
    view: &AutocompleteView<'_, T>,
    state: &AutocompleteState,
    frame: &mut Frame,
    anchor: Rect,
) -> Option<Rect> {
    if !state.is_visible() {
        return None;
    }
    let options = view.options?;
    let rows = state
        .viewport_rows()
        .min(available_rows(anchor, frame.area())) as usize;

    let items: Vec<ListItem> = if options.is_empty() {
        if !view.shows_no_options() {
            return None;
        }
        vec![ListItem::new(Line::from(Span::styled(
            format!("{}{}", UNSELECTED_MARKER, view.no_options_label()),
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        let needle = view.highlight_needle();
        options
            .iter()
            .enumerate()
            .skip(state.scroll_offset())
            .take(rows)
            .map(|(i, option)| {
                let label = (view.get_option_label)(option);
                let selected = state.selected_index() == Some(i);
                ListItem::new(option_line(&label, needle, selected))
            })
            .collect()
    };

    let content_width = if options.is_empty() {
        view.no_options_label().width()
    } else {
        options
            .iter()
            .map(|o| (view.get_option_label)(o).width())
            .max()
            .unwrap_or(0)
    };
    let popup_width = (content_width.min(u16::MAX as usize) as u16)
        .saturating_add(POPUP_PADDING)
        .max(MIN_POPUP_WIDTH);
    let popup_height = (items.len() as u16) + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(anchor, frame.area(), popup_width, popup_height);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let title = if options.len() > rows {
        format!(
            " {}-{} of {} ",
            state.scroll_offset() + 1,
            (state.scroll_offset() + rows).min(options.len()),
            options.len()
        )
    } else {
        String::new()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

/// Option rows that fit between `anchor` and the bottom of `bounds`
pub fn available_rows(anchor: Rect, bounds: Rect) -> u16 {
    popup::popup_below_anchor(anchor, bounds, anchor.width, u16::MAX)
        .height
        .saturating_sub(POPUP_BORDER_HEIGHT)
        .min(MAX_VISIBLE_OPTIONS)
}

/// One option row: selection marker plus highlighted label
fn option_line(label: &str, needle: &str, selected: bool) -> Line<'static> {
    let (base, marker) = if selected {
        (
            Style::default().fg(Color::Black).bg(Color::Cyan),
            SELECTED_MARKER,
        )
    } else {
        (Style::default().fg(Color::White).bg(Color::Black), UNSELECTED_MARKER)
    };
    let matched = if selected {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(marker, base)];
    spans.extend(highlight(label, needle).into_iter().map(|segment| {
        let style = if segment.is_match { matched } else { base };
        Span::styled(segment.text.to_string(), style)
    }));
    Line::from(spans)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
