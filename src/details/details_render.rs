//! Details panel rendering
//!
//! Shows the selected drink: name, category, recipe lines and instructions.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::drink::{Drink, recipe_lines};
use crate::widgets::popup;

const EMPTY_HINT: &str = "Type to search, ↑/↓ to move, Enter to pick a drink.";

/// Render the details panel for `drink`, or a hint when nothing is selected
pub fn render_details(drink: Option<&Drink>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = popup::inset_rect(block.inner(area), 1, 0);
    frame.render_widget(block, area);

    let text = match drink {
        Some(drink) => details_text(drink),
        None => Text::from(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        ))),
    };

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn details_text(drink: &Drink) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        drink.name.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    let tags: Vec<&str> = [drink.category.as_str(), drink.alcoholic.as_str()]
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect();
    if !tags.is_empty() {
        lines.push(Line::from(Span::styled(
            tags.join(" · "),
            Style::default().fg(Color::Gray),
        )));
    }

    let recipe = recipe_lines(drink);
    if !recipe.is_empty() {
        lines.push(Line::default());
        lines.extend(
            recipe
                .into_iter()
                .map(|item| Line::from(vec![Span::raw("• "), Span::raw(item)])),
        );
    }

    if !drink.instructions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(drink.instructions.clone()));
    }

    if !drink.thumb.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            drink.thumb.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Text::from(lines)
}
