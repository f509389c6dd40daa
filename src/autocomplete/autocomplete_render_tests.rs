//! Tests for option popup rendering

use super::*;
use crate::autocomplete::{ListAction, ListEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 20;

fn label(s: &String) -> String {
    s.clone()
}

fn view<'a>(options: Option<&'a [String]>, debounced: &'a str) -> AutocompleteView<'a, String> {
    AutocompleteView {
        options,
        input_value: debounced,
        debounced_value: Some(debounced),
        loading: false,
        show_loading: None,
        placeholder: "",
        no_options_label: Some("No drinks"),
        get_option_label: label,
    }
}

fn render(view: &AutocompleteView<'_, String>, state: &AutocompleteState) -> (String, Option<Rect>) {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            let anchor = Rect::new(0, 0, TEST_WIDTH, 3);
            area = render_popup(view, state, f, anchor);
        })
        .unwrap();
    (terminal.backend().to_string(), area)
}

fn open_state(count: usize) -> AutocompleteState {
    let mut state = AutocompleteState::new();
    state.open();
    state.sync_options(count);
    state
}

fn drinks() -> Vec<String> {
    vec!["Margarita".to_string(), "Mary Pickford".to_string()]
}

#[test]
fn test_closed_list_renders_nothing() {
    let options = drinks();
    let state = AutocompleteState::new();
    let (_, area) = render(&view(Some(&options), "mar"), &state);
    assert_eq!(area, None);
}

#[test]
fn test_not_loaded_renders_nothing() {
    let state = open_state(0);
    let (_, area) = render(&view(None, "mar"), &state);
    assert_eq!(area, None);
}

#[test]
fn test_options_are_listed_below_anchor() {
    let options = drinks();
    let state = open_state(options.len());
    let (output, area) = render(&view(Some(&options), "mar"), &state);

    let area = area.expect("popup should render");
    assert_eq!(area.y, 3);
    assert_eq!(area.height, 4);
    assert!(output.contains("Margarita"));
    assert!(output.contains("Mary Pickford"));
}

#[test]
fn test_selected_option_has_marker() {
    let options = drinks();
    let mut state = open_state(options.len());
    state.handle(ListEvent::Key(ListAction::Down));
    state.handle(ListEvent::Key(ListAction::Down));

    let (output, _) = render(&view(Some(&options), "mar"), &state);
    let marked: Vec<&str> = output.lines().filter(|l| l.contains('►')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Mary Pickford"));
}

#[test]
fn test_empty_results_show_no_options_label() {
    let options: Vec<String> = Vec::new();
    let state = open_state(0);
    let (output, area) = render(&view(Some(&options), "xyz"), &state);

    assert!(area.is_some());
    assert!(output.contains("No drinks"));
}

#[test]
fn test_empty_results_for_empty_query_render_nothing() {
    let options: Vec<String> = Vec::new();
    let state = open_state(0);
    let (_, area) = render(&view(Some(&options), ""), &state);
    assert_eq!(area, None);
}

#[test]
fn test_long_lists_are_windowed() {
    let options: Vec<String> = (0..12).map(|i| format!("Drink {i:02}")).collect();
    let mut state = open_state(options.len());
    for _ in 0..10 {
        state.handle(ListEvent::Key(ListAction::Down));
    }

    let (output, area) = render(&view(Some(&options), "drink"), &state);
    assert_eq!(area.map(|a| a.height), Some(MAX_VISIBLE_OPTIONS + 2));
    assert!(output.contains("Drink 09"));
    assert!(!output.contains("Drink 00"));
    assert!(output.contains("3-10 of 12"));
}

#[test]
fn test_option_line_highlights_match() {
    let line = option_line("Gin Fizz", "fizz", false);
    let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["  ", "Gin ", "Fizz"]);
    assert_eq!(line.spans[2].style.fg, Some(Color::Yellow));
    assert!(line.spans[2].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(line.spans[1].style.fg, Some(Color::White));
}

#[test]
fn test_selected_line_style() {
    let line = option_line("Gin Fizz", "gin", true);
    assert_eq!(line.spans[0].content.as_ref(), SELECTED_MARKER);
    assert!(line.spans.iter().all(|s| s.style.bg == Some(Color::Cyan)));
    assert!(line.spans[1].style.add_modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_available_rows_in_short_terminal() {
    let anchor = Rect::new(0, 0, 40, 3);
    assert_eq!(available_rows(anchor, Rect::new(0, 0, 40, 10)), 5);
    assert_eq!(available_rows(anchor, Rect::new(0, 0, 40, 40)), MAX_VISIBLE_OPTIONS);
    assert_eq!(available_rows(anchor, Rect::new(0, 0, 40, 4)), 0);
}

#[test]
fn test_selection_stays_on_screen_in_short_terminal() {
    let options: Vec<String> = (0..8).map(|i| format!("Drink{i}")).collect();
    let mut state = open_state(options.len());
    let anchor = Rect::new(0, 0, 40, 3);
    state.set_viewport(available_rows(anchor, Rect::new(0, 0, 40, 10)));
    for _ in 0..8 {
        state.handle(ListEvent::Key(ListAction::Down));
    }
    assert_eq!(state.selected_index(), Some(7));

    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    terminal
        .draw(|f| {
            render_popup(&view(Some(&options), "drink"), &state, f, anchor);
        })
        .unwrap();
    let output = terminal.backend().to_string();

    let marked: Vec<&str> = output.lines().filter(|l| l.contains('►')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Drink7"));
    assert!(!output.contains("Drink2"));
    assert!(output.contains("4-8 of 8"));
}
