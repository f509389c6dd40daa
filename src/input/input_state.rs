use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Keep only ASCII letters, digits, underscore and space
///
/// Everything else is dropped silently; the lookup key is built from what
/// remains.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .collect()
}

/// Creates a single-line TextArea for the search field
fn create_textarea(placeholder: &str, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

/// Search field state
pub struct InputState {
    pub textarea: TextArea<'static>,
    placeholder: String,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        Self {
            textarea: create_textarea(placeholder, ""),
            placeholder: placeholder.to_string(),
        }
    }

    /// Current raw input text
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea = create_textarea(&self.placeholder, text);
    }

    /// Feed a key to the text field and sanitize the result
    ///
    /// Returns true if the key was an edit (even one that sanitization then
    /// undid).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.textarea.input(key) {
            return false;
        }
        self.apply_sanitize();
        true
    }

    fn apply_sanitize(&mut self) {
        let joined = self.textarea.lines().concat();
        let clean = sanitize(&joined);
        if clean != joined || self.textarea.lines().len() > 1 {
            self.set_text(&clean);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};
    use proptest::prelude::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_new_input_state() {
        let state = InputState::new("Search for a drink...");
        assert_eq!(state.text(), "");
        assert_eq!(state.placeholder(), "Search for a drink...");
    }

    #[test]
    fn test_typing_appends() {
        let mut state = InputState::new("");
        assert!(state.handle_key(key(KeyCode::Char('m'))));
        assert!(state.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(state.text(), "ma");
    }

    #[test]
    fn test_disallowed_char_is_stripped() {
        let mut state = InputState::new("");
        state.set_text("gin");
        assert!(state.handle_key(key(KeyCode::Char('!'))));
        assert_eq!(state.text(), "gin");
    }

    #[test]
    fn test_backspace() {
        let mut state = InputState::new("");
        state.set_text("rum");
        assert!(state.handle_key(key(KeyCode::Backspace)));
        assert_eq!(state.text(), "ru");
    }

    #[test]
    fn test_cursor_movement_is_not_an_edit() {
        let mut state = InputState::new("");
        state.set_text("rum");
        assert!(!state.handle_key(key(KeyCode::Left)));
        assert_eq!(state.text(), "rum");
    }

    #[test]
    fn test_newline_is_collapsed() {
        let mut state = InputState::new("");
        state.set_text("gin");
        state.handle_key(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));
        assert_eq!(state.textarea.lines().len(), 1);
        assert_eq!(state.text(), "gin");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut state = InputState::new("");
        state.set_text("Margarita");
        assert_eq!(state.textarea.cursor(), (0, 9));
    }

    #[test]
    fn test_sanitize_examples() {
        assert_eq!(sanitize("Piña Colada!"), "Pia Colada");
        assert_eq!(sanitize("old_fashioned 2"), "old_fashioned 2");
        assert_eq!(sanitize("a.*b"), "ab");
        assert_eq!(sanitize("tab\there"), "tabhere");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_sanitize_keeps_only_word_chars_and_spaces(text in "\\PC{0,40}") {
            let clean = sanitize(&text);
            prop_assert!(clean.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' '));
            prop_assert_eq!(sanitize(&clean), clean.clone());
        }
    }
}
