use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// Keys the option list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Up,
    Down,
    Enter,
    Escape,
}

impl ListAction {
    /// Map a key press to a list action
    ///
    /// Modified keys (Ctrl/Alt/Shift) are left to the text field.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.modifiers.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Up => Some(ListAction::Up),
            KeyCode::Down => Some(ListAction::Down),
            KeyCode::Enter => Some(ListAction::Enter),
            KeyCode::Esc => Some(ListAction::Escape),
            _ => None,
        }
    }
}
