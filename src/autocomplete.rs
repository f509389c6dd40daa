//! Autocomplete option list
//!
//! Keyboard and pointer navigation over a list of options, plus the popup
//! that renders them with the query highlighted.

mod action;
pub mod autocomplete_render;
mod autocomplete_state;
mod view;

pub use action::ListAction;
pub use autocomplete_state::{AutocompleteState, ListEvent, ListOutcome, MAX_VISIBLE_OPTIONS};
pub use view::AutocompleteView;
