//! Drink search controller
//!
//! Ties the search field to the debounced lookup and the option list.

mod search_state;

pub use search_state::SearchState;
