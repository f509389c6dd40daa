pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod details;
pub mod drink;
pub mod error;
pub mod fetch;
pub mod highlight;
pub mod input;
pub mod scroll;
pub mod search;
pub mod widgets;
