//! Debounced values
//!
//! Holds back a rapidly-changing value until it has stayed unchanged for a
//! quiet period. The host event loop drives it with explicit timestamps.

mod debouncer;

pub use debouncer::Debouncer;
