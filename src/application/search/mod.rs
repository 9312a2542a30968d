//! Debounced model search plus immediate view commands.
mod command;
mod debounce;

pub use command::{SearchLine, ViewCommand};
pub use debounce::{normalize_query, SearchDebouncer, SearchEvent, SearchInput, SearchSubscription};
