//! Application Constants

/// Local storage key holding the serialized application state
pub const STORAGE_KEY: &str = "todos-leptos";

/// `KeyboardEvent.key` that commits a new or edited title
pub const ENTER_KEY: &str = "Enter";

/// `KeyboardEvent.key` that aborts an edit
pub const ESCAPE_KEY: &str = "Escape";

/// Every filter fragment starts with this, e.g. `#/active`
pub const FRAGMENT_PREFIX: &str = "#/";
