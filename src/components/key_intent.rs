//! Key Intent
//!
//! What a keystroke means to a title input.

use crate::constants::{ENTER_KEY, ESCAPE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Save the typed title
    Commit,
    /// Abandon the edit
    Cancel,
    Other,
}

impl KeyIntent {
    /// Classify a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            ENTER_KEY => KeyIntent::Commit,
            ESCAPE_KEY => KeyIntent::Cancel,
            _ => KeyIntent::Other,
        }
    }
}
