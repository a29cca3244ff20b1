//! Fragment Routing
//!
//! Maps `#/<mode>` in the URL to the store's filter mode.

use leptos::ev;
use leptos::prelude::*;

use crate::constants::FRAGMENT_PREFIX;
use crate::models::FilterMode;
use crate::store::{Action, TodoStore};

/// Filter for a `location.hash` value. Unknown modes fall back to `All`.
pub fn filter_from_fragment(hash: &str) -> FilterMode {
    let segment = hash
        .strip_prefix(FRAGMENT_PREFIX)
        .or_else(|| hash.strip_prefix('#'))
        .unwrap_or(hash);
    FilterMode::parse(segment).unwrap_or(FilterMode::All)
}

/// Href of the footer link for `mode`
pub fn fragment_for(mode: FilterMode) -> String {
    match mode {
        FilterMode::All => FRAGMENT_PREFIX.to_string(),
        other => format!("{}{}", FRAGMENT_PREFIX, other.as_str()),
    }
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Apply the current fragment and keep following `hashchange`.
///
/// An empty fragment at startup keeps the persisted filter.
pub fn sync_filter_with_location(store: TodoStore) {
    let initial = current_fragment();
    if !initial.is_empty() {
        store.dispatch(Action::SetFilter(filter_from_fragment(&initial)));
    }

    let handle = window_event_listener(ev::hashchange, move |_| {
        let hash = current_fragment();
        tracing::debug!(%hash, "fragment changed");
        store.dispatch(Action::SetFilter(filter_from_fragment(&hash)));
    });
    on_cleanup(move || handle.remove());
}
