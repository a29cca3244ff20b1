//! Task Footer Component
//!
//! Items-left count, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::models::FilterMode;
use crate::routing::fragment_for;
use crate::store::{use_todo_store, Action};
use crate::todos::items_left_label;

#[component]
pub fn TaskFooter() -> impl IntoView {
    let store = use_todo_store();

    let has_completed = move || store.completed_count() > 0;

    view! {
        <footer class="footer">
            <span class="todo-count">{move || items_left_label(store.remaining_count())}</span>
            <ul class="filters">
                {FilterMode::VARIANTS.iter().map(|&mode| {
                    let is_selected = move || store.filter_mode() == mode;
                    view! {
                        <li>
                            <a
                                href=fragment_for(mode)
                                class=move || if is_selected() { "selected" } else { "" }
                            >
                                {mode.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <Show when=has_completed>
                <button class="clear-completed" on:click=move |_| store.dispatch(Action::ClearCompleted)>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}
