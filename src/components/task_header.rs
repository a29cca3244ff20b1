//! Task Header Component
//!
//! New-task input and the toggle-all checkbox.

use leptos::prelude::*;

use crate::components::KeyIntent;
use crate::store::{use_todo_store, Action};

#[component]
pub fn TaskHeader() -> impl IntoView {
    let store = use_todo_store();

    let (new_title, set_new_title) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if KeyIntent::from_key(&ev.key()) != KeyIntent::Commit {
            return;
        }
        ev.prevent_default();
        store.dispatch(Action::Add(new_title.get_untracked()));
        set_new_title.set(String::new());
    };

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <div class="new-task-row">
                <input
                    class="new-todo"
                    placeholder="What needs to be done?"
                    autofocus=true
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <Show when=move || store.has_tasks()>
                    <input
                        id="toggle-all"
                        class="toggle-all"
                        type="checkbox"
                        prop:checked=move || store.remaining_count() == 0
                        on:change=move |ev| store.dispatch(Action::ToggleAll(event_target_checked(&ev)))
                    />
                    <label for="toggle-all">"Mark all as complete"</label>
                </Show>
            </div>
        </header>
    }
}
