//! Task Item Component
//!
//! A single row: completion checkbox, label (or edit input), delete button.

use leptos::html;
use leptos::prelude::*;

use crate::components::KeyIntent;
use crate::models::Task;
use crate::store::{use_todo_store, Action};

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_todo_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title;
    let edit_title = title.clone();

    let is_editing = move || store.is_editing(id);
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the edit input once it is mounted
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let row_class = move || {
        let mut c = String::from("task-row");
        if completed { c.push_str(" completed"); }
        if is_editing() { c.push_str(" editing"); }
        c
    };

    let on_edit_keydown = move |ev: web_sys::KeyboardEvent| match KeyIntent::from_key(&ev.key()) {
        KeyIntent::Commit => {
            ev.prevent_default();
            store.dispatch(Action::CommitEdit(id, event_target_value(&ev)));
        }
        KeyIntent::Cancel => store.dispatch(Action::CancelEdit),
        KeyIntent::Other => {}
    };

    view! {
        <li class=row_class>
            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="view">
                        <input
                            class="toggle"
                            type="checkbox"
                            prop:checked=completed
                            on:change=move |ev| {
                                store.dispatch(Action::SetCompleted(id, event_target_checked(&ev)))
                            }
                        />
                        <label on:dblclick=move |_| store.dispatch(Action::BeginEdit(id))>
                            {title.clone()}
                        </label>
                        <button class="destroy" on:click=move |_| store.dispatch(Action::Remove(id))>
                            "×"
                        </button>
                    </div>
                }
            >
                <input
                    class="edit"
                    node_ref=input_ref
                    prop:value=edit_title.clone()
                    on:keydown=on_edit_keydown
                    on:blur=move |ev| store.dispatch(Action::CommitEdit(id, event_target_value(&ev)))
                />
            </Show>
        </li>
    }
}
