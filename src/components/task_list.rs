//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::use_todo_store;

/// Tasks passing the current filter, newest first
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.visible_tasks()
                // Every rendered field is part of the key so edits re-render the row
                key=|task| (task.id, task.title.clone(), task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
    }
}
