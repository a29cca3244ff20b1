//! Todos Frontend App
//!
//! Root component: builds the persisted store and lays out the page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{TaskFooter, TaskHeader, TaskList};
use crate::routing::sync_filter_with_location;
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let backend: Arc<dyn KeyValueStore> = match BrowserStorage::probe() {
        Ok(storage) => Arc::new(storage),
        Err(error) => {
            tracing::warn!(%error, "local storage unavailable, tasks will not survive a reload");
            Arc::new(MemoryStorage::new())
        }
    };

    let store = TodoStore::new(backend);
    provide_context(store);
    sync_filter_with_location(store);

    view! {
        <section class="todoapp">
            <TaskHeader />
            <Show when=move || store.has_tasks()>
                <section class="main">
                    <TaskList />
                </section>
                <TaskFooter />
            </Show>
        </section>
        <footer class="info">
            <p>"Double-click to edit a task"</p>
        </footer>
    }
}
