//! Persisted Application Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! writes the full state back to storage before returning.

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::constants::STORAGE_KEY;
use crate::models::{FilterMode, Task, TaskPatch};
use crate::storage::{load_snapshot, save_snapshot, KeyValueStore};
use crate::todos;

/// Application state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Last id handed out; the next task gets `counter + 1`
    pub counter: u32,
    /// Newest first
    pub tasks: Vec<Task>,
    pub filter_mode: FilterMode,
    /// Task currently in inline-edit mode
    pub editing_task_id: Option<u32>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            counter: 1,
            tasks: Vec::new(),
            filter_mode: FilterMode::All,
            editing_task_id: None,
        }
    }
}

impl AppState {
    /// Restore invariants on a snapshot that parsed but may have been edited by hand
    pub fn repaired(mut self) -> Self {
        let mut seen = HashSet::new();
        self.tasks.retain_mut(|task| match todos::normalize_title(&task.title) {
            Some(title) => {
                task.title = title;
                seen.insert(task.id)
            }
            None => false,
        });

        let max_id = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        self.counter = self.counter.max(max_id);

        if let Some(id) = self.editing_task_id {
            if !self.tasks.iter().any(|task| task.id == id) {
                self.editing_task_id = None;
            }
        }
        self
    }
}

/// Load the persisted snapshot, falling back to `defaults` when there is none
/// or it cannot be read.
pub fn initialize(storage: &dyn KeyValueStore, defaults: AppState) -> AppState {
    match load_snapshot::<AppState>(storage, STORAGE_KEY) {
        Ok(Some(state)) => {
            let state = state.repaired();
            tracing::info!(tasks = state.tasks.len(), counter = state.counter, "loaded snapshot");
            state
        }
        Ok(None) => {
            tracing::info!("no snapshot stored, starting with defaults");
            defaults
        }
        Err(error) => {
            tracing::warn!(%error, "discarding unreadable snapshot");
            defaults
        }
    }
}

/// A semantic user intent, parameterized by the task it targets
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(String),
    Remove(u32),
    SetCompleted(u32, bool),
    BeginEdit(u32),
    CommitEdit(u32, String),
    CancelEdit,
    ClearCompleted,
    ToggleAll(bool),
    SetFilter(FilterMode),
}

/// Handle to the reactive state plus its persistence backend
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<AppState>,
    storage: StoredValue<Arc<dyn KeyValueStore>>,
    remaining: Memo<usize>,
}

impl TodoStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = Store::new(initialize(storage.as_ref(), AppState::default()));
        // Recomputed only when the task collection is written
        let remaining = Memo::new(move |_| todos::remaining_count(&state.tasks().read()));
        Self {
            state,
            storage: StoredValue::new(storage),
            remaining,
        }
    }

    /// Apply `patch` to the state, then persist synchronously
    pub fn mutate<R>(&self, patch: impl FnOnce(Store<AppState>) -> R) -> R {
        let result = patch(self.state);
        self.persist();
        result
    }

    fn persist(&self) {
        let result = self.storage.with_value(|storage| {
            self.state
                .with_untracked(|state| save_snapshot(storage.as_ref(), STORAGE_KEY, state))
        });
        if let Err(error) = result {
            tracing::error!(%error, "failed to persist snapshot");
        }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::Add(title) => self.add_task(&title),
            Action::Remove(id) => self.remove_task(id),
            Action::SetCompleted(id, completed) => self.edit_task(TaskPatch::completed(id, completed)),
            Action::BeginEdit(id) => self.set_editing(Some(id)),
            Action::CommitEdit(id, title) => self.commit_edit(id, &title),
            Action::CancelEdit => self.set_editing(None),
            Action::ClearCompleted => self.clear_completed(),
            Action::ToggleAll(completed) => self.toggle_all(completed),
            Action::SetFilter(mode) => self.set_filter_mode(mode),
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_task(&self, title: &str) {
        self.mutate(|state| {
            let counter = state.counter().get_untracked();
            if let Some(task) = todos::new_task(counter, title) {
                *state.counter().write() = task.id;
                state.tasks().write().insert(0, task);
            }
        });
    }

    pub fn remove_task(&self, id: u32) {
        self.mutate(|state| {
            state.tasks().maybe_update(|tasks| todos::remove_task(tasks, id));
            state
                .editing_task_id()
                .maybe_update(|editing| clear_if(editing, id));
        });
    }

    pub fn edit_task(&self, patch: TaskPatch) {
        self.mutate(|state| {
            state.tasks().maybe_update(|tasks| todos::edit_task(tasks, &patch));
        });
    }

    pub fn clear_completed(&self) {
        self.mutate(|state| {
            state.tasks().maybe_update(todos::clear_completed);
            let editing = state.editing_task_id().get_untracked();
            if let Some(id) = editing {
                let exists = state.tasks().with_untracked(|tasks| tasks.iter().any(|t| t.id == id));
                if !exists {
                    *state.editing_task_id().write() = None;
                }
            }
        });
    }

    pub fn toggle_all(&self, completed: bool) {
        self.mutate(|state| {
            state
                .tasks()
                .maybe_update(|tasks| todos::toggle_all(tasks, completed));
        });
    }

    pub fn set_editing(&self, id: Option<u32>) {
        self.mutate(|state| {
            state.editing_task_id().maybe_update(|editing| replace(editing, id));
        });
    }

    pub fn set_filter_mode(&self, mode: FilterMode) {
        self.mutate(|state| {
            state.filter_mode().maybe_update(|current| replace(current, mode));
        });
    }

    /// Finish the edit session for `id`. Ignored unless `id` is being edited;
    /// a blank title leaves the task untouched.
    pub fn commit_edit(&self, id: u32, title: &str) {
        if self.state.editing_task_id().get_untracked() != Some(id) {
            return;
        }
        if todos::normalize_title(title).is_some() {
            self.edit_task(TaskPatch::title(id, title));
        }
        self.set_editing(None);
    }

    // ========================
    // Derived Views
    // ========================

    pub fn remaining_count(&self) -> usize {
        self.remaining.get()
    }

    pub fn completed_count(&self) -> usize {
        todos::completed_count(&self.state.tasks().read())
    }

    pub fn has_tasks(&self) -> bool {
        !self.state.tasks().read().is_empty()
    }

    pub fn visible_tasks(&self) -> Vec<Task> {
        let mode = self.state.filter_mode().get();
        todos::visible_tasks(&self.state.tasks().read(), mode)
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.state.filter_mode().get()
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.state.editing_task_id().get() == Some(id)
    }

    /// Current state without subscribing
    #[cfg(test)]
    pub fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn clear_if(editing: &mut Option<u32>, id: u32) -> bool {
    if *editing == Some(id) {
        *editing = None;
        true
    } else {
        false
    }
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
