//! Task Operations
//!
//! Pure transformations over the task collection. Each mutating function
//! returns whether anything changed so the store can skip notifying readers.

use crate::models::{FilterMode, Task, TaskPatch};

/// Trimmed title, or `None` when nothing is left
pub fn normalize_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Build the task that `add` would prepend, with id `counter + 1`.
/// `None` once the id space is exhausted.
pub fn new_task(counter: u32, raw_title: &str) -> Option<Task> {
    let id = counter.checked_add(1)?;
    normalize_title(raw_title).map(|title| Task::new(id, title))
}

pub fn remove_task(tasks: &mut Vec<Task>, id: u32) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Merge `patch` into the matching task. A title that trims to empty is ignored.
pub fn edit_task(tasks: &mut [Task], patch: &TaskPatch) -> bool {
    let Some(task) = tasks.iter_mut().find(|task| task.id == patch.id) else {
        return false;
    };

    let mut changed = false;
    if let Some(title) = patch.title.as_deref().and_then(normalize_title) {
        if task.title != title {
            task.title = title;
            changed = true;
        }
    }
    if let Some(completed) = patch.completed {
        if task.completed != completed {
            task.completed = completed;
            changed = true;
        }
    }
    changed
}

pub fn clear_completed(tasks: &mut Vec<Task>) -> bool {
    let before = tasks.len();
    tasks.retain(|task| !task.completed);
    tasks.len() != before
}

/// Only tasks not already at `completed` are touched
pub fn toggle_all(tasks: &mut [Task], completed: bool) -> bool {
    let mut changed = false;
    for task in tasks.iter_mut().filter(|task| task.completed != completed) {
        task.completed = completed;
        changed = true;
    }
    changed
}

pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.len() - remaining_count(tasks)
}

pub fn visible_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|task| mode.accepts(task)).cloned().collect()
}

pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}
