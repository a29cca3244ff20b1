//! UI Components
//!
//! Leptos components for the task list page.

mod key_intent;
mod task_header;
mod task_item;
mod task_list;
mod task_footer;

pub use key_intent::KeyIntent;
pub use task_header::TaskHeader;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use task_footer::TaskFooter;
