//! Frontend Models
//!
//! Data structures held by the store and written to local storage.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Partial update merged into the task with the same id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub id: u32,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(id: u32, completed: bool) -> Self {
        Self {
            id,
            title: None,
            completed: Some(completed),
        }
    }
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Footer order
    pub const VARIANTS: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Strict parse; `None` for anything outside the three names
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(FilterMode::All),
            "active" => Some(FilterMode::Active),
            "completed" => Some(FilterMode::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_names() {
        for mode in FilterMode::VARIANTS {
            assert_eq!(FilterMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(FilterMode::parse("ACTIVE"), None);
        assert_eq!(FilterMode::parse(""), None);
    }

    #[test]
    fn test_filter_mode_serialization() {
        assert_eq!(serde_json::to_string(&FilterMode::Completed).unwrap(), "\"completed\"");
        let parsed: FilterMode = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, FilterMode::Active);
        assert!(serde_json::from_str::<FilterMode>("\"done\"").is_err());
    }

    #[test]
    fn test_filter_accepts() {
        let mut task = Task::new(2, "buy milk");
        assert!(FilterMode::All.accepts(&task));
        assert!(FilterMode::Active.accepts(&task));
        assert!(!FilterMode::Completed.accepts(&task));

        task.completed = true;
        assert!(FilterMode::All.accepts(&task));
        assert!(!FilterMode::Active.accepts(&task));
        assert!(FilterMode::Completed.accepts(&task));
    }
}
