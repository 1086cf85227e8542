//! The seed board: three Kanban columns of tasks.

use serde::{Deserialize, Serialize};
use sortboard::Item;

pub const COLUMNS: [&str; 3] = ["Todo", "Doing", "Done"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

fn column(tasks: &[(&str, &str)]) -> Vec<Item<Task>> {
    tasks
        .iter()
        .map(|(id, title)| Item::new(*id, Task::new(*title)))
        .collect()
}

/// Todo / Doing / Done, in board order.
pub fn seed_lists() -> Vec<Vec<Item<Task>>> {
    vec![
        column(&[("1", "Develop a UI"), ("2", "Fix bugs"), ("3", "Add light theme")]),
        column(&[
            ("4", "Improving performance"),
            ("5", "Researching drag-n-drop libraries"),
        ]),
        column(&[("6", "Choose a framework")]),
    ]
}
