use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use taskmanager_core::{Task, TaskList};

/// One row of `task_lists`: a whole list document with its tasks embedded
/// as a JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskListRecord {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub list_type: Option<String>,
    pub tasks: Json<Vec<Task>>,
}

impl From<TaskListRecord> for TaskList {
    fn from(record: TaskListRecord) -> Self {
        let list = TaskList::new(record.name, record.owner_id)
            .with_id(record.id)
            .with_tasks(record.tasks.0);

        match record.list_type {
            Some(list_type) => list.with_list_type(list_type),
            None => list,
        }
    }
}
