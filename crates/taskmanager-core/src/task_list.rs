use crate::task::Task;
use serde::{Deserialize, Serialize};

/// A named, owned collection of tasks.
///
/// Values are never mutated in place. The `with_*` methods consume a list and
/// return a new one with a single field overridden, so an update is always
/// "old list plus overrides".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    owner_id: String,
    #[serde(default)]
    list_type: Option<String>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            owner_id: owner_id.into(),
            list_type: None,
            tasks: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_list_type(mut self, list_type: impl Into<String>) -> Self {
        self.list_type = Some(list_type.into());
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Copy of this list with `task` added after the existing entries.
    pub fn with_task_appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(task);

        self.clone().with_tasks(tasks)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn list_type(&self) -> Option<&str> {
        self.list_type.as_deref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = TaskList::new("To Do List", "1234");

        assert!(list.id().is_none());
        assert_eq!(list.name(), "To Do List");
        assert_eq!(list.owner_id(), "1234");
        assert!(list.list_type().is_none());
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_with_overrides_keep_other_fields() {
        let list = TaskList::new("To Do List", "1234")
            .with_id("5678")
            .with_list_type("personal");

        let updated = list.clone().with_tasks(vec![Task::new("Task 1")]);

        assert_eq!(updated.id(), Some("5678"));
        assert_eq!(updated.name(), list.name());
        assert_eq!(updated.owner_id(), list.owner_id());
        assert_eq!(updated.list_type(), Some("personal"));
        assert_eq!(updated.tasks(), &[Task::new("Task 1")]);
    }

    #[test]
    fn test_task_appended_preserves_order() {
        let list = TaskList::new("To Do List", "1234")
            .with_tasks(vec![Task::new("Task 1"), Task::new("Task 2")]);

        let updated = list.with_task_appended(Task::new("Task 3"));

        assert_eq!(
            updated.tasks(),
            &[Task::new("Task 1"), Task::new("Task 2"), Task::new("Task 3")]
        );
        // Source value is untouched
        assert_eq!(list.tasks().len(), 2);
    }

    #[test]
    fn test_equality_covers_every_field() {
        let list = TaskList::new("To Do List", "1234").with_id("5678");

        assert_eq!(list, TaskList::new("To Do List", "1234").with_id("5678"));
        assert_ne!(list, list.clone().with_list_type("personal"));
        assert_ne!(list, list.clone().with_id("9999"));
        assert_ne!(list, list.with_task_appended(Task::new("Task 1")));
    }

    #[test]
    fn test_missing_tasks_field_defaults_to_empty() {
        let list: TaskList =
            serde_json::from_str(r#"{"id":"5678","name":"To Do List","ownerId":"1234"}"#).unwrap();

        assert!(list.tasks().is_empty());
        assert!(list.list_type().is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(TaskList::new("To Do List", "1234").with_id("5678")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "5678",
                "name": "To Do List",
                "ownerId": "1234",
                "listType": null,
                "tasks": []
            })
        );
    }
}
