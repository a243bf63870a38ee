use crate::{ListRepository, Result, Task, TaskList};
use std::sync::Arc;

#[derive(Clone)]
pub struct ListService {
    repository: Arc<dyn ListRepository>,
}

impl ListService {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    /// Create an empty list owned by `user_id`
    pub async fn create_personal_list(&self, user_id: &str, list_name: &str) -> Result<TaskList> {
        let list = self
            .repository
            .save(TaskList::new(list_name, user_id))
            .await?;

        tracing::info!(
            "Created list: {} ({}) for user {}",
            list.name(),
            list.id().unwrap_or_default(),
            user_id
        );

        Ok(list)
    }

    /// All lists owned by `user_id`
    pub async fn get_all_personal_lists(&self, user_id: &str) -> Result<Vec<TaskList>> {
        self.repository.find_by_owner_id(user_id).await
    }

    /// Lists owned by `user_id` carrying the given type tag
    pub async fn get_personal_lists_by_type(
        &self,
        user_id: &str,
        list_type: &str,
    ) -> Result<Vec<TaskList>> {
        self.repository
            .find_by_owner_id_and_list_type(user_id, list_type)
            .await
    }

    /// Get list by ID
    pub async fn get_list(&self, list_id: &str) -> Result<Option<TaskList>> {
        self.repository.find_by_id(list_id).await
    }

    /// Tasks of a list. A missing list reads as an empty one.
    pub async fn get_tasks_in_list(&self, list_id: &str) -> Result<Vec<Task>> {
        let tasks = self
            .repository
            .find_by_id(list_id)
            .await?
            .map(TaskList::into_tasks)
            .unwrap_or_default();

        Ok(tasks)
    }

    /// Append `task` to a list and return the saved task sequence.
    ///
    /// Returns `None` without writing anything when the list does not exist.
    /// The read and the save are separate round trips, so two concurrent
    /// appends to the same list can overwrite each other.
    pub async fn add_task_to_list(&self, list_id: &str, task: Task) -> Result<Option<Vec<Task>>> {
        let Some(list) = self.repository.find_by_id(list_id).await? else {
            tracing::debug!("Cannot add task, list not found: {}", list_id);
            return Ok(None);
        };

        let saved = self.repository.save(list.with_task_appended(task)).await?;

        tracing::info!(
            "Added task to list: {} ({}), now {} tasks",
            saved.name(),
            list_id,
            saved.tasks().len()
        );

        Ok(Some(saved.into_tasks()))
    }
}
