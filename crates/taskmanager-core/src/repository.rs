use crate::{Result, TaskList};
use async_trait::async_trait;

/// Persistence boundary for task lists.
///
/// Saves are whole-document writes with no version check: the last save of a
/// given id wins.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Insert when `list` has no id (the store assigns one), replace otherwise.
    async fn save(&self, list: TaskList) -> Result<TaskList>;

    async fn find_by_id(&self, id: &str) -> Result<Option<TaskList>>;

    /// Lists owned by `owner_id`, in no particular order.
    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<TaskList>>;

    async fn find_by_owner_id_and_list_type(
        &self,
        owner_id: &str,
        list_type: &str,
    ) -> Result<Vec<TaskList>>;
}
