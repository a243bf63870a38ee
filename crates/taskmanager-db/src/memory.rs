use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use taskmanager_core::{ListRepository, Result, TaskList};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local list store with the same save semantics as [`crate::Database`].
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lists: Arc<RwLock<HashMap<String, TaskList>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.lists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lists.read().await.is_empty()
    }
}

#[async_trait]
impl ListRepository for InMemoryRepository {
    async fn save(&self, list: TaskList) -> Result<TaskList> {
        let stored = if list.id().is_some() {
            list
        } else {
            list.with_id(Uuid::new_v4().to_string())
        };
        let id = stored.id().unwrap_or_default().to_string();

        let mut lists = self.lists.write().await;
        lists.insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TaskList>> {
        let lists = self.lists.read().await;
        Ok(lists.get(id).cloned())
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<TaskList>> {
        let lists = self.lists.read().await;
        Ok(lists
            .values()
            .filter(|list| list.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_owner_id_and_list_type(
        &self,
        owner_id: &str,
        list_type: &str,
    ) -> Result<Vec<TaskList>> {
        let lists = self.lists.read().await;
        Ok(lists
            .values()
            .filter(|list| list.owner_id() == owner_id && list.list_type() == Some(list_type))
            .cloned()
            .collect())
    }
}
