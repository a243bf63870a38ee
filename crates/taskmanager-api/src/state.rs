use std::sync::Arc;
use taskmanager_core::{ListRepository, ListService};

#[derive(Clone)]
pub struct ApiState {
    pub lists: Arc<ListService>,
}

impl ApiState {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self {
            lists: Arc::new(ListService::new(repository)),
        }
    }
}
