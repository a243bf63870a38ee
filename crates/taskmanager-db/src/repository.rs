use crate::{models::TaskListRecord, Error, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Pool, Postgres};
use taskmanager_core::{ListRepository, TaskList};
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    pool: Pool<Postgres>,
}

impl Database {
    /// Create new database connection
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS task_lists (
                id VARCHAR(255) PRIMARY KEY,
                name TEXT NOT NULL,
                owner_id VARCHAR(255) NOT NULL,
                list_type VARCHAR(100),
                tasks JSONB NOT NULL DEFAULT '[]'::jsonb
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_task_lists_owner_id ON task_lists(owner_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ========================================================================
    // Task List Operations
    // ========================================================================

    /// Upsert a list, assigning a fresh id when it has none
    pub async fn save_list(&self, list: &TaskList) -> Result<TaskListRecord> {
        let id = list
            .id()
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let record = sqlx::query_as::<_, TaskListRecord>(
            r#"
            INSERT INTO task_lists (id, name, owner_id, list_type, tasks)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = $2,
                owner_id = $3,
                list_type = $4,
                tasks = $5
            RETURNING id, name, owner_id, list_type, tasks
            "#,
        )
        .bind(&id)
        .bind(list.name())
        .bind(list.owner_id())
        .bind(list.list_type())
        .bind(Json(list.tasks()))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Saved task list {} ({} tasks)", record.id, record.tasks.len());

        Ok(record)
    }

    /// Get list by ID
    pub async fn get_list(&self, list_id: &str) -> Result<Option<TaskListRecord>> {
        let record = sqlx::query_as::<_, TaskListRecord>(
            "SELECT id, name, owner_id, list_type, tasks FROM task_lists WHERE id = $1",
        )
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Get lists by owner
    pub async fn get_lists_by_owner(&self, owner_id: &str) -> Result<Vec<TaskListRecord>> {
        let records = sqlx::query_as::<_, TaskListRecord>(
            "SELECT id, name, owner_id, list_type, tasks FROM task_lists WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get lists by owner and type
    pub async fn get_lists_by_owner_and_type(
        &self,
        owner_id: &str,
        list_type: &str,
    ) -> Result<Vec<TaskListRecord>> {
        let records = sqlx::query_as::<_, TaskListRecord>(
            r#"
            SELECT id, name, owner_id, list_type, tasks FROM task_lists
            WHERE owner_id = $1 AND list_type = $2
            "#,
        )
        .bind(owner_id)
        .bind(list_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

#[async_trait]
impl ListRepository for Database {
    async fn save(&self, list: TaskList) -> taskmanager_core::Result<TaskList> {
        Ok(self.save_list(&list).await?.into())
    }

    async fn find_by_id(&self, id: &str) -> taskmanager_core::Result<Option<TaskList>> {
        Ok(self.get_list(id).await?.map(TaskList::from))
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> taskmanager_core::Result<Vec<TaskList>> {
        let records = self.get_lists_by_owner(owner_id).await?;
        Ok(records.into_iter().map(TaskList::from).collect())
    }

    async fn find_by_owner_id_and_list_type(
        &self,
        owner_id: &str,
        list_type: &str,
    ) -> taskmanager_core::Result<Vec<TaskList>> {
        let records = self.get_lists_by_owner_and_type(owner_id, list_type).await?;
        Ok(records.into_iter().map(TaskList::from).collect())
    }
}
