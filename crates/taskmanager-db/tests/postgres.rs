//! Round trips against a live PostgreSQL.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -p taskmanager-db -- --ignored`.

use taskmanager_core::{ListRepository, Task, TaskList};
use taskmanager_db::Database;
use uuid::Uuid;

async fn connect() -> Option<Database> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let database = Database::new(&url).await.unwrap();
    database.init_schema().await.unwrap();
    Some(database)
}

fn unique_owner() -> String {
    format!("owner-{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore]
async fn test_init_schema_is_idempotent() {
    let Some(database) = connect().await else {
        return;
    };

    database.init_schema().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_save_assigns_id_and_replaces_on_conflict() {
    let Some(database) = connect().await else {
        return;
    };
    let owner = unique_owner();

    let created = database
        .save(TaskList::new("To Do List", &owner))
        .await
        .unwrap();
    let id = created.id().unwrap().to_string();
    assert!(created.tasks().is_empty());

    let replaced = database
        .save(
            created
                .with_list_type("personal")
                .with_tasks(vec![Task::new("Task 1")]),
        )
        .await
        .unwrap();
    assert_eq!(replaced.id(), Some(id.as_str()));
    assert_eq!(replaced.list_type(), Some("personal"));

    let lists = database.find_by_owner_id(&owner).await.unwrap();
    assert_eq!(lists, vec![replaced]);
}

#[tokio::test]
#[ignore]
async fn test_tasks_keep_order_through_jsonb() {
    let Some(database) = connect().await else {
        return;
    };

    let tasks = vec![
        Task::new("Task 1"),
        Task::new("Task 2").with_id("t-2"),
        Task::new("Task 3"),
    ];
    let saved = database
        .save(TaskList::new("To Do List", &unique_owner()).with_tasks(tasks.clone()))
        .await
        .unwrap();

    let found = database
        .find_by_id(saved.id().unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.tasks(), tasks.as_slice());
    assert_eq!(found, saved);
}

#[tokio::test]
#[ignore]
async fn test_find_by_owner_and_type() {
    let Some(database) = connect().await else {
        return;
    };
    let owner = unique_owner();

    database
        .save(TaskList::new("Groceries", &owner).with_list_type("personal"))
        .await
        .unwrap();
    database
        .save(TaskList::new("Sprint", &owner).with_list_type("work"))
        .await
        .unwrap();
    database
        .save(TaskList::new("Not Mine", &unique_owner()).with_list_type("personal"))
        .await
        .unwrap();

    let personal = database
        .find_by_owner_id_and_list_type(&owner, "personal")
        .await
        .unwrap();
    assert_eq!(personal.len(), 1);
    assert_eq!(personal[0].name(), "Groceries");

    assert_eq!(database.find_by_owner_id(&owner).await.unwrap().len(), 2);
    assert!(database.find_by_id("missing").await.unwrap().is_none());
}
