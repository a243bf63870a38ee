use anyhow::Result;
use std::sync::Arc;

use crate::cli::Commands;
use taskmanager_core::{Error, ListRepository, ListService, Task, TaskList};
use taskmanager_db::{Database, InMemoryRepository};

pub async fn execute(command: Commands, db: Option<Arc<Database>>) -> Result<()> {
    match command {
        Commands::CreateList { user, name } => {
            let service = list_service(&db)?;

            let list = service.create_personal_list(&user, &name).await?;

            println!("✓ List created: {}", list.id().unwrap_or_default());
            print_list(&list);
        }

        Commands::Lists { user, list_type } => {
            let service = list_service(&db)?;

            let lists = match list_type {
                Some(list_type) => service.get_personal_lists_by_type(&user, &list_type).await?,
                None => service.get_all_personal_lists(&user).await?,
            };

            println!("Lists for {}: {}", user, lists.len());
            println!();

            for list in &lists {
                println!("ID: {}", list.id().unwrap_or_default());
                print_list(list);
                println!();
            }
        }

        Commands::Tasks { list_id } => {
            let service = list_service(&db)?;

            let tasks = service.get_tasks_in_list(&list_id).await?;

            println!("Tasks in {}: {}", list_id, tasks.len());
            print_tasks(&tasks);
        }

        Commands::AddTask { list_id, name } => {
            let service = list_service(&db)?;

            let tasks = service
                .add_task_to_list(&list_id, Task::new(name))
                .await?
                .ok_or_else(|| Error::ListNotFound(list_id.clone()))?;

            println!("✓ Task added to {}", list_id);
            print_tasks(&tasks);
        }

        Commands::Serve { host, port } => {
            println!("Starting API server on {}:{}...", host, port);

            let repository = open_repository(db).await?;

            // Create and run server
            let app = taskmanager_api::create_router(taskmanager_api::ApiState::new(repository));

            let addr = format!("{}:{}", host, port);
            println!("Task Manager API Server running on http://{}", addr);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }

        Commands::InitDb => {
            match &db {
                Some(database) => {
                    println!("Initializing database schema...");
                    database.init_schema().await?;
                    println!("✓ Database initialized successfully");
                }
                None => {
                    anyhow::bail!("No database URL provided. Set DATABASE_URL environment variable.");
                }
            }
        }
    }

    Ok(())
}

/// Store for the API server; the schema is created before serving
async fn open_repository(db: Option<Arc<Database>>) -> Result<Arc<dyn ListRepository>> {
    let repository: Arc<dyn ListRepository> = match db {
        Some(database) => {
            database.init_schema().await?;
            database
        }
        None => {
            println!("Warning: No database configured. Lists won't be persisted.");
            Arc::new(InMemoryRepository::new())
        }
    };

    Ok(repository)
}

/// List commands only make sense against a persistent store
fn list_service(db: &Option<Arc<Database>>) -> Result<ListService> {
    match db {
        Some(database) => Ok(ListService::new(database.clone())),
        None => anyhow::bail!("No database URL provided. Set DATABASE_URL environment variable."),
    }
}

fn print_list(list: &TaskList) {
    println!("  Name: {}", list.name());
    println!("  Owner: {}", list.owner_id());
    if let Some(list_type) = list.list_type() {
        println!("  Type: {}", list_type);
    }
    println!("  Tasks: {}", list.tasks().len());
}

fn print_tasks(tasks: &[Task]) {
    for (i, task) in tasks.iter().enumerate() {
        println!("  {}. {}", i + 1, task.name());
    }
}
