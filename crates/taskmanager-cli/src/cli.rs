use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskmanager")]
#[command(about = "Task Manager - personal task lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a personal list
    CreateList {
        /// Owning user ID
        #[arg(long)]
        user: String,

        /// List name
        #[arg(long)]
        name: String,
    },

    /// Show a user's lists
    Lists {
        /// Owning user ID
        #[arg(long)]
        user: String,

        /// Only lists with this type tag
        #[arg(long)]
        list_type: Option<String>,
    },

    /// Show the tasks in a list
    Tasks {
        /// List ID
        list_id: String,
    },

    /// Append a task to a list
    AddTask {
        /// List ID
        list_id: String,

        /// Task name
        #[arg(long)]
        name: String,
    },

    /// Start API server
    Serve {
        /// Interface to bind
        #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "API_PORT", default_value = "3000")]
        port: u16,
    },

    /// Initialize database
    InitDb,
}
