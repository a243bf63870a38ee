pub mod models;
pub mod repository;
pub mod memory;
pub mod error;

// Re-exports
pub use models::TaskListRecord;
pub use repository::Database;
pub use memory::InMemoryRepository;
pub use error::{Error, Result};
