pub mod task;
pub mod task_list;
pub mod repository;
pub mod service;
pub mod error;

// Re-exports
pub use task::Task;
pub use task_list::TaskList;
pub use repository::ListRepository;
pub use service::ListService;
pub use error::{Error, Result};
