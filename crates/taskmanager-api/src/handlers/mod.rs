pub mod health;
pub mod list;
