pub mod settings;
pub mod handlers;
pub mod routes;
pub mod state;

pub use settings::ApiConfig;
pub use routes::create_router;
pub use state::ApiState;
