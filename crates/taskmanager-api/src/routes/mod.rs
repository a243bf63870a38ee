use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // List endpoints
        .route(
            "/users/:user_id/lists",
            get(handlers::list::get_all_personal_lists).post(handlers::list::create_personal_list),
        )
        .route("/users/:user_id/lists/:list_id", get(handlers::list::get_list))

        // Task endpoints
        .route(
            "/users/:user_id/lists/:list_id/tasks",
            get(handlers::list::get_tasks_in_list).post(handlers::list::add_task_to_list),
        )

        // Add state
        .with_state(state)

        // Add tracing and CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
