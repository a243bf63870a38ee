use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use taskmanager_core::{Task, TaskList};

use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub list_type: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path of a user's list, with both ids percent-encoded
fn list_location(user_id: &str, list_id: &str) -> String {
    format!(
        "/users/{}/lists/{}",
        utf8_percent_encode(user_id, PATH_SEGMENT),
        utf8_percent_encode(list_id, PATH_SEGMENT)
    )
}

fn error_response(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

fn storage_error(e: taskmanager_core::Error) -> ApiError {
    tracing::error!("List storage failed: {:#}", e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal storage error")
}

/// Create a personal list from a raw list-name body
pub async fn create_personal_list(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    list_name: String,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TaskList>), ApiError> {
    if list_name.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "List name is required",
        ));
    }

    let list = state
        .lists
        .create_personal_list(&user_id, &list_name)
        .await
        .map_err(storage_error)?;

    let location = list_location(&user_id, list.id().unwrap_or_default());

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(list)))
}

/// List a user's lists, optionally filtered by `?type=`
pub async fn get_all_personal_lists(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TaskList>>, ApiError> {
    let lists = match query.list_type {
        Some(list_type) => {
            state
                .lists
                .get_personal_lists_by_type(&user_id, &list_type)
                .await
        }
        None => state.lists.get_all_personal_lists(&user_id).await,
    }
    .map_err(storage_error)?;

    Ok(Json(lists))
}

/// Get a single list owned by the user
pub async fn get_list(
    State(state): State<ApiState>,
    Path((user_id, list_id)): Path<(String, String)>,
) -> Result<Json<TaskList>, ApiError> {
    match state.lists.get_list(&list_id).await.map_err(storage_error)? {
        Some(list) if list.owner_id() == user_id => Ok(Json(list)),
        _ => Err(error_response(StatusCode::NOT_FOUND, "List not found")),
    }
}

/// Tasks in a list; an unknown list yields an empty array
pub async fn get_tasks_in_list(
    State(state): State<ApiState>,
    Path((_user_id, list_id)): Path<(String, String)>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .lists
        .get_tasks_in_list(&list_id)
        .await
        .map_err(storage_error)?;

    Ok(Json(tasks))
}

/// Append a task to a list
pub async fn add_task_to_list(
    State(state): State<ApiState>,
    Path((_user_id, list_id)): Path<(String, String)>,
    Json(task): Json<Task>,
) -> Result<Json<Vec<Task>>, ApiError> {
    tracing::info!("Adding task '{}' to list {}", task.name(), list_id);

    match state
        .lists
        .add_task_to_list(&list_id, task)
        .await
        .map_err(storage_error)?
    {
        Some(tasks) => Ok(Json(tasks)),
        None => Err(error_response(StatusCode::NOT_FOUND, "List not found")),
    }
}
