//! # Task Handlers
//!
//! Handlers for task creation and listing.
//!
//! Creating a task does not persist it anywhere: the handler validates the
//! request and echoes the constructed task back. Listing always returns the
//! same fixed sample, independent of prior creation calls.

use crate::error::{ApiError, Result};
use axum::{
    body::Bytes,
    extract::Json,
    http::StatusCode,
};
use shared::{CreateTaskRequest, CreateTaskResponse, Task, TaskListResponse};
use tracing::{info, warn};

/// Validation message when `title` is missing or empty.
pub const TITLE_REQUIRED_MESSAGE: &str = "Título da tarefa é obrigatório";

/// Success message for task creation.
pub const TASK_CREATED_MESSAGE: &str = "Tarefa criada com sucesso";

/// Task creation handler.
///
/// Parses the JSON body itself rather than through the `Json` extractor so
/// that a malformed body surfaces as the application error (generic message,
/// HTTP 400) instead of the framework's rejection.
pub async fn create_task(
    body: Bytes,
) -> Result<(StatusCode, Json<CreateTaskResponse>)> {
    let req: CreateTaskRequest = serde_json::from_slice(&body)?;

    // Missing, null, and empty titles are all "missing"
    let title = req.title.unwrap_or_default();
    if title.is_empty() {
        warn!("[CREATE_TASK] Rejected: missing or empty title");
        return Err(ApiError::new(TITLE_REQUIRED_MESSAGE));
    }

    let task = Task {
        title,
        description: req.description.unwrap_or_default(),
    };

    info!("[CREATE_TASK] Task accepted: {}", task.title);

    Ok((
        StatusCode::CREATED,
        Json(CreateTaskResponse {
            status: "success".to_string(),
            message: TASK_CREATED_MESSAGE.to_string(),
            task,
        }),
    ))
}

/// Task listing handler.
///
/// Always returns the same two sample entries.
pub async fn list_tasks() -> Json<TaskListResponse> {
    Json(TaskListResponse {
        status: "success".to_string(),
        tasks: sample_tasks(),
    })
}

/// The fixed task list returned by `GET /tarefas`.
fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            title: "Tarefa 1".to_string(),
            description: "Descrição da tarefa 1".to_string(),
        },
        Task {
            title: "Tarefa 2".to_string(),
            description: "Descrição da tarefa 2".to_string(),
        },
    ]
}
