use serde::{Deserialize, Serialize};

/// A task record. Ephemeral: tasks live for the duration of a request and
/// are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
}

/// Task creation request.
///
/// Both fields are optional so a body with a field missing or explicitly
/// `null` still deserializes; the handler treats either as empty and
/// produces the application error instead of a serde one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Task creation response (success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskResponse {
    pub status: String,
    pub message: String,
    pub task: Task,
}

/// Task listing response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskListResponse {
    pub status: String,
    pub tasks: Vec<Task>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_missing_fields() {
        let req: CreateTaskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title, None);
        assert_eq!(req.description, None);

        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title":"Comprar pão"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Comprar pão"));
        assert_eq!(req.description, None);
    }

    #[test]
    fn create_request_accepts_null_fields() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title":null,"description":null}"#).unwrap();
        assert_eq!(req.title, None);
        assert_eq!(req.description, None);
    }

    #[test]
    fn task_serializes_with_snake_case_fields() {
        let task = Task {
            title: "Tarefa 1".to_string(),
            description: "Descrição da tarefa 1".to_string(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Tarefa 1");
        assert_eq!(json["description"], "Descrição da tarefa 1");
    }
}
