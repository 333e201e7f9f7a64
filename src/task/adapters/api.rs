//! Transport-agnostic boundary for the external task contract.
//!
//! [`TaskApi`] maps the service operations onto response values carrying an
//! HTTP-style status, an optional JSON body and, for creations, the location
//! of the new resource. An HTTP server only needs to copy these values onto
//! its own response type.

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Route prefix under which task resources live.
pub const TASKS_ROUTE: &str = "/api/tasks";

/// Message returned when the path identifier disagrees with the body.
pub const ID_MISMATCH_MESSAGE: &str = "ID mismatch.";

/// Outcome class of a boundary call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiStatus {
    /// The operation succeeded.
    Ok,
    /// A task was created.
    Created,
    /// The request was rejected.
    BadRequest,
    /// The addressed task does not exist.
    NotFound,
    /// The response could not be encoded.
    InternalError,
}

impl ApiStatus {
    /// Returns the HTTP status code for this outcome.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }
}

/// Response produced by [`TaskApi`] operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Outcome class.
    pub status: ApiStatus,
    /// JSON body, if the outcome carries one.
    pub body: Option<Value>,
    /// Location of a newly created resource.
    pub location: Option<String>,
}

impl ApiResponse {
    const fn empty(status: ApiStatus) -> Self {
        Self {
            status,
            body: None,
            location: None,
        }
    }

    fn message(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(Value::String(message.into())),
            location: None,
        }
    }

    fn json(status: ApiStatus, payload: &impl Serialize) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self {
                status,
                body: Some(body),
                location: None,
            },
            Err(err) => {
                error!(error = %err, "failed to encode response body");
                Self::empty(ApiStatus::InternalError)
            }
        }
    }

    fn found_or_not(found: bool) -> Self {
        if found {
            Self::empty(ApiStatus::Ok)
        } else {
            Self::empty(ApiStatus::NotFound)
        }
    }
}

/// Boundary adapter exposing the six task operations.
pub struct TaskApi<R>
where
    R: TaskRepository,
{
    service: TaskService<R>,
}

impl<R> TaskApi<R>
where
    R: TaskRepository,
{
    /// Creates a boundary adapter over a task service.
    #[must_use]
    pub const fn new(service: TaskService<R>) -> Self {
        Self { service }
    }

    /// Lists tasks, optionally in favourite-then-name order.
    pub async fn list_tasks(&self, sort: bool) -> ApiResponse {
        let tasks = self.service.get_all_tasks(sort).await;
        ApiResponse::json(ApiStatus::Ok, &tasks)
    }

    /// Returns a single task.
    pub async fn get_task(&self, id: TaskId) -> ApiResponse {
        match self.service.get_task_by_id(id).await {
            Some(task) => ApiResponse::json(ApiStatus::Ok, &task),
            None => ApiResponse::empty(ApiStatus::NotFound),
        }
    }

    /// Adds a task; the body identifier is ignored.
    pub async fn add_task(&self, task: Task) -> ApiResponse {
        match self.service.add_task(task).await {
            Ok(created) => {
                let mut response = ApiResponse::json(ApiStatus::Created, &created);
                if response.status == ApiStatus::Created {
                    response.location = Some(format!("{TASKS_ROUTE}/{}", created.id()));
                }
                response
            }
            Err(err) => validation_failure(&err),
        }
    }

    /// Replaces a task. The path identifier must match the body identifier.
    pub async fn update_task(&self, id: TaskId, task: Task) -> ApiResponse {
        if id != task.id() {
            return ApiResponse::message(ApiStatus::BadRequest, ID_MISMATCH_MESSAGE);
        }
        match self.service.update_task(task).await {
            Ok(updated) => ApiResponse::found_or_not(updated),
            Err(err) => validation_failure(&err),
        }
    }

    /// Deletes a task.
    pub async fn delete_task(&self, id: TaskId) -> ApiResponse {
        ApiResponse::found_or_not(self.service.delete_task(id).await)
    }

    /// Moves a task to another status column.
    pub async fn move_task(&self, id: TaskId, status: TaskStatus) -> ApiResponse {
        ApiResponse::found_or_not(self.service.update_task_status(id, status).await)
    }
}

fn validation_failure(err: &TaskServiceError) -> ApiResponse {
    ApiResponse::message(ApiStatus::BadRequest, err.to_string())
}
