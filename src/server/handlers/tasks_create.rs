use crate::{error::Error as RemindrError, server::ServerState, tasks::TaskCreateParams};
use actix_web::{post, web, HttpResponse};
use tracing::error;

/// Creates a new task and schedules a reminder for it.
#[post("/api/tasks")]
pub async fn tasks_create(
    state: web::Data<ServerState>,
    params: web::Json<TaskCreateParams>,
) -> Result<HttpResponse, RemindrError> {
    let params = params.into_inner();
    match state
        .api
        .tasks()
        .create_task(params.owner, &params.title, params.due_at)
        .await
    {
        Ok(task) => Ok(HttpResponse::Created().json(task)),
        Err(err) => {
            error!("Failed to create task: {err:?}");
            Err(err.into())
        }
    }
}
