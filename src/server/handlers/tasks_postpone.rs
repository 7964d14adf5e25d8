use crate::{error::Error as RemindrError, server::ServerState, tasks::TaskPostponeParams};
use actix_web::{put, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Moves the task to a new due time and reschedules its reminder.
#[put("/api/tasks/{task_id}/postpone")]
pub async fn tasks_postpone(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
    params: web::Json<TaskPostponeParams>,
) -> Result<HttpResponse, RemindrError> {
    match state
        .api
        .tasks()
        .postpone_task(*task_id, params.due_at)
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!("Failed to postpone task: {err:?}");
            Err(err.into())
        }
    }
}
