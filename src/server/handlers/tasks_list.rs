use crate::{error::Error as RemindrError, server::ServerState, tasks::TasksListParams};
use actix_web::{get, web, HttpResponse};
use tracing::error;

/// Gets a list of pending tasks of the owner ordered by due time.
#[get("/api/tasks")]
pub async fn tasks_list(
    state: web::Data<ServerState>,
    params: web::Query<TasksListParams>,
) -> Result<HttpResponse, RemindrError> {
    match state.api.tasks().get_pending_tasks(params.owner).await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(tasks)),
        Err(err) => {
            error!("Failed to retrieve tasks: {err:?}");
            Err(err.into())
        }
    }
}
