use crate::{error::Error as RemindrError, server::ServerState, tasks::TasksListParams};
use actix_web::{get, web, HttpResponse};
use tracing::error;

/// Gets the pending task of the owner that is due the earliest.
#[get("/api/tasks/nearest")]
pub async fn tasks_nearest(
    state: web::Data<ServerState>,
    params: web::Query<TasksListParams>,
) -> Result<HttpResponse, RemindrError> {
    match state.api.tasks().get_nearest_task(params.owner).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(task)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => {
            error!("Failed to retrieve nearest task: {err:?}");
            Err(err.into())
        }
    }
}
