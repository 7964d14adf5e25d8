use crate::{error::Error as RemindrError, server::ServerState};
use actix_web::{get, web, HttpResponse};

/// Gets server status.
#[get("/api/status")]
pub async fn status_get(state: web::Data<ServerState>) -> Result<HttpResponse, RemindrError> {
    Ok(HttpResponse::Ok().json(state.status()))
}
