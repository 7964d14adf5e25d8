use crate::{error::Error as RemindrError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Gets a task with the specified ID.
#[get("/api/tasks/{task_id}")]
pub async fn tasks_get(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, RemindrError> {
    match state.api.tasks().get_task(*task_id).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(task)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => {
            error!("Failed to retrieve task: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{handlers::tasks_get::tasks_get, server_state::tests::mock_server_state};
    use actix_web::{
        body::MessageBody,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use std::time::Duration;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[tokio::test]
    async fn can_get_task() -> anyhow::Result<()> {
        let server_state = web::Data::new(mock_server_state().await?);
        let task = server_state
            .api
            .tasks()
            .create_task(
                42,
                "Buy milk",
                OffsetDateTime::now_utc() + Duration::from_secs(3600),
            )
            .await?;

        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_get),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!("https://remindr.dev/api/tasks/{}", task.id))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);

        let body = response.into_body().try_into_bytes().unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&body)?,
            serde_json::to_value(&task)?
        );

        Ok(())
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_tasks() -> anyhow::Result<()> {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(mock_server_state().await?))
                .service(tasks_get),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!(
                "https://remindr.dev/api/tasks/{}",
                uuid!("00000000-0000-0000-0000-000000000001")
            ))
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);

        let response = call_service(
            &app,
            TestRequest::with_uri("https://remindr.dev/api/tasks/not-a-uuid").to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);

        Ok(())
    }
}
