use crate::{error::Error as RemindrError, server::ServerState};
use actix_web::{put, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Marks the task as done and cancels its pending reminder.
#[put("/api/tasks/{task_id}/complete")]
pub async fn tasks_complete(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, RemindrError> {
    match state.api.tasks().complete_task(*task_id).await {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!("Failed to complete task: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::tasks_complete::tasks_complete, server_state::tests::mock_server_state},
        tasks::{TaskStatus, TaskStore},
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use std::time::Duration;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[tokio::test]
    async fn can_complete_task() -> anyhow::Result<()> {
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
        assert!(server_state.api.scheduler.scheduled_at(task.id).is_some());

        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_complete),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!(
                "https://remindr.dev/api/tasks/{}/complete",
                task.id
            ))
            .method(Method::PUT)
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);

        let completed_task = server_state.api.store.get_task(task.id).await?.unwrap();
        assert_eq!(completed_task.status, TaskStatus::Done);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(
                &response.into_body().try_into_bytes().unwrap()
            )?,
            serde_json::to_value(&completed_task)?
        );
        assert!(server_state.api.scheduler.scheduled_at(task.id).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_bad_request_for_unknown_tasks() -> anyhow::Result<()> {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(mock_server_state().await?))
                .service(tasks_complete),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!(
                "https://remindr.dev/api/tasks/{}/complete",
                uuid!("00000000-0000-0000-0000-000000000001")
            ))
            .method(Method::PUT)
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);

        Ok(())
    }
}
