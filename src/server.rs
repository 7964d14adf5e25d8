mod handlers;
mod server_state;

use crate::{
    api::Api,
    config::{Config, RawConfig},
    database::Database,
    delivery::DeliveryExecutor,
    network::TelegramTransport,
    scheduler::Scheduler,
    templates::create_templates,
};
use actix_web::{middleware, web, App, HttpServer, Result};
use anyhow::{bail, Context};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use server_state::ServerState;

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let http_port = raw_config.port;
    let config = Config::from(raw_config);
    if config.telegram.token.is_empty() {
        bail!("Telegram bot token is not configured (`telegram.token`).");
    }

    let database = Database::create(Database::connect(&config.db).await?).await?;
    let executor = DeliveryExecutor::new(
        database.clone(),
        TelegramTransport::new(config.telegram.clone()),
        create_templates()?,
        config.reminders,
        config.telegram.send_timeout,
    );
    let scheduler = Scheduler::new(executor, config.scheduler);
    let api = Arc::new(Api::new(database, scheduler));

    // Schedule must be restored before any new task can be created or changed.
    api.recover()
        .await
        .context("Failed to recover scheduled reminders.")?;

    let state = web::Data::new(ServerState::new(api.clone()));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(handlers::status_get::status_get)
            .service(handlers::tasks_list::tasks_list)
            .service(handlers::tasks_nearest::tasks_nearest)
            .service(handlers::tasks_get::tasks_get)
            .service(handlers::tasks_create::tasks_create)
            .service(handlers::tasks_postpone::tasks_postpone)
            .service(handlers::tasks_complete::tasks_complete)
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("Remindr API server is available at http://{http_server_url}");

    let result = http_server
        .run()
        .await
        .context("Failed to run Remindr API server.");

    warn!("Remindr API server is stopped, cancelling pending reminders.");
    api.scheduler.shutdown();

    result
}
