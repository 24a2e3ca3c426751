use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use consultant_performance::config::Config;
use consultant_performance::modules::{health, reports};
use consultant_performance::reports::{MySqlPerformanceRepository, PerformanceService};
use consultant_performance::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    telemetry::init(&config.app.log_level, config.app.log_format);

    tracing::info!("Starting Consultant Performance Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} max connections)",
        config.database.max_connections
    );

    let repository = Arc::new(MySqlPerformanceRepository::new(db_pool.clone()));
    let service = Arc::new(PerformanceService::new(
        repository,
        config.app.report_concurrency,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(service.clone()))
            .configure(health::controllers::configure)
            .configure(reports::controllers::configure)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Consultant Performance Service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
