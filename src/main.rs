use actix_web::{App, HttpServer, web};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
mod api;
use crate::api::{
    cors::cors,
    health::health_config,
    job::{handlers::job_config, JobService},
    validation,
};
mod cli;
mod config;
mod db;
mod logging;
mod shutdown;
use crate::cli::{Cli, Command};
use crate::config::{Config, StorageBackend};
use crate::db::{JobRepository, MemoryJobRepository, PgJobRepository};
use crate::shutdown::ShutdownCoordinator;

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, e);
    std::io::Error::other(format!("{}: {}", context, e))
}

/// Build the configured job store, migrating PostgreSQL first
async fn open_repository(config: &Config) -> std::io::Result<Arc<dyn JobRepository>> {
    match (config.storage_backend, &config.database_url) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = db::connection::get_connection(database_url, config.max_db_connections)
                .await
                .map_err(|e| startup_error("Failed to connect to database", e))?;
            info!("Database connection pool established");

            db::migrations::run_migrations(&pool)
                .await
                .map_err(|e| startup_error("Failed to run database migrations", e))?;

            Ok(Arc::new(PgJobRepository::new(pool)))
        }
        (StorageBackend::Postgres, None) => {
            Err(startup_error("Invalid configuration", "DATABASE_URL is not set"))
        }
        (StorageBackend::Memory, _) => {
            info!("Using in-memory job store; jobs will not survive a restart");
            Ok(Arc::new(MemoryJobRepository::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    logging::init(&config.log_dir)?;

    info!("Starting job-board application");
    info!("Configuration loaded successfully:");
    info!("  - Storage backend: {:?}", config.storage_backend);
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max database connections: {}", config.max_db_connections);
    info!("  - CORS allowed origins: {:?}", config.cors_allowed_origins);

    let repo = open_repository(&config).await?;

    let command = args.command.unwrap_or(Command::Serve);
    match command {
        Command::Serve => {}
        Command::Migrate => {
            repo.close().await;
            return Ok(());
        }
        other => {
            let service = JobService::new(repo.clone());
            let result = cli::run(&service, other).await;
            repo.close().await;
            return result.map_err(std::io::Error::other);
        }
    }

    let job_service = web::Data::new(JobService::new(repo.clone()));
    let max_payload_size = config.max_payload_size;
    let cors_allowed_origins = config.cors_allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_allowed_origins))
            .app_data(job_service.clone())
            .app_data(validation::json_config(max_payload_size))
            .configure(health_config)
            .configure(job_config)
    });

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server = server
        .bind((config.host.as_str(), config.port))?
        .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let coordinator = ShutdownCoordinator::new(server_handle, server_task, repo);

    coordinator.wait_for_shutdown().await
}
