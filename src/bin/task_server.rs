//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! TASKS_BIND_ADDR=127.0.0.1:8080 DATABASE_URL=postgres://... task_server
//! ```
//!
//! Without `DATABASE_URL` tasks are kept in memory and lost on exit. Log
//! verbosity follows `RUST_LOG` and defaults to `info`.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use tasklist::config::ServerConfig;
use tasklist::task::{
    adapters::{
        http::router,
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, build_pool},
    },
    ports::TaskRepository,
    services::TaskService,
    validation::DefaultTaskValidator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().wrap_err("failed to read server configuration")?;

    if let Some(database_url) = config.database_url.as_deref() {
        let pool = build_pool(database_url, config.pool_size)
            .wrap_err("failed to connect to PostgreSQL")?;
        info!(pool_size = config.pool_size, "using PostgreSQL task storage");
        serve(&config, PostgresTaskRepository::new(pool)).await
    } else {
        info!("DATABASE_URL not set, using in-memory task storage");
        serve(&config, InMemoryTaskRepository::new()).await
    }
}

async fn serve<R>(config: &ServerConfig, repository: R) -> eyre::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(
        Arc::new(repository),
        Arc::new(DefaultTaskValidator::new()),
        Arc::new(DefaultClock),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "task server listening");

    axum::serve(listener, router(service))
        .await
        .wrap_err("task server terminated")
}
