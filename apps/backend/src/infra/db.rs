use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry with a fixed interval; the last error wins.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    interval_ms,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a connection pool. Does not run migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind, owner)?;

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    match kind {
        // Every pooled connection to sqlite::memory: is its own database.
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(16)
                .connect_timeout(Duration::from_secs(5));
        }
    }

    let conn = retry_connection(
        || {
            let opts = opts.clone();
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        CONNECT_ATTEMPTS,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(engine = engine(kind), env = ?env, "database_connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind, DbOwner::App).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;
    Ok(conn)
}
