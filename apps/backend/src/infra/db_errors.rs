//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos call `map_db_err` so that services
//! only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Pull `table.column` out of SQLite's "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..].split_whitespace().next()
}

fn unique_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    let sqlite_hit = extract_sqlite_table_column(error_msg) == Some("games.code");
    if sqlite_hit || error_msg.contains("ux_games_code") {
        return Some((ConflictKind::GameCodeConflict, "Game code already exists"));
    }
    None
}

/// SQLITE_BUSY (5) and SQLITE_LOCKED (6): another connection holds the write lock.
fn is_sqlite_busy(error_msg: &str) -> bool {
    error_msg.contains("database is locked")
        || error_msg.contains("database table is locked")
        || error_msg.contains("SQLITE_BUSY")
        || error_msg.contains("SQLITE_LOCKED")
}

#[derive(serde::Deserialize)]
struct LockInfo {
    expected: i32,
    actual: i32,
}

/// Translate a `DbErr` into a `DomainError` with a client-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(NotFoundKind::Other(what.clone()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            let id = msg.trim_start_matches("GAME_NOT_FOUND:");
            warn!(trace_id = %trace_id, game_id = id, "Game not found");
            return DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"));
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            let json = msg.trim_start_matches("OPTIMISTIC_LOCK:");
            if let Ok(info) = serde_json::from_str::<LockInfo>(json) {
                warn!(
                    trace_id = %trace_id,
                    expected = info.expected,
                    actual = info.actual,
                    "Optimistic lock conflict detected"
                );
                return DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {}, actual version {}). Please retry.",
                        info.expected, info.actual
                    ),
                );
            }
            warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Game was modified by another request; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_sqlite_busy(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "SQLite write lock held by a concurrent transaction");
        return DomainError::conflict(
            ConflictKind::OptimisticLock,
            "Game was modified by another request; please retry",
        );
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        if let Some((kind, detail)) = unique_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
