use std::env;
use std::env::VarError;
use std::str::FromStr;

use spingolf_backend::config::db::{DbKind, RuntimeEnv};
use spingolf_backend::infra::state::{build_state, StateBuilder};
use spingolf_backend::state::app_state::AppState;
use spingolf_backend::AppError;

fn read_env_db_kind() -> Result<Option<String>, AppError> {
    match env::var("SPINGOLF_TEST_DB_KIND") {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(AppError::config(format!(
            "failed to read SPINGOLF_TEST_DB_KIND: {err}"
        ))),
    }
}

/// In-memory SQLite unless `SPINGOLF_TEST_DB_KIND` says otherwise.
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    let resolved = match read_env_db_kind()? {
        Some(ref raw) => DbKind::from_str(raw.as_str())?,
        None => DbKind::SqliteMemory,
    };
    Ok(resolved)
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    let db_kind = resolve_test_db_kind()?;
    Ok(build_state().with_env(RuntimeEnv::Test).with_db(db_kind))
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder()?.build().await
}
