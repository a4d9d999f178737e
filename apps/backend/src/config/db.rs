use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which environment a database connection is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces the `_test` suffix on Postgres database names.
    Test,
}

/// Storage backend selected by `DB_KIND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!("Unknown DB_KIND '{other}'"))),
        }
    }
}

impl DbKind {
    /// `DB_KIND` from the environment, `sqlite-file` when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(v) => v.parse(),
            Err(_) => Ok(DbKind::SqliteFile),
        }
    }
}

/// Credentials to connect with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Runtime access for request handling
    App,
    /// Schema owner, used by the migration runner
    Owner,
}

/// Connection URL for the given environment, backend and credential set.
pub fn db_url(env: RuntimeEnv, kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::SqliteFile => {
            let path = sqlite_path();
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

fn sqlite_path() -> String {
    env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "golf_league.db".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("SPINGOLF_OWNER_USER")?,
            must_var("SPINGOLF_OWNER_PASSWORD")?,
        )),
    }
}

/// Required environment variable, or a config error naming it.
pub fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
