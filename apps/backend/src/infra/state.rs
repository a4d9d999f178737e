use crate::config::db::{DbKind, RuntimeEnv};
use crate::domain::course::Course;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

enum DbSource {
    None,
    Bootstrap(DbKind),
}

/// Assembles `AppState` for `main` and for tests.
pub struct StateBuilder {
    env: RuntimeEnv,
    db: DbSource,
    course: Course,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db: DbSource::None,
            course: Course::standard(),
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    /// Connect and migrate during `build`.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db = DbSource::Bootstrap(kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            DbSource::None => Ok(AppState::without_db(self.course)),
            DbSource::Bootstrap(kind) => {
                let conn = bootstrap_db(self.env, kind).await?;
                Ok(AppState::new(conn, self.course))
            }
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
