use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::course::Course;

/// Shared resources handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` when built without a database (unit tests, health probes)
    db: Option<DatabaseConnection>,
    /// Built once at startup, never mutated
    pub course: Arc<Course>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, course: Course) -> Self {
        Self {
            db: Some(db),
            course: Arc::new(course),
        }
    }

    pub fn without_db(course: Course) -> Self {
        Self {
            db: None,
            course: Arc::new(course),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
