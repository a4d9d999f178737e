//! Test helpers for generating unique test data
//!
//! Tests share one process (and, for file-backed SQLite, one database), so
//! device ids and player ids are generated to never collide between tests.

use std::sync::atomic::{AtomicI64, Ordering};

use ulid::Ulid;

static NEXT_PLAYER_ID: AtomicI64 = AtomicI64::new(1_000);

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("device");
/// let id2 = unique_str("device");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("device-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique device id (`spinner-{ulid}`).
pub fn unique_device_id() -> String {
    unique_str("spinner")
}

/// Generate a unique numeric player id.
///
/// Player ids mirror messenger account ids, so they are plain integers
/// assigned by the caller rather than by the database.
pub fn unique_player_id() -> i64 {
    NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed)
}
