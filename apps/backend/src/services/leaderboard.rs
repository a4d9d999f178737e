//! Read-side ranking over recent leaderboard entries.

use sea_orm::ConnectionTrait;
use time::{Date, Duration, OffsetDateTime};

use crate::domain::leaderboard::{rank_best_scores, RankedScore};
use crate::error::AppError;
use crate::repos::leaderboard;

/// Best score per player for `difficulty` over the trailing window ending today.
pub async fn top_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: i16,
    window_days: i64,
    limit: u64,
) -> Result<Vec<RankedScore>, AppError> {
    let today = OffsetDateTime::now_utc().date();
    top_scores_as_of(conn, difficulty, window_days, limit, today).await
}

/// As `top_scores`, with an explicit "today".
pub async fn top_scores_as_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: i16,
    window_days: i64,
    limit: u64,
    today: Date,
) -> Result<Vec<RankedScore>, AppError> {
    let since = window_start(today, window_days);
    let rows = leaderboard::rows_since(conn, difficulty, since).await?;
    Ok(rank_best_scores(rows, limit))
}

/// First date inside a window of `window_days` ending on `today`.
/// Saturates at `Date::MIN` for windows longer than the calendar.
fn window_start(today: Date, window_days: i64) -> Date {
    window_days
        .max(0)
        .checked_mul(86_400)
        .map(Duration::seconds)
        .and_then(|span| today.checked_sub(span))
        .unwrap_or(Date::MIN)
}
