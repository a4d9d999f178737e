//! Leaderboard entries and the rows the aggregator ranks.

use sea_orm::ConnectionTrait;
use time::Date;

use crate::adapters::leaderboard_sea::{self as leaderboard_adapter, LeaderboardCreate};
use crate::domain::leaderboard::ScoreRow;
use crate::errors::domain::DomainError;

pub async fn record_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_date: Date,
    difficulty: i16,
    player_id: i64,
    total_strokes: i32,
) -> Result<(), DomainError> {
    leaderboard_adapter::insert_entry(
        conn,
        LeaderboardCreate {
            entry_date,
            difficulty,
            player_id,
            total_strokes,
        },
    )
    .await?;
    Ok(())
}

/// One row per entry in the window; aggregation happens in `domain::leaderboard`.
pub async fn rows_since<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: i16,
    since: Date,
) -> Result<Vec<ScoreRow>, DomainError> {
    let rows = leaderboard_adapter::find_since_with_players(conn, difficulty, since).await?;
    Ok(rows
        .into_iter()
        .map(|(entry, player)| {
            let (username, full_name) = player
                .map(|p| (p.username, p.full_name))
                .unwrap_or((None, None));
            ScoreRow {
                player_id: entry.player_id,
                score: entry.total_strokes,
                username,
                full_name,
            }
        })
        .collect())
}
