//! SeaORM adapter for leaderboard_entries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::{Date, OffsetDateTime};

use crate::entities::{leaderboard_entries, players};

#[derive(Debug, Clone)]
pub struct LeaderboardCreate {
    pub entry_date: Date,
    pub difficulty: i16,
    pub player_id: i64,
    pub total_strokes: i32,
}

pub async fn insert_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LeaderboardCreate,
) -> Result<leaderboard_entries::Model, sea_orm::DbErr> {
    leaderboard_entries::ActiveModel {
        id: NotSet,
        entry_date: Set(dto.entry_date),
        difficulty: Set(dto.difficulty),
        player_id: Set(dto.player_id),
        total_strokes: Set(dto.total_strokes),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// Entries for a difficulty dated on or after `since`, each with its player row.
pub async fn find_since_with_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: i16,
    since: Date,
) -> Result<Vec<(leaderboard_entries::Model, Option<players::Model>)>, sea_orm::DbErr> {
    leaderboard_entries::Entity::find()
        .filter(leaderboard_entries::Column::Difficulty.eq(difficulty))
        .filter(leaderboard_entries::Column::EntryDate.gte(since))
        .order_by_asc(leaderboard_entries::Column::Id)
        .find_also_related(players::Entity)
        .all(conn)
        .await
}
