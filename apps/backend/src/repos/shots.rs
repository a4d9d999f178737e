//! Shot history.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::shot_results_sea::{self as shots_adapter, ShotCreate};
use crate::entities::shot_results;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub id: i64,
    pub game_id: i64,
    pub hole_number: i16,
    pub strokes: i32,
    pub revolutions: f64,
    pub completed: bool,
    pub recorded_at: OffsetDateTime,
}

impl From<shot_results::Model> for ShotRecord {
    fn from(m: shot_results::Model) -> Self {
        Self {
            id: m.id,
            game_id: m.game_id,
            hole_number: m.hole_number,
            strokes: m.strokes,
            revolutions: m.revolutions,
            completed: m.completed,
            recorded_at: m.recorded_at,
        }
    }
}

pub async fn record_shot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    hole_number: i16,
    strokes: i32,
    revolutions: f64,
) -> Result<ShotRecord, DomainError> {
    let shot = shots_adapter::insert_shot(
        conn,
        ShotCreate {
            game_id,
            hole_number,
            strokes,
            revolutions,
        },
    )
    .await?;
    Ok(shot.into())
}

pub async fn mark_hole_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    hole_number: i16,
) -> Result<u64, DomainError> {
    Ok(shots_adapter::mark_hole_completed(conn, game_id, hole_number).await?)
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<ShotRecord>, DomainError> {
    let rows = shots_adapter::list_for_game(conn, game_id).await?;
    Ok(rows.into_iter().map(ShotRecord::from).collect())
}
