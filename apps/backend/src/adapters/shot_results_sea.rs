//! SeaORM adapter for shot_results.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::shot_results;

#[derive(Debug, Clone)]
pub struct ShotCreate {
    pub game_id: i64,
    pub hole_number: i16,
    pub strokes: i32,
    pub revolutions: f64,
}

pub async fn insert_shot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ShotCreate,
) -> Result<shot_results::Model, sea_orm::DbErr> {
    shot_results::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        hole_number: Set(dto.hole_number),
        strokes: Set(dto.strokes),
        revolutions: Set(dto.revolutions),
        completed: Set(false),
        recorded_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// Flag every shot recorded on the hole as completed; returns rows touched.
pub async fn mark_hole_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    hole_number: i16,
) -> Result<u64, sea_orm::DbErr> {
    let res = shot_results::Entity::update_many()
        .col_expr(shot_results::Column::Completed, Expr::val(true).into())
        .filter(shot_results::Column::GameId.eq(game_id))
        .filter(shot_results::Column::HoleNumber.eq(hole_number))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<shot_results::Model>, sea_orm::DbErr> {
    shot_results::Entity::find()
        .filter(shot_results::Column::GameId.eq(game_id))
        .order_by_asc(shot_results::Column::Id)
        .all(conn)
        .await
}
