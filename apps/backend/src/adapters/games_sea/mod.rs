//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::games::{self, GameStatus};

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

/// Conditional update on `id` and `lock_version`, bumping the version, then refetch.
///
/// Zero affected rows means either the game is gone (`GAME_NOT_FOUND`) or
/// someone else moved it first (`OPTIMISTIC_LOCK` with both versions).
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let result = configure_update(games::Entity::update_many())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match games::Entity::find_by_id(id).one(conn).await? {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, game.lock_version
            ))),
            None => Err(sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))),
        };
    }

    require_game(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Code.eq(code))
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: NotSet,
        code: Set(dto.code),
        device_id: Set(dto.device_id),
        player_id: Set(dto.player_id),
        difficulty: Set(dto.difficulty),
        status: Set(GameStatus::Pending),
        created_at: Set(OffsetDateTime::now_utc()),
        started_at: Set(None),
        completed_at: Set(None),
        total_strokes: Set(0),
        current_hole: Set(1),
        lock_version: Set(1),
    };

    game.insert(conn).await
}

/// Flip a pending game to started, matched by code.
///
/// The status filter makes this single-use: `Ok(None)` when no pending game
/// has that code (unknown, already started, or completed).
pub async fn start_pending_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
    now: OffsetDateTime,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::Status, Expr::val(GameStatus::Started).into())
        .col_expr(games::Column::StartedAt, Expr::val(Some(now)).into())
        .col_expr(games::Column::CurrentHole, Expr::val(1i16).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Code.eq(code))
        .filter(games::Column::Status.eq(GameStatus::Pending))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    find_by_code(conn, code).await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |mut update| {
        if let Some(status) = dto.status {
            update = update.col_expr(games::Column::Status, Expr::val(status).into());
        }
        if let Some(strokes) = dto.total_strokes {
            update = update.col_expr(games::Column::TotalStrokes, Expr::val(strokes).into());
        }
        if let Some(hole) = dto.current_hole {
            update = update.col_expr(games::Column::CurrentHole, Expr::val(hole).into());
        }
        if let Some(at) = dto.completed_at {
            update = update.col_expr(games::Column::CompletedAt, Expr::val(Some(at)).into());
        }
        update
    })
    .await
}

pub async fn count_created_since<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    since: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::CreatedAt.gte(since))
        .count(conn)
        .await
}
