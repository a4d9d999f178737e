//! Game repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games::{self, GameStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

pub use games_adapter::{GameCreate, GameUpdate};

/// A game as the session engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub code: String,
    pub device_id: String,
    pub player_id: i64,
    pub difficulty: i16,
    pub status: GameStatus,
    pub total_strokes: i32,
    pub current_hole: i16,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub completed_at: Option<OffsetDateTime>,
    pub lock_version: i32,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            device_id: model.device_id,
            player_id: model.player_id,
            difficulty: model.difficulty,
            status: model.status,
            total_strokes: model.total_strokes,
            current_hole: model.current_hole,
            created_at: model.created_at,
            started_at: model.started_at,
            completed_at: model.completed_at,
            lock_version: model.lock_version,
        }
    }
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Ok(Game::from(game))
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_code(conn, code).await?;
    Ok(game.map(Game::from))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

/// Start the pending game with this code, or `NotFound` if there is none.
pub async fn start_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
    now: OffsetDateTime,
) -> Result<Game, DomainError> {
    games_adapter::start_pending_by_code(conn, code, now)
        .await?
        .map(Game::from)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, "Game not found or already started")
        })
}

/// Apply `dto` under optimistic locking.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<Game, DomainError> {
    let game = games_adapter::update_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn count_created_since<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    since: OffsetDateTime,
) -> Result<u64, DomainError> {
    Ok(games_adapter::count_created_since(conn, since).await?)
}
