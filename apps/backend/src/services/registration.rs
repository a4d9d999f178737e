//! Issuing pending games and device heartbeats.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::games::{self, Game, GameCreate};
use crate::repos::{devices, players};
use crate::utils::join_code::generate_game_code;

const CODE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct RegisterGame {
    pub device_id: String,
    pub player_id: i64,
    pub difficulty: i16,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

/// Create a pending game, registering the player and device on first sight.
pub async fn register_game(
    txn: &DatabaseTransaction,
    req: RegisterGame,
) -> Result<Game, AppError> {
    let device_id = req.device_id.trim();
    if device_id.is_empty() {
        return Err(
            DomainError::validation(ValidationKind::MissingDeviceId, "No device_id").into(),
        );
    }

    players::upsert(txn, req.player_id, req.username, req.full_name).await?;
    devices::ensure(txn, device_id, Some(req.player_id)).await?;

    // Probe before inserting: a failed INSERT would poison the transaction on Postgres.
    for _ in 0..CODE_ATTEMPTS {
        let code = generate_game_code();
        if games::find_by_code(txn, &code).await?.is_some() {
            warn!(code = %code, "Game code collision, regenerating");
            continue;
        }
        let game = games::create_game(
            txn,
            GameCreate::new(code, device_id, req.player_id).with_difficulty(req.difficulty),
        )
        .await?;
        info!(
            game_id = game.id,
            device_id = %game.device_id,
            player_id = game.player_id,
            difficulty = game.difficulty,
            "Game registered"
        );
        return Ok(game);
    }

    Err(DomainError::conflict(
        ConflictKind::GameCodeConflict,
        "Could not allocate a unique game code",
    )
    .into())
}

/// Heartbeat from a device.
pub async fn ping(txn: &DatabaseTransaction, device_id: &str) -> Result<(), AppError> {
    let device_id = device_id.trim();
    if device_id.is_empty() {
        return Err(
            DomainError::validation(ValidationKind::MissingDeviceId, "No device_id").into(),
        );
    }
    devices::touch(txn, device_id, OffsetDateTime::now_utc()).await?;
    Ok(())
}
