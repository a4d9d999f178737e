use sea_orm::TransactionTrait;
use spingolf_backend::adapters::games_sea;
use spingolf_backend::db::require_db;
use spingolf_backend::entities::games::GameStatus;
use spingolf_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use spingolf_backend::infra::db_errors::map_db_err;
use spingolf_backend::repos::games::{self, GameUpdate};
use spingolf_backend::AppError;
use time::OffsetDateTime;

use crate::support::build_test_state;
use crate::support::factory::{pending_game, started_game};

#[tokio::test]
async fn update_bumps_lock_version() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 1).await?;

    let updated = games::update_game(
        &txn,
        GameUpdate::new(game.id, game.lock_version)
            .with_total_strokes(3)
            .with_current_hole(2),
    )
    .await?;

    assert_eq!(updated.lock_version, game.lock_version + 1);
    assert_eq!(updated.total_strokes, 3);
    assert_eq!(updated.current_hole, 2);
    assert_eq!(updated.status, GameStatus::Started);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn stale_lock_version_is_a_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 1).await?;

    games::update_game(
        &txn,
        GameUpdate::new(game.id, game.lock_version).with_total_strokes(1),
    )
    .await?;

    // A second writer still holding the old version loses.
    let err = games::update_game(
        &txn,
        GameUpdate::new(game.id, game.lock_version).with_total_strokes(1),
    )
    .await
    .expect_err("stale version");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));

    let app: AppError = err.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.status().as_u16(), 409);

    let current = games::require_game(&txn, game.id).await?;
    assert_eq!(current.total_strokes, 1);
    assert_eq!(current.lock_version, game.lock_version + 1);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn update_of_missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let raw = games_sea::update_game(&txn, GameUpdate::new(i64::MAX, 1).with_total_strokes(1))
        .await
        .expect_err("no such game");
    assert!(matches!(
        map_db_err(raw),
        DomainError::NotFound(NotFoundKind::Game, _)
    ));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn completion_sets_status_and_timestamp() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 1).await?;
    let now = OffsetDateTime::now_utc();

    let done = games::update_game(
        &txn,
        GameUpdate::new(game.id, game.lock_version)
            .with_total_strokes(18)
            .completed_at(now),
    )
    .await?;
    assert_eq!(done.status, GameStatus::Completed);
    assert!(done.completed_at.is_some());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn start_pending_by_code_only_matches_pending() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = pending_game(&txn, 4).await?;
    let now = OffsetDateTime::now_utc();

    let started = games_sea::start_pending_by_code(&txn, &game.code, now)
        .await?
        .expect("pending game starts");
    assert_eq!(started.status, GameStatus::Started);
    assert_eq!(started.current_hole, 1);
    assert_eq!(started.lock_version, game.lock_version + 1);

    assert!(games_sea::start_pending_by_code(&txn, &game.code, now)
        .await?
        .is_none());
    assert!(games_sea::start_pending_by_code(&txn, "missing", now)
        .await?
        .is_none());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn find_by_code_round_trips_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = pending_game(&txn, 3).await?;

    let found = games::find_by_code(&txn, &game.code)
        .await?
        .expect("game by code");
    assert_eq!(found, game);
    assert!(games::find_by_code(&txn, "nope").await?.is_none());

    txn.rollback().await?;
    Ok(())
}
