use std::sync::Arc;

use sea_orm::{ConnectionTrait, TransactionTrait};
use spingolf_backend::config::db::{DbKind, RuntimeEnv};
use spingolf_backend::db::require_db;
use spingolf_backend::domain::scoring::ShotOutcome;
use spingolf_backend::entities::games::GameStatus;
use spingolf_backend::repos::{games, leaderboard, shots};
use spingolf_backend::services::sessions::SessionService;
use spingolf_backend::infra::state::build_state;
use spingolf_backend::{AppError, Course};
use time::OffsetDateTime;

use crate::support::build_test_state;
use crate::support::factory::{pending_game, started_game};

fn engine() -> SessionService {
    SessionService::new(Arc::new(Course::standard()))
}

#[tokio::test]
async fn start_game_claims_pending_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let pending = pending_game(&txn, 3).await?;
    assert_eq!(pending.status, GameStatus::Pending);

    let started = engine().start_game(&txn, &pending.code).await?;
    assert_eq!(started.game.id, pending.id);
    assert_eq!(started.game.status, GameStatus::Started);
    assert_eq!(started.game.current_hole, 1);
    assert!(started.game.started_at.is_some());
    assert_eq!(started.tolerance, 5.0);
    assert_eq!(started.total_holes, 18);
    assert_eq!(started.targets.len(), 18);
    assert_eq!((started.target, started.par), (140.0, 3));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn start_game_is_single_use() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let pending = pending_game(&txn, 1).await?;
    engine().start_game(&txn, &pending.code).await?;

    let err = engine()
        .start_game(&txn, &pending.code)
        .await
        .expect_err("second claim must fail");
    assert_eq!(err.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(err.status().as_u16(), 404);

    let err = engine()
        .start_game(&txn, "NOSUCHCODE")
        .await
        .expect_err("unknown code");
    assert_eq!(err.code().as_str(), "GAME_NOT_FOUND");

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn hit_then_miss_scenario() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 3).await?;

    let first = engine().submit_shot(&txn, game.id, 1, 143.0).await?;
    assert_eq!(
        first.decision.outcome,
        ShotOutcome::HoleCompleted {
            next_hole: 2,
            next_target: 180.0,
            next_par: 4,
            total_holes: 18,
            strokes_on_hole: 1,
        }
    );
    assert_eq!(first.game.current_hole, 2);
    assert_eq!(first.game.total_strokes, 1);

    let second = engine().submit_shot(&txn, game.id, 2, 200.0).await?;
    assert_eq!(
        second.decision.outcome,
        ShotOutcome::Continue {
            needed: -20.0,
            current_target: 180.0,
            tolerance: 5.0,
            par: 4,
            strokes_on_hole: 1,
        }
    );
    assert_eq!(second.game.current_hole, 2);
    assert_eq!(second.game.total_strokes, 2);
    assert_eq!(second.game.status, GameStatus::Started);
    assert_eq!(
        second.decision.outcome.message(second.decision.hole),
        "Missed! Off by 20.0 revolutions"
    );

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn shots_are_recorded_and_flagged_on_hit() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 1).await?;

    engine().submit_shot(&txn, game.id, 1, 100.0).await?;
    let before_hit = shots::list_for_game(&txn, game.id).await?;
    assert_eq!(before_hit.len(), 1);
    assert!(!before_hit[0].completed);

    engine().submit_shot(&txn, game.id, 1, 150.0).await?;
    let after_hit = shots::list_for_game(&txn, game.id).await?;
    assert_eq!(after_hit.len(), 2);
    assert!(after_hit.iter().all(|s| s.completed && s.hole_number == 1));
    assert_eq!(
        after_hit.iter().map(|s| s.strokes).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(after_hit[1].revolutions, 150.0);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn perfect_round_completes_game_and_posts_score() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let game = started_game(&txn, 5).await?;
    let course = Course::standard();

    let mut last = None;
    for hole in course.holes() {
        let report = engine()
            .submit_shot(&txn, game.id, i32::from(hole.number), hole.target)
            .await?;
        last = Some(report);
    }
    let last = last.expect("course has holes");

    assert_eq!(
        last.decision.outcome,
        ShotOutcome::GameCompleted {
            total_strokes: 18,
            total_par: 64,
            score_diff: -46,
        }
    );
    assert_eq!(last.game.status, GameStatus::Completed);
    assert_eq!(last.game.total_strokes, 18);
    assert_eq!(last.game.current_hole, 18);
    assert!(last.game.completed_at.is_some());

    let today = OffsetDateTime::now_utc().date();
    let rows = leaderboard::rows_since(&txn, 5, today).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, game.player_id);
    assert_eq!(rows[0].score, 18);

    let err = engine()
        .submit_shot(&txn, game.id, 18, 110.0)
        .await
        .expect_err("completed game accepts no shots");
    assert_eq!(err.code().as_str(), "INVALID_STATE");

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn rejects_shots_that_do_not_fit_progress() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let pending = pending_game(&txn, 1).await?;
    let err = engine()
        .submit_shot(&txn, pending.id, 1, 140.0)
        .await
        .expect_err("pending game");
    assert_eq!(err.code().as_str(), "INVALID_STATE");
    assert_eq!(err.status().as_u16(), 409);

    let game = started_game(&txn, 1).await?;

    let err = engine()
        .submit_shot(&txn, game.id, 2, 180.0)
        .await
        .expect_err("wrong hole");
    assert_eq!(err.code().as_str(), "HOLE_OUT_OF_SEQUENCE");
    assert_eq!(err.status().as_u16(), 409);

    let err = engine()
        .submit_shot(&txn, game.id, 19, 100.0)
        .await
        .expect_err("off the course");
    assert_eq!(err.code().as_str(), "INVALID_HOLE");
    assert_eq!(err.status().as_u16(), 422);

    let err = engine()
        .submit_shot(&txn, game.id, 1, f64::NAN)
        .await
        .expect_err("not a number");
    assert_eq!(err.code().as_str(), "INVALID_MEASUREMENT");

    let err = engine()
        .submit_shot(&txn, i64::MAX, 1, 140.0)
        .await
        .expect_err("unknown game");
    assert_eq!(err.code().as_str(), "GAME_NOT_FOUND");

    // None of the rejections cost a stroke.
    let unchanged = games::require_game(&txn, game.id).await?;
    assert_eq!(unchanged.total_strokes, 0);
    assert!(shots::list_for_game(&txn, game.id).await?.is_empty());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
#[serial_test::serial]
async fn concurrent_shots_on_one_game_advance_it_once() -> Result<(), AppError> {
    let dir = tempfile::tempdir().expect("temp dir");
    std::env::set_var("SQLITE_DB_PATH", dir.path().join("golf_league.db"));
    let state = build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .build()
        .await;
    std::env::remove_var("SQLITE_DB_PATH");
    let state = state?;
    let db = require_db(&state)?;
    db.execute_unprepared("PRAGMA journal_mode = WAL").await?;

    let setup = db.begin().await?;
    let game = started_game(&setup, 1).await?;
    setup.commit().await?;

    // The slower request reads the game before the faster one commits.
    let slow = db.begin().await?;
    let seen = games::require_game(&slow, game.id).await?;
    assert_eq!(seen.current_hole, 1);

    let fast = db.begin().await?;
    let report = engine().submit_shot(&fast, game.id, 1, 140.0).await?;
    assert!(matches!(
        report.decision.outcome,
        ShotOutcome::HoleCompleted { .. }
    ));
    fast.commit().await?;

    let err = engine()
        .submit_shot(&slow, game.id, 1, 140.0)
        .await
        .expect_err("stale writer must lose");
    assert_eq!(err.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(err.status().as_u16(), 409);
    slow.rollback().await?;

    let after = games::require_game(db, game.id).await?;
    assert_eq!(after.total_strokes, 1);
    assert_eq!(after.current_hole, 2);
    assert_eq!(after.lock_version, game.lock_version + 1);
    assert_eq!(shots::list_for_game(db, game.id).await?.len(), 1);
    Ok(())
}
