//! The session engine: starting games and scoring shots.

use std::sync::Arc;

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::course::{tolerance_for, Course};
use crate::domain::scoring::{evaluate_shot, GameProgress, ShotDecision};
use crate::error::AppError;
use crate::repos::games::{self, Game, GameUpdate};
use crate::repos::{leaderboard, shots};

/// A game that has just moved from pending to started.
#[derive(Debug, Clone)]
pub struct StartedGame {
    pub game: Game,
    pub tolerance: f64,
    pub targets: Vec<f64>,
    pub total_holes: i16,
    pub par: u8,
    pub target: f64,
}

/// The game row after a shot, and how the shot was judged.
#[derive(Debug, Clone)]
pub struct ShotReport {
    pub game: Game,
    pub decision: ShotDecision,
}

pub struct SessionService {
    course: Arc<Course>,
}

impl SessionService {
    pub fn new(course: Arc<Course>) -> Self {
        Self { course }
    }

    /// Claim the pending game with `code`. A code can be claimed once.
    pub async fn start_game(
        &self,
        txn: &DatabaseTransaction,
        code: &str,
    ) -> Result<StartedGame, AppError> {
        let game = games::start_by_code(txn, code, OffsetDateTime::now_utc()).await?;
        let first = self.course.first_hole();

        info!(
            game_id = game.id,
            device_id = %game.device_id,
            player_id = game.player_id,
            difficulty = game.difficulty,
            "Game started"
        );

        Ok(StartedGame {
            tolerance: tolerance_for(game.difficulty),
            targets: self.course.targets(),
            total_holes: self.course.hole_count(),
            par: first.par,
            target: first.target,
            game,
        })
    }

    /// Score one shot and persist its consequences.
    ///
    /// Always records the shot and one stroke. A hit flags the hole's shots
    /// completed and advances the hole; a hit on the final hole completes the
    /// game and writes its leaderboard entry. The game row is written under
    /// optimistic locking, so a concurrent shot on the same game fails with
    /// `OPTIMISTIC_LOCK` and everything here rolls back.
    pub async fn submit_shot(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        hole: i32,
        measurement: f64,
    ) -> Result<ShotReport, AppError> {
        let game = games::require_game(txn, game_id).await?;
        let progress = GameProgress {
            status: game.status,
            difficulty: game.difficulty,
            current_hole: game.current_hole,
            total_strokes: game.total_strokes,
        };

        let decision = evaluate_shot(&self.course, &progress, hole, measurement)?;
        debug!(
            game_id,
            hole = decision.hole,
            measurement,
            deviation = decision.deviation,
            hit = decision.hole_conquered,
            "Shot evaluated"
        );

        shots::record_shot(
            txn,
            game.id,
            decision.hole,
            decision.new_total,
            decision.measurement,
        )
        .await?;

        if decision.hole_conquered {
            shots::mark_hole_completed(txn, game.id, decision.hole).await?;
        }

        let now = OffsetDateTime::now_utc();
        let mut update =
            GameUpdate::new(game.id, game.lock_version).with_total_strokes(decision.new_total);
        if decision.game_completed {
            update = update.completed_at(now);
        } else if decision.hole_conquered {
            update = update.with_current_hole(decision.next_hole);
        }
        let updated = games::update_game(txn, update).await?;

        if decision.game_completed {
            leaderboard::record_entry(
                txn,
                now.date(),
                updated.difficulty,
                updated.player_id,
                decision.new_total,
            )
            .await?;
            info!(
                game_id,
                player_id = updated.player_id,
                total_strokes = decision.new_total,
                "Game completed"
            );
        } else if decision.hole_conquered {
            info!(game_id, hole = decision.hole, next_hole = decision.next_hole, "Hole completed");
        }

        Ok(ShotReport {
            game: updated,
            decision,
        })
    }
}
