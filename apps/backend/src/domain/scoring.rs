//! Shot evaluation: pure decision logic, no persistence.
//!
//! `evaluate_shot` takes the game's current progress and one measurement and
//! returns everything the session engine must write back. Every evaluated
//! shot costs exactly one stroke, hit or miss.

use serde::Serialize;

use crate::domain::course::{tolerance_for, Course};
use crate::entities::games::GameStatus;
use crate::errors::domain::{DomainError, ValidationKind};

/// The slice of a game that scoring depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameProgress {
    pub status: GameStatus,
    pub difficulty: i16,
    pub current_hole: i16,
    pub total_strokes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShotOutcome {
    /// Missed; the player stays on the hole.
    Continue {
        /// Signed correction toward the target (`target - measurement`)
        needed: f64,
        current_target: f64,
        tolerance: f64,
        par: u8,
        strokes_on_hole: i32,
    },
    HoleCompleted {
        next_hole: i16,
        next_target: f64,
        next_par: u8,
        total_holes: i16,
        strokes_on_hole: i32,
    },
    GameCompleted {
        total_strokes: i32,
        total_par: i32,
        score_diff: i32,
    },
}

/// What the engine persists after a shot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotDecision {
    pub hole: i16,
    pub measurement: f64,
    pub new_total: i32,
    /// Hole pointer after the shot; unchanged on a miss or on course completion.
    pub next_hole: i16,
    /// True when the shot landed within tolerance.
    pub hole_conquered: bool,
    pub game_completed: bool,
    pub deviation: f64,
    pub outcome: ShotOutcome,
}

impl ShotOutcome {
    /// Short human-readable summary for API clients.
    pub fn message(&self, hole: i16) -> String {
        match self {
            ShotOutcome::Continue { needed, .. } => {
                format!("Missed! Off by {:.1} revolutions", needed.abs())
            }
            ShotOutcome::HoleCompleted { .. } => format!("Hole {hole} completed!"),
            ShotOutcome::GameCompleted { total_strokes, .. } => {
                format!("Game completed! Total strokes: {total_strokes}")
            }
        }
    }
}

/// Inclusive on the boundary: a deviation equal to the tolerance is a hit.
pub fn is_hit(deviation: f64, tolerance: f64) -> bool {
    deviation <= tolerance
}

pub fn evaluate_shot(
    course: &Course,
    game: &GameProgress,
    hole: i32,
    measurement: f64,
) -> Result<ShotDecision, DomainError> {
    if game.status != GameStatus::Started {
        return Err(DomainError::invalid_state(format!(
            "Game not active (status: {:?})",
            game.status
        )));
    }

    let hole_no = i16::try_from(hole).ok();
    let Some(current) = hole_no.and_then(|n| course.hole_at(n)) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidHole,
            format!("Hole {hole} is not on the course (1..={})", course.hole_count()),
        ));
    };

    if current.number != game.current_hole {
        return Err(DomainError::validation(
            ValidationKind::HoleOutOfSequence,
            format!(
                "Shot reported for hole {hole} but the game is on hole {}",
                game.current_hole
            ),
        ));
    }

    if !measurement.is_finite() {
        return Err(DomainError::validation(
            ValidationKind::InvalidMeasurement,
            "Measurement must be a finite number",
        ));
    }

    let tolerance = tolerance_for(game.difficulty);
    let difference = measurement - current.target;
    let deviation = difference.abs();
    let prior_total = game.total_strokes;
    let new_total = prior_total + 1;
    let strokes_on_hole = new_total - prior_total;

    if !is_hit(deviation, tolerance) {
        return Ok(ShotDecision {
            hole: current.number,
            measurement,
            new_total,
            next_hole: current.number,
            hole_conquered: false,
            game_completed: false,
            deviation,
            outcome: ShotOutcome::Continue {
                needed: -difference,
                current_target: current.target,
                tolerance,
                par: current.par,
                strokes_on_hole,
            },
        });
    }

    if course.is_last(current.number) {
        let total_par = course.total_par();
        return Ok(ShotDecision {
            hole: current.number,
            measurement,
            new_total,
            next_hole: current.number,
            hole_conquered: true,
            game_completed: true,
            deviation,
            outcome: ShotOutcome::GameCompleted {
                total_strokes: new_total,
                total_par,
                score_diff: new_total - total_par,
            },
        });
    }

    let next = course.hole_at(current.number + 1).ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidHole, "Next hole missing from course")
    })?;

    Ok(ShotDecision {
        hole: current.number,
        measurement,
        new_total,
        next_hole: next.number,
        hole_conquered: true,
        game_completed: false,
        deviation,
        outcome: ShotOutcome::HoleCompleted {
            next_hole: next.number,
            next_target: next.target,
            next_par: next.par,
            total_holes: course.hole_count(),
            strokes_on_hole,
        },
    })
}
