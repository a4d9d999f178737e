//! Domain layer: the course, shot scoring, and leaderboard ranking.
//! Pure logic with no I/O.

pub mod course;
pub mod leaderboard;
pub mod scoring;


pub use course::{tolerance_for, Course, Hole};
pub use leaderboard::{rank_best_scores, RankedScore, ScoreRow};
pub use scoring::{evaluate_shot, GameProgress, ShotDecision, ShotOutcome};
