//! DTOs for the games_sea adapter.

use time::OffsetDateTime;

use crate::entities::games::GameStatus;

/// A new pending game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub code: String,
    pub device_id: String,
    pub player_id: i64,
    pub difficulty: i16,
}

impl GameCreate {
    pub fn new(code: impl Into<String>, device_id: impl Into<String>, player_id: i64) -> Self {
        Self {
            code: code.into(),
            device_id: device_id.into(),
            player_id,
            difficulty: 1,
        }
    }

    pub fn with_difficulty(mut self, difficulty: i16) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Any combination of progress fields, applied with a single lock_version bump.
///
/// `expected_version` must match the row's current lock_version.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub status: Option<GameStatus>,
    pub total_strokes: Option<i32>,
    pub current_hole: Option<i16>,
    pub completed_at: Option<OffsetDateTime>,
    pub expected_version: i32,
}

impl GameUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            status: None,
            total_strokes: None,
            current_hole: None,
            completed_at: None,
            expected_version,
        }
    }

    pub fn with_total_strokes(mut self, strokes: i32) -> Self {
        self.total_strokes = Some(strokes);
        self
    }

    pub fn with_current_hole(mut self, hole: i16) -> Self {
        self.current_hole = Some(hole);
        self
    }

    /// Terminal transition; also stamps `completed_at`.
    pub fn completed_at(mut self, at: OffsetDateTime) -> Self {
        self.status = Some(GameStatus::Completed);
        self.completed_at = Some(at);
        self
    }
}
