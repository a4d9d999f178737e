//! Error codes for the Spinner Golf backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Hole number outside the course
    InvalidHole,
    /// Shot submitted for a hole other than the game's current hole
    HoleOutOfSequence,
    /// Measurement is not a finite number
    InvalidMeasurement,
    /// Game code query parameter missing
    MissingGameCode,
    /// Device id missing from request body
    MissingDeviceId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found (or not in the expected status)
    GameNotFound,
    /// Device not found
    DeviceNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Lifecycle
    /// Game is not in a state that allows the operation
    InvalidState,

    // Business Logic Conflicts
    /// Game code already exists
    GameCodeConflict,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidHole => "INVALID_HOLE",
            Self::HoleOutOfSequence => "HOLE_OUT_OF_SEQUENCE",
            Self::InvalidMeasurement => "INVALID_MEASUREMENT",
            Self::MissingGameCode => "MISSING_GAME_CODE",
            Self::MissingDeviceId => "MISSING_DEVICE_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::DeviceNotFound => "DEVICE_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::InvalidState => "INVALID_STATE",

            Self::GameCodeConflict => "GAME_CODE_CONFLICT",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
