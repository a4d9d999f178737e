// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::InvalidHole, "hole 19 is off the course");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidHole);
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_missing_parameters_to_400() {
    let de = DomainError::validation(ValidationKind::MissingGameCode, "No game code");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MissingGameCode);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_hole_out_of_sequence_to_409() {
    let de = DomainError::validation(ValidationKind::HoleOutOfSequence, "expected hole 3");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "HOLE_OUT_OF_SEQUENCE");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_invalid_state() {
    let de = DomainError::invalid_state("Game not active");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "INVALID_STATE");
    assert_eq!(app.status().as_u16(), 409);
    assert!(matches!(app, AppError::InvalidState { .. }));
}

#[test]
fn maps_conflicts() {
    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".to_string()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "Game not found");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Device, "no device");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "DEVICE_NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
