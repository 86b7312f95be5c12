// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found() {
    let game = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = game.into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);

    // Generic fallback for other missing resources
    let other = DomainError::not_found(NotFoundKind::Other("row".into()), "no row");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
    assert_eq!(app.status().as_u16(), 503);
    assert!(matches!(app, AppError::DbUnavailable { .. }));

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "bad grid");
    let app: AppError = corrupt.into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.status().as_u16(), 500);

    let timeout = DomainError::infra(InfraErrorKind::Timeout, "slow");
    let app: AppError = timeout.into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".into()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation("invalid input");
    assert!(matches!(validation, DomainError::Validation(_)));

    let not_found = DomainError::not_found(NotFoundKind::Game, "game missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Game, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::DbUnavailable, _)
    ));
}

#[test]
fn display_formats_are_stable() {
    assert_eq!(
        DomainError::validation("x out of range").to_string(),
        "validation error: x out of range"
    );
    assert_eq!(
        DomainError::not_found(NotFoundKind::Game, "missing").to_string(),
        "not found Game: missing"
    );
}
