// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::ResponseError;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rule_violations_to_422() {
    let de = DomainError::validation(ValidationKind::MustFollowSuit, "follow hearts");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MustFollowSuit);
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_game_finished_to_conflict() {
    let app: AppError = DomainError::conflict(ConflictKind::GameFinished, "done").into();
    assert_eq!(app.code().as_str(), "GAME_FINISHED");
    assert_eq!(app.status().as_u16(), 409);

    let generic: AppError =
        DomainError::conflict(ConflictKind::Other("x".into()), "generic").into();
    assert_eq!(generic.code(), ErrorCode::Conflict);
}

#[test]
fn maps_not_found_kinds() {
    let app: AppError = DomainError::not_found(NotFoundKind::Card, "card 9").into();
    assert_eq!(app.code(), ErrorCode::CardNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "card 9");
}

#[test]
fn maps_infra_errors() {
    let unavailable: AppError =
        DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(unavailable.status().as_u16(), 503);

    let timeout: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
    assert_eq!(timeout.code(), ErrorCode::DbTimeout);
}

#[test]
fn problem_details_response_uses_problem_json() {
    let app = AppError::not_found(ErrorCode::GameNotFound, "Game 7 not found");
    let resp = app.error_response();
    assert_eq!(resp.status().as_u16(), 404);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/problem+json"));
    assert!(resp.headers().get("x-trace-id").is_some());
}
