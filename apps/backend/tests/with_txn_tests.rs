//! `with_txn` rollback on error and `SharedTxn` reuse.
mod common;
mod support;

use std::sync::Arc;

use actix_web::test;
use actix_web::HttpMessage;
use sea_orm::TransactionTrait;
use trumps_backend::db::txn::{with_txn, SharedTxn};
use trumps_backend::error::AppError;
use trumps_backend::errors::ErrorCode;
use trumps_backend::repos::users;
use trumps_backend::services::users as user_service;

use support::test_state::memory_state;

#[actix_web::test]
async fn error_rolls_back_writes() -> Result<(), AppError> {
    let state = memory_state().await;

    let err = with_txn(None, &state, |txn| {
        Box::pin(async move {
            user_service::create_user(txn, "ghost", "ghost@example.test").await?;
            Err::<(), _>(AppError::internal("boom"))
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);

    let found = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(users::find_by_email(txn, "ghost@example.test").await?) })
    })
    .await?;
    assert!(found.is_none());
    Ok(())
}

#[actix_web::test]
async fn shared_txn_is_reused_and_owned_by_the_caller() -> Result<(), AppError> {
    let state = memory_state().await;
    let shared = SharedTxn(Arc::new(state.db().begin().await?));

    let req = test::TestRequest::default().to_http_request();
    req.extensions_mut().insert(shared.clone());

    let created = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { user_service::create_user(txn, "ann", "ann@example.test").await })
    })
    .await?;

    // A second call sees the first call's write: no commit or rollback in between.
    let seen = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(users::find_by_email(txn, "ann@example.test").await?) })
    })
    .await?;
    assert_eq!(seen.map(|u| u.id), Some(created.id));

    drop(req);
    let txn = Arc::try_unwrap(shared.0)
        .unwrap_or_else(|_| panic!("shared transaction still referenced"));
    txn.rollback().await?;

    let after = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(users::find_by_email(txn, "ann@example.test").await?) })
    })
    .await?;
    assert!(after.is_none());
    Ok(())
}

#[actix_web::test]
async fn duplicate_registration_is_a_conflict() -> Result<(), AppError> {
    let state = memory_state().await;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            user_service::create_user(txn, "bob", "bob@example.test").await?;

            let err = user_service::create_user(txn, "bob", "other@example.test")
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::UniqueUsername);

            let again = user_service::ensure_user(txn, "bob2", "bob@example.test").await?;
            assert_eq!(again.username, "bob");
            Ok(())
        })
    })
    .await
}
