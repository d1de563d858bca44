use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::users::{self, User};

fn validate_registration(username: &str, email: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::validation_other("Username must not be empty"));
    }
    if !email.contains('@') {
        return Err(DomainError::validation(
            ValidationKind::Other("INVALID_EMAIL".into()),
            "Email must contain '@'",
        ));
    }
    Ok(())
}

/// Register a player. Duplicate usernames or emails surface as conflicts.
pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<User, AppError> {
    validate_registration(username, email)?;
    let user = users::create_user(conn, username.trim(), email).await?;
    info!(user_id = user.id, elo = user.elo, "User registered");
    Ok(user)
}

/// Return the user registered under `email`, creating one when absent.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<User, AppError> {
    if let Some(existing) = users::find_by_email(conn, email).await? {
        debug!(user_id = existing.id, "User already registered");
        return Ok(existing);
    }
    create_user(conn, username, email).await
}
