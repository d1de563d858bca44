//! User repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub elo: i32,
    pub created_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            elo: model.elo,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_by_id(conn, user_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
    })
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email).await?;
    Ok(user.map(User::from))
}

/// Load every id in `user_ids`; any missing id is a NotFound.
pub async fn require_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: &[i64],
) -> Result<Vec<User>, DomainError> {
    let found = users_adapter::find_many(conn, user_ids).await?;
    user_ids
        .iter()
        .map(|id| {
            found
                .iter()
                .find(|u| u.id == *id)
                .cloned()
                .map(User::from)
                .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("User {id} not found")))
        })
        .collect()
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, users_adapter::UserCreate::new(username, email)).await?;
    Ok(User::from(user))
}

pub async fn update_elo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    elo: i32,
) -> Result<User, DomainError> {
    let user = users_adapter::update_elo(conn, user_id, elo).await?;
    Ok(User::from(user))
}
