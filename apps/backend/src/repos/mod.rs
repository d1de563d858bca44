//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod cards;
pub mod dealings;
pub mod entries;
pub mod game_info;
pub mod games;
pub mod players;
pub mod rounds;
pub mod users;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Stored value that no longer decodes into its domain type.
pub(crate) fn corrupt(detail: impl Into<String>) -> DomainError {
    DomainError::infra(InfraErrorKind::DataCorruption, detail)
}
