//! DTOs for users_sea adapter.

/// DTO for registering a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub elo: Option<i32>,
}

impl UserCreate {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            elo: None,
        }
    }

    pub fn with_elo(mut self, elo: i32) -> Self {
        self.elo = Some(elo);
        self
    }
}
