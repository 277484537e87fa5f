use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("email {email} is already registered")]
    DuplicateEmail { email: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Row shape persisted for a signed-up user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: i64,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, record: UserRecord) -> Result<(), UserRepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserRepositoryError>;
}
