use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::auth::use_cases::sign_up::dto::{SignUp, User};
use crate::modules::auth::use_cases::sign_up::users_port::{
    UserRecord, UserRepository, UserRepositoryError,
};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(String),

    #[error(transparent)]
    Repository(#[from] UserRepositoryError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: SignUp) -> Result<User, ApplicationError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(ApplicationError::Domain(format!(
                "email {} is already registered",
                command.email
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(command.password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?
            .to_string();

        let record = UserRecord {
            user_id: Uuid::now_v7().to_string(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: Utc::now().timestamp_millis(),
        };

        // The unique index still guards the window between the lookup and
        // the insert.
        match self.repository.insert(record.clone()).await {
            Ok(()) => {}
            Err(UserRepositoryError::DuplicateEmail { email }) => {
                return Err(ApplicationError::Domain(format!(
                    "email {email} is already registered"
                )));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(User {
            user_id: record.user_id,
            email: record.email,
            name: record.name,
            created_at: record.created_at,
        })
    }
}
