// In-memory implementation of the UserRepository port.
//
// Supports handler and inbound tests, and local development without a
// database. Enforces the same unique-email rule the SQL schema does.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::modules::auth::use_cases::sign_up::users_port::{
    UserRecord, UserRepository, UserRepositoryError,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserRecord>>,
    offline: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail, mimicking an unreachable backend.
    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), UserRepositoryError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(UserRepositoryError::Backend("user store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: UserRecord) -> Result<(), UserRepositoryError> {
        self.check_online()?;
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|row| row.email == record.email) {
            return Err(UserRepositoryError::DuplicateEmail {
                email: record.email,
            });
        }
        rows.push(record);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserRepositoryError> {
        self.check_online()?;
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }
}
