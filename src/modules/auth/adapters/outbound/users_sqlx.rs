use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::modules::auth::use_cases::sign_up::users_port::{
    UserRecord, UserRepository, UserRepositoryError,
};

/// Postgres implementation of the UserRepository port, backed by the shared
/// connection pool.
pub struct SqlxUserRepository {
    pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn insert(&self, record: UserRecord) -> Result<(), UserRepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO users (user_id, email, name, password_hash, created_at)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&record.user_id)
        .bind(&record.email)
        .bind(&record.name)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(UserRepositoryError::DuplicateEmail {
                    email: record.email,
                })
            }
            Err(e) => Err(UserRepositoryError::Backend(e.to_string())),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserRepositoryError> {
        let row = sqlx::query(
            r#"SELECT user_id, email, name, password_hash, created_at
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserRepositoryError::Backend(e.to_string()))?;

        Ok(row.map(|r| UserRecord {
            user_id: r.get("user_id"),
            email: r.get("email"),
            name: r.get("name"),
            password_hash: r.get("password_hash"),
            created_at: r.get("created_at"),
        }))
    }
}
