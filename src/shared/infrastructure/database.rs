use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::shared::infrastructure::config::DatabaseConfig;

/// The one Postgres pool shared by every consumer for the process lifetime.
///
/// Constructed once in the composition root and handed out through
/// `AppState` as `Arc<Database>`; there is no ambient global. Cloning the
/// inner pool shares connections, it never duplicates them.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connects eagerly, verifying the database is reachable at startup.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        Ok(Self { pool })
    }

    /// Builds the pool without touching the network; connections open on
    /// first use. Lets tests and tooling construct a `Database` that never
    /// reaches a server.
    pub fn connect_lazy(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.url)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded migrations under `./migrations`.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
