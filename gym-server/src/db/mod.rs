//! SQLite connection management.
//!
//! One pool per process, WAL journal, embedded migrations applied on
//! startup. Repositories borrow the pool; nothing else touches sqlx
//! connection setup.

use std::str::FromStr;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tracing::info;

pub mod repository;

#[derive(Debug, Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `db_path` and bring the
    /// schema up to date.
    pub async fn new(db_path: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        // Writers wait instead of failing fast when the database is locked.
        sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

        info!("Database connected: {db_path}");

        Self::migrate(&pool).await?;

        Ok(Self { pool })
    }

    /// Apply embedded migrations. Also used by tests against in-memory
    /// pools so they exercise the real schema.
    pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations")
            .set_ignore_missing(true)
            .run(pool)
            .await?;
        info!("Database migrations applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Startup against a fresh file must create the schema.
    #[tokio::test]
    async fn new_database_gets_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gym.db");
        let db = DbService::new(path.to_str().unwrap(), 2).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&db.pool)
        .await
        .unwrap();

        for expected in [
            "attendance",
            "feedback",
            "member",
            "payment",
            "progress_entry",
            "trainer",
            "users",
            "workout_plan",
        ] {
            assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
        }
    }

    // Running startup twice against the same file must be a no-op.
    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gym.db");
        let db = DbService::new(path.to_str().unwrap(), 2).await.unwrap();
        drop(db);
        DbService::new(path.to_str().unwrap(), 2).await.unwrap();
    }
}
