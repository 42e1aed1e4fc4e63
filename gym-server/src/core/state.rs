use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::{AppError, AppResult, Clock, SystemClock};

/// Shared handles every request touches.
///
/// Cloning is shallow; the pool and clock are reference-counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Source of "now"; swapped for a fixed clock in tests
    pub clock: Arc<dyn Clock>,
}

impl ServerState {
    /// Initialize state for a real run: ensure the working directory
    /// exists, open the database and apply migrations.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create work directory {}: {e}",
                config.work_dir
            ))
        })?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy(), config.max_connections).await?;

        info!("Server state initialized (work_dir: {})", config.work_dir);

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            clock: Arc::new(SystemClock),
        })
    }

    /// Build state around an existing pool. Tests use this with an
    /// in-memory database.
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self {
            config,
            pool,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock, usually with a fixed one.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
