use std::path::PathBuf;

/// Server configuration.
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory for the database and logs |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Tracing level filter |
/// | LOG_DIR | (unset) | Daily-rolling log file directory |
/// | MAX_CONNECTIONS | 5 | SQLite pool size |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (milliseconds) |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database file and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Tracing level filter
    pub log_level: String,
    /// Log file directory; `None` keeps logging on stdout only
    pub log_dir: Option<String>,
    /// SQLite connection pool size
    pub max_connections: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the fields tests care about, keeping the rest from the
    /// environment.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the SQLite database file inside the working directory.
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("gym.db")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
