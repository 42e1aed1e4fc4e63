//! Gym Server - membership management backend
//!
//! # Module structure
//!
//! ```text
//! gym-server/src/
//! ├── core/          # Configuration, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Connection pool and repositories
//! ├── membership/    # Member ids and lifecycle rules
//! ├── billing/       # Payment standing derivation
//! ├── credentials/   # Login provisioning for members and trainers
//! ├── routes/        # Router assembly and middleware stack
//! └── utils/         # Errors, logging, clock
//! ```

pub mod api;
pub mod billing;
pub mod core;
pub mod credentials;
pub mod db;
pub mod membership;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/_  ______ ___
 / / __/ / / / __ `__ \
/ /_/ / /_/ / / / / / /
\____/\__, /_/ /_/ /_/
     /____/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}

/// Prepare the process environment: load `.env`, then start logging.
///
/// Runs before [`Config::from_env`] so startup itself is logged.
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();

    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}
