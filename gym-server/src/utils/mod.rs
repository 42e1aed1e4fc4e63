//! Cross-cutting helpers: errors, logging, time.

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResult};
pub use time::{Clock, FixedClock, SystemClock};

use serde::{Deserialize, Serialize};

/// Plain acknowledgement envelope for mutations that return no entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Ack {
            success: true,
            message: message.into(),
        }
    }
}
