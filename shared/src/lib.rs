//! Shared types for the gym management backend.
//!
//! Wire models live in [`models`]; every struct serializes with camelCase
//! keys so the HTTP surface matches the clients. Database row mapping is
//! feature-gated behind `db` so lightweight consumers do not pull in sqlx.

pub mod models;
pub mod util;
