//! HTTP surface, one module per resource.
//!
//! Each module exposes `router()` returning a `Router<ServerState>` nested
//! under its `/api/...` prefix; handlers live in the sibling `handler`
//! module and return `AppResult<Json<...>>`.

pub mod attendance;
pub mod feedback;
pub mod health;
pub mod members;
pub mod payments;
pub mod progress;
pub mod trainers;
pub mod workouts;
