use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::mark))
        .route("/member/{member_id}", get(handler::by_member))
        .route("/trainer/{trainer_id}", get(handler::by_trainer))
        .route("/stats/{member_id}", get(handler::stats))
}
