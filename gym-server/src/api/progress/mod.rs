use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/progress", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/trainer/{trainer_id}", get(handler::by_trainer))
        .route("/member/{member_id}", get(handler::by_member))
        .route("/{progress_id}", put(handler::update).delete(handler::remove))
}
