use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/feedback", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/member/{member_id}", get(handler::by_member))
        .route("/trainer/{trainer_id}", get(handler::by_trainer))
        .route("/all", get(handler::list))
        .route("/{id}/read", put(handler::mark_read))
}
