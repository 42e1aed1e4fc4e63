use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/member/{member_id}", get(handler::by_member))
        .route("/{id}", put(handler::update).delete(handler::remove))
}
