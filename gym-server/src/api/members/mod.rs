use axum::{Router, routing::get};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/members", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search", get(handler::search))
        .route("/trainer/{trainer_id}", get(handler::by_trainer))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::remove),
        )
}
