use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::models::{Feedback, FeedbackCreate};
use shared::util;

use crate::core::ServerState;
use crate::db::repository::feedback;
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
    pub feedback: Feedback,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<FeedbackCreate>,
) -> AppResult<Json<FeedbackResponse>> {
    let note = Feedback {
        feedback_id: util::snowflake_id(),
        from_role: input.from_role,
        from_user_id: input.from_user_id,
        to_role: input.to_role,
        to_user_id: input.to_user_id,
        to_member_id: input.to_member_id,
        to_trainer_id: input.to_trainer_id,
        subject: input.subject,
        message: input.message,
        status: "unread".to_string(),
        created_at: state.clock.now_millis(),
    };
    let feedback = feedback::create(&state.pool, &note).await?;

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback sent successfully".to_string(),
        feedback,
    }))
}

pub async fn by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<Feedback>>> {
    let rows = feedback::find_for_member(&state.pool, &member_id).await?;
    Ok(Json(rows))
}

pub async fn by_trainer(
    State(state): State<ServerState>,
    Path(trainer_id): Path<String>,
) -> AppResult<Json<Vec<Feedback>>> {
    let rows = feedback::find_for_trainer(&state.pool, &trainer_id).await?;
    Ok(Json(rows))
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let rows = feedback::find_all(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ack>> {
    if !feedback::mark_read(&state.pool, id).await? {
        return Err(AppError::not_found("Feedback not found"));
    }
    Ok(Json(Ack::ok("Feedback marked as read")))
}
