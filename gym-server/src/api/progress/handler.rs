use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::models::{ProgressEntry, ProgressEntryCreate, ProgressEntryUpdate};
use shared::util;

use crate::core::ServerState;
use crate::db::repository::progress;
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub success: bool,
    pub progress: ProgressEntry,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProgressEntryCreate>,
) -> AppResult<Json<ProgressResponse>> {
    let (Some(member_id), Some(trainer_id)) = (input.member_id, input.trainer_id) else {
        return Err(AppError::validation("Member ID and Trainer ID are required"));
    };

    let entry = ProgressEntry {
        progress_id: util::snowflake_id(),
        member_id,
        trainer_id,
        metric: input.metric,
        value: input.value,
        notes: input.notes,
        recorded_at: input.recorded_at.unwrap_or_else(|| state.clock.now_millis()),
    };
    let progress = progress::create(&state.pool, &entry).await?;

    Ok(Json(ProgressResponse {
        success: true,
        progress,
    }))
}

pub async fn by_trainer(
    State(state): State<ServerState>,
    Path(trainer_id): Path<String>,
) -> AppResult<Json<Vec<ProgressEntry>>> {
    let entries = progress::find_by_trainer(&state.pool, &trainer_id).await?;
    Ok(Json(entries))
}

pub async fn by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<ProgressEntry>>> {
    let entries = progress::find_by_member(&state.pool, &member_id).await?;
    Ok(Json(entries))
}

/// Correct a measurement in place. `recordedAt` keeps its original value
/// unless the payload supplies a new one.
pub async fn update(
    State(state): State<ServerState>,
    Path(progress_id): Path<i64>,
    Json(input): Json<ProgressEntryUpdate>,
) -> AppResult<Json<ProgressResponse>> {
    let progress = progress::update_measurement(
        &state.pool,
        progress_id,
        input.metric.as_deref(),
        input.value.as_deref(),
        input.notes.as_deref(),
        input.recorded_at,
    )
    .await?;

    Ok(Json(ProgressResponse {
        success: true,
        progress,
    }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(progress_id): Path<i64>,
) -> AppResult<Json<Ack>> {
    if !progress::delete(&state.pool, progress_id).await? {
        return Err(AppError::not_found("Progress entry not found"));
    }
    Ok(Json(Ack::ok("Progress entry deleted")))
}
