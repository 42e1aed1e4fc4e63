use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::models::{WorkoutPlan, WorkoutPlanCreate, WorkoutPlanUpdate};
use shared::util;

use crate::core::ServerState;
use crate::db::repository::workout;
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub success: bool,
    pub workout: WorkoutPlan,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<WorkoutPlanCreate>,
) -> AppResult<Json<WorkoutResponse>> {
    let (Some(trainer_id), Some(member_id)) = (input.trainer_id, input.member_id) else {
        return Err(AppError::validation("Trainer ID and Member ID are required"));
    };

    let plan = WorkoutPlan {
        plan_id: util::snowflake_id(),
        trainer_id,
        member_id,
        title: input.title,
        focus_area: input.focus_area,
        session_date: input.session_date,
        start_time: input.start_time,
        end_time: input.end_time,
        notes: input.notes,
        created_at: state.clock.now_millis(),
    };
    let workout = workout::create(&state.pool, &plan).await?;

    Ok(Json(WorkoutResponse {
        success: true,
        workout,
    }))
}

pub async fn by_trainer(
    State(state): State<ServerState>,
    Path(trainer_id): Path<String>,
) -> AppResult<Json<Vec<WorkoutPlan>>> {
    let plans = workout::find_by_trainer(&state.pool, &trainer_id).await?;
    Ok(Json(plans))
}

pub async fn by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<WorkoutPlan>>> {
    let plans = workout::find_by_member(&state.pool, &member_id).await?;
    Ok(Json(plans))
}

/// Reschedule an existing plan. The trainer/member pairing is fixed at
/// creation, so only the schedule fields are replaced.
pub async fn update(
    State(state): State<ServerState>,
    Path(plan_id): Path<i64>,
    Json(input): Json<WorkoutPlanUpdate>,
) -> AppResult<Json<WorkoutResponse>> {
    let existing = workout::find_by_id(&state.pool, plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Workout plan not found"))?;

    let plan = WorkoutPlan {
        title: input.title,
        focus_area: input.focus_area,
        session_date: input.session_date,
        start_time: input.start_time,
        end_time: input.end_time,
        notes: input.notes,
        ..existing
    };
    let workout = workout::update_schedule(&state.pool, &plan).await?;

    Ok(Json(WorkoutResponse {
        success: true,
        workout,
    }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(plan_id): Path<i64>,
) -> AppResult<Json<Ack>> {
    if !workout::delete(&state.pool, plan_id).await? {
        return Err(AppError::not_found("Workout plan not found"));
    }
    Ok(Json(Ack::ok("Workout plan deleted")))
}
