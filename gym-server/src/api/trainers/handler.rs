use axum::Json;
use axum::extract::{Path, Query, State};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use shared::models::{IssuedCredentials, Trainer, TrainerCreate, TrainerUpdate};

use crate::core::ServerState;
use crate::credentials;
use crate::db::repository::trainer;
use crate::utils::time::parse_date_or;
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerResponse {
    pub success: bool,
    pub trainer: Trainer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<IssuedCredentials>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Trainer>>> {
    let trainers = trainer::find_all(&state.pool).await?;
    Ok(Json(trainers))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Trainer>> {
    let trainer = trainer::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Trainer not found"))?;
    Ok(Json(trainer))
}

pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Trainer>>> {
    let trainers = trainer::search(&state.pool, &params.query).await?;
    Ok(Json(trainers))
}

/// Register a trainer under the caller-chosen ID and issue credentials.
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TrainerCreate>,
) -> AppResult<Json<TrainerResponse>> {
    if input.id.trim().is_empty() {
        return Err(AppError::validation("Trainer ID is required"));
    }

    let today = state.clock.today();
    let join_date = input
        .join_date
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|raw| parse_date_or(raw, today));

    let record = Trainer {
        id: input.id.trim().to_string(),
        name: input.name,
        age: input.age,
        gender: input.gender,
        specialization: input.specialization,
        experience: input.experience,
        salary: input.salary,
        contact: input.contact,
        email: input.email,
        address: input.address,
        join_date,
        assigned_members: None,
        status: None,
        created_at: Some(state.clock.now_millis()),
    };

    let trainer = trainer::create(&state.pool, &record).await?;

    let credentials = credentials::ensure_trainer_credentials(
        &state.pool,
        &trainer.id,
        input.username.as_deref(),
        input.password.as_deref(),
        &mut OsRng,
    )
    .await?;

    Ok(Json(TrainerResponse {
        success: true,
        trainer,
        credentials: Some(credentials),
    }))
}

/// Full replace under the path ID; absent body fields clear their columns.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<TrainerUpdate>,
) -> AppResult<Json<TrainerResponse>> {
    let record = Trainer {
        id,
        name: input.name,
        age: input.age,
        gender: input.gender,
        specialization: input.specialization,
        experience: input.experience,
        salary: input.salary,
        contact: input.contact,
        email: input.email,
        address: input.address,
        join_date: input.join_date,
        assigned_members: input.assigned_members,
        status: input.status,
        created_at: None,
    };

    let trainer = trainer::replace(&state.pool, &record).await?;

    Ok(Json(TrainerResponse {
        success: true,
        trainer,
        credentials: None,
    }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    if !trainer::delete(&state.pool, &id).await? {
        return Err(AppError::not_found("Trainer not found"));
    }
    Ok(Json(Ack::ok("Trainer deleted successfully")))
}
