use axum::Json;
use axum::extract::{Path, Query, State};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use shared::models::{IssuedCredentials, Member, MemberCreate, MemberUpdate};

use crate::core::ServerState;
use crate::credentials;
use crate::db::repository::{member, trainer};
use crate::membership::{lifecycle, member_id};
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub success: bool,
    pub member: Member,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<IssuedCredentials>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(members))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Member>> {
    let member = member::find_by_any_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;
    Ok(Json(member))
}

pub async fn by_trainer(
    State(state): State<ServerState>,
    Path(trainer_id): Path<String>,
) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_by_trainer(&state.pool, &trainer_id).await?;
    Ok(Json(members))
}

pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Member>>> {
    let members = member::search(&state.pool, &params.query).await?;
    Ok(Json(members))
}

/// Register a member: assign the next ID unless one was supplied, fill
/// lifecycle defaults, verify the trainer assignment and issue login
/// credentials for the new record.
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<MemberCreate>,
) -> AppResult<Json<MemberResponse>> {
    let id = match input.id.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => member_id::next_id(member::max_id_number(&state.pool).await?),
    };

    let record = lifecycle::assemble_new(&input, id, state.clock.as_ref());

    if let Some(trainer_id) = record.trainer_id.as_deref()
        && !trainer::exists(&state.pool, trainer_id).await?
    {
        return Err(AppError::validation(format!(
            "Trainer ID {trainer_id} does not exist. Create the trainer first."
        )));
    }

    let member = member::create(&state.pool, &record).await?;

    let credentials = credentials::ensure_member_credentials(
        &state.pool,
        &member.id,
        input.username.as_deref(),
        input.password.as_deref(),
        &mut OsRng,
    )
    .await?;

    Ok(Json(MemberResponse {
        success: true,
        member,
        credentials: Some(credentials),
    }))
}

/// Merge a sparse update onto the stored record, resolved through either
/// ID spelling.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<MemberUpdate>,
) -> AppResult<Json<MemberResponse>> {
    let existing = member::find_by_any_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    // Reassignments must name a real trainer; a blank value clears and
    // needs no check.
    if let Some(trainer_id) = patch.trainer_id.as_deref().map(str::trim)
        && !trainer_id.is_empty()
        && !trainer::exists(&state.pool, trainer_id).await?
    {
        return Err(AppError::validation(format!(
            "Trainer ID {trainer_id} does not exist."
        )));
    }

    let merged = lifecycle::merge_update(&existing, &patch);
    let member = member::replace(&state.pool, &merged).await?;

    Ok(Json(MemberResponse {
        success: true,
        member,
        credentials: None,
    }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let member = member::find_by_any_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    member::delete(&state.pool, &member.id).await?;
    Ok(Json(Ack::ok("Member deleted successfully")))
}
