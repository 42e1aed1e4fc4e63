use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::models::{Attendance, AttendanceMark, AttendanceStats, AttendanceStatus};
use shared::util;

use crate::core::ServerState;
use crate::db::repository::attendance;
use crate::utils::time::{month_start, parse_date_or};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub success: bool,
    pub attendance: Attendance,
}

/// Mark attendance for a member.
///
/// The date defaults to today (as does an unparseable one) and the status
/// to present; one mark per member per day.
pub async fn mark(
    State(state): State<ServerState>,
    Json(input): Json<AttendanceMark>,
) -> AppResult<Json<AttendanceResponse>> {
    let member_id = input
        .member_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("Member ID is required"))?
        .to_string();

    let today = state.clock.today();
    let attendance_date = match input.attendance_date.as_deref() {
        Some(raw) => parse_date_or(raw, today),
        None => today,
    };
    let status = input
        .status
        .as_deref()
        .map(AttendanceStatus::parse_or_present)
        .unwrap_or(AttendanceStatus::Present);

    if attendance::exists_for_date(&state.pool, &member_id, attendance_date).await? {
        return Err(AppError::validation(
            "Attendance already marked for this date",
        ));
    }

    let record = Attendance {
        attendance_id: util::snowflake_id(),
        member_id,
        trainer_id: input.trainer_id,
        attendance_date,
        check_in_time: input.check_in_time,
        check_out_time: input.check_out_time,
        status,
        notes: input.notes,
        created_at: state.clock.now_millis(),
    };
    let attendance = attendance::create(&state.pool, &record).await?;

    Ok(Json(AttendanceResponse {
        success: true,
        attendance,
    }))
}

pub async fn by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<Attendance>>> {
    let rows = attendance::find_by_member(&state.pool, &member_id).await?;
    Ok(Json(rows))
}

pub async fn by_trainer(
    State(state): State<ServerState>,
    Path(trainer_id): Path<String>,
) -> AppResult<Json<Vec<Attendance>>> {
    let rows = attendance::find_by_trainer(&state.pool, &trainer_id).await?;
    Ok(Json(rows))
}

/// Month-to-date counters for one member, first of the month through
/// today.
pub async fn stats(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<AttendanceStats>> {
    let today = state.clock.today();
    let rows = attendance::find_range(&state.pool, &member_id, month_start(today), today).await?;

    let count =
        |status: AttendanceStatus| rows.iter().filter(|r| r.status == status).count() as i64;
    let total_days = rows.len() as i64;
    let present_days = count(AttendanceStatus::Present);
    let absent_days = count(AttendanceStatus::Absent);
    let late_days = count(AttendanceStatus::Late);

    Ok(Json(AttendanceStats {
        total_days,
        present_days,
        absent_days,
        late_days,
        attendance: rows,
    }))
}
