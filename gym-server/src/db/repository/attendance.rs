//! Attendance repository.
//!
//! Marking inserts the row and bumps the member's counter in one
//! transaction. The `(member_id, attendance_date)` unique constraint is
//! the final word on once-per-day marking.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use shared::models::Attendance;

use super::{RepoError, RepoResult};

const SELECT_ATTENDANCE: &str = "SELECT attendance_id, member_id, trainer_id, attendance_date, \
     check_in_time, check_out_time, status, notes, created_at FROM attendance";

pub async fn find_by_id(pool: &SqlitePool, attendance_id: i64) -> RepoResult<Option<Attendance>> {
    let row = sqlx::query_as::<_, Attendance>(&format!(
        "{SELECT_ATTENDANCE} WHERE attendance_id = ?"
    ))
    .bind(attendance_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_member(pool: &SqlitePool, member_id: &str) -> RepoResult<Vec<Attendance>> {
    let rows = sqlx::query_as::<_, Attendance>(&format!(
        "{SELECT_ATTENDANCE} WHERE member_id = ? ORDER BY attendance_id"
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_trainer(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Vec<Attendance>> {
    let rows = sqlx::query_as::<_, Attendance>(&format!(
        "{SELECT_ATTENDANCE} WHERE trainer_id = ? ORDER BY attendance_id"
    ))
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Rows for one member between two dates, both ends inclusive.
pub async fn find_range(
    pool: &SqlitePool,
    member_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> RepoResult<Vec<Attendance>> {
    let rows = sqlx::query_as::<_, Attendance>(&format!(
        "{SELECT_ATTENDANCE} WHERE member_id = ? AND attendance_date BETWEEN ? AND ? \
         ORDER BY attendance_date"
    ))
    .bind(member_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn exists_for_date(
    pool: &SqlitePool,
    member_id: &str,
    date: NaiveDate,
) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT EXISTS(SELECT 1 FROM attendance WHERE member_id = ? AND attendance_date = ?)",
    )
    .bind(member_id)
    .bind(date)
    .fetch_one(pool)
    .await?;
    Ok(found != 0)
}

/// Insert the mark and bump the member's attendance counter together.
///
/// Marks recorded under an ID the roster does not know are kept; the
/// counter update simply misses.
pub async fn create(pool: &SqlitePool, attendance: &Attendance) -> RepoResult<Attendance> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO attendance (attendance_id, member_id, trainer_id, attendance_date, \
         check_in_time, check_out_time, status, notes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(attendance.attendance_id)
    .bind(&attendance.member_id)
    .bind(&attendance.trainer_id)
    .bind(attendance.attendance_date)
    .bind(&attendance.check_in_time)
    .bind(&attendance.check_out_time)
    .bind(attendance.status)
    .bind(&attendance.notes)
    .bind(attendance.created_at)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE member SET attendance_count = attendance_count + 1 WHERE id = ?")
        .bind(&attendance.member_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    find_by_id(pool, attendance.attendance_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create attendance".into()))
}
