//! Progress entry repository. Listings come back newest first.

use sqlx::SqlitePool;

use shared::models::ProgressEntry;

use super::{RepoError, RepoResult};

const SELECT_ENTRY: &str = "SELECT progress_id, member_id, trainer_id, metric, value, notes, \
     recorded_at FROM progress_entry";

pub async fn find_by_id(pool: &SqlitePool, progress_id: i64) -> RepoResult<Option<ProgressEntry>> {
    let entry =
        sqlx::query_as::<_, ProgressEntry>(&format!("{SELECT_ENTRY} WHERE progress_id = ?"))
            .bind(progress_id)
            .fetch_optional(pool)
            .await?;
    Ok(entry)
}

pub async fn find_by_member(pool: &SqlitePool, member_id: &str) -> RepoResult<Vec<ProgressEntry>> {
    let entries = sqlx::query_as::<_, ProgressEntry>(&format!(
        "{SELECT_ENTRY} WHERE member_id = ? ORDER BY recorded_at DESC"
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn find_by_trainer(
    pool: &SqlitePool,
    trainer_id: &str,
) -> RepoResult<Vec<ProgressEntry>> {
    let entries = sqlx::query_as::<_, ProgressEntry>(&format!(
        "{SELECT_ENTRY} WHERE trainer_id = ? ORDER BY recorded_at DESC"
    ))
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn create(pool: &SqlitePool, entry: &ProgressEntry) -> RepoResult<ProgressEntry> {
    sqlx::query(
        "INSERT INTO progress_entry (progress_id, member_id, trainer_id, metric, value, notes, \
         recorded_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(entry.progress_id)
    .bind(&entry.member_id)
    .bind(&entry.trainer_id)
    .bind(&entry.metric)
    .bind(&entry.value)
    .bind(&entry.notes)
    .bind(entry.recorded_at)
    .execute(pool)
    .await?;

    find_by_id(pool, entry.progress_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create progress entry".into()))
}

/// Replace the measurement fields; `recorded_at` only moves when a new
/// value is supplied.
pub async fn update_measurement(
    pool: &SqlitePool,
    progress_id: i64,
    metric: Option<&str>,
    value: Option<&str>,
    notes: Option<&str>,
    recorded_at: Option<i64>,
) -> RepoResult<ProgressEntry> {
    let result = sqlx::query(
        "UPDATE progress_entry SET metric = ?, value = ?, notes = ?, \
         recorded_at = COALESCE(?, recorded_at) WHERE progress_id = ?",
    )
    .bind(metric)
    .bind(value)
    .bind(notes)
    .bind(recorded_at)
    .bind(progress_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Progress entry {progress_id} not found"
        )));
    }

    find_by_id(pool, progress_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update progress entry".into()))
}

pub async fn delete(pool: &SqlitePool, progress_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM progress_entry WHERE progress_id = ?")
        .bind(progress_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
