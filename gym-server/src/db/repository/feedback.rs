//! Feedback repository.

use sqlx::SqlitePool;

use shared::models::Feedback;

use super::{RepoError, RepoResult};

const SELECT_FEEDBACK: &str = "SELECT feedback_id, from_role, from_user_id, to_role, to_user_id, \
     to_member_id, to_trainer_id, subject, message, status, created_at FROM feedback";

pub async fn find_by_id(pool: &SqlitePool, feedback_id: i64) -> RepoResult<Option<Feedback>> {
    let row = sqlx::query_as::<_, Feedback>(&format!("{SELECT_FEEDBACK} WHERE feedback_id = ?"))
        .bind(feedback_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Feedback>> {
    let rows = sqlx::query_as::<_, Feedback>(&format!("{SELECT_FEEDBACK} ORDER BY feedback_id"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_for_member(pool: &SqlitePool, member_id: &str) -> RepoResult<Vec<Feedback>> {
    let rows = sqlx::query_as::<_, Feedback>(&format!(
        "{SELECT_FEEDBACK} WHERE to_member_id = ? ORDER BY feedback_id"
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_for_trainer(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Vec<Feedback>> {
    let rows = sqlx::query_as::<_, Feedback>(&format!(
        "{SELECT_FEEDBACK} WHERE to_trainer_id = ? ORDER BY feedback_id"
    ))
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, feedback: &Feedback) -> RepoResult<Feedback> {
    sqlx::query(
        "INSERT INTO feedback (feedback_id, from_role, from_user_id, to_role, to_user_id, \
         to_member_id, to_trainer_id, subject, message, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(feedback.feedback_id)
    .bind(&feedback.from_role)
    .bind(&feedback.from_user_id)
    .bind(&feedback.to_role)
    .bind(&feedback.to_user_id)
    .bind(&feedback.to_member_id)
    .bind(&feedback.to_trainer_id)
    .bind(&feedback.subject)
    .bind(&feedback.message)
    .bind(&feedback.status)
    .bind(feedback.created_at)
    .execute(pool)
    .await?;

    find_by_id(pool, feedback.feedback_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create feedback".into()))
}

/// Flip a message to read; reports whether the row existed.
pub async fn mark_read(pool: &SqlitePool, feedback_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE feedback SET status = 'read' WHERE feedback_id = ?")
        .bind(feedback_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
