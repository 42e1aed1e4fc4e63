//! Login account repository.

use sqlx::SqlitePool;

use shared::models::{User, UserCreate};
use shared::util;

use super::{RepoError, RepoResult};

const SELECT_USER: &str =
    "SELECT id, username, password, role, member_id, trainer_id, created_at FROM users";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_member_id(pool: &SqlitePool, member_id: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE member_id = ?"))
        .bind(member_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_trainer_id(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE trainer_id = ?"))
        .bind(trainer_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a new account. Unique constraints on username and the owner
/// columns turn races into duplicate errors instead of double accounts.
pub async fn create(pool: &SqlitePool, data: &UserCreate) -> RepoResult<User> {
    let id = util::snowflake_id();

    sqlx::query(
        "INSERT INTO users (id, username, password, role, member_id, trainer_id, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.username)
    .bind(&data.password)
    .bind(data.role)
    .bind(&data.member_id)
    .bind(&data.trainer_id)
    .bind(util::now_millis())
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
