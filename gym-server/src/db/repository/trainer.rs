//! Trainer repository. Trainer IDs are free-form and used exactly as
//! stored; none of the member ID aliasing applies here.

use sqlx::SqlitePool;

use shared::models::Trainer;

use super::{RepoError, RepoResult};

const SELECT_TRAINER: &str = "SELECT id, name, age, gender, specialization, experience, salary, \
     contact, email, address, join_date, assigned_members, status, created_at FROM trainer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Trainer>> {
    let trainers = sqlx::query_as::<_, Trainer>(&format!("{SELECT_TRAINER} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(trainers)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Trainer>> {
    let trainer = sqlx::query_as::<_, Trainer>(&format!("{SELECT_TRAINER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(trainer)
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM trainer WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found != 0)
}

/// Substring match on the display name, case-insensitive.
pub async fn search(pool: &SqlitePool, query: &str) -> RepoResult<Vec<Trainer>> {
    let trainers =
        sqlx::query_as::<_, Trainer>(&format!("{SELECT_TRAINER} WHERE name LIKE ? ORDER BY id"))
            .bind(format!("%{query}%"))
            .fetch_all(pool)
            .await?;
    Ok(trainers)
}

pub async fn create(pool: &SqlitePool, trainer: &Trainer) -> RepoResult<Trainer> {
    sqlx::query(
        "INSERT INTO trainer (id, name, age, gender, specialization, experience, salary, \
         contact, email, address, join_date, assigned_members, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&trainer.id)
    .bind(&trainer.name)
    .bind(trainer.age)
    .bind(&trainer.gender)
    .bind(&trainer.specialization)
    .bind(trainer.experience)
    .bind(trainer.salary)
    .bind(&trainer.contact)
    .bind(&trainer.email)
    .bind(&trainer.address)
    .bind(trainer.join_date)
    .bind(trainer.assigned_members)
    .bind(&trainer.status)
    .bind(trainer.created_at)
    .execute(pool)
    .await?;

    find_by_id(pool, &trainer.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create trainer".into()))
}

/// Full-replace write; every column takes the incoming value.
pub async fn replace(pool: &SqlitePool, trainer: &Trainer) -> RepoResult<Trainer> {
    let result = sqlx::query(
        "UPDATE trainer SET name = ?, age = ?, gender = ?, specialization = ?, experience = ?, \
         salary = ?, contact = ?, email = ?, address = ?, join_date = ?, assigned_members = ?, \
         status = ? WHERE id = ?",
    )
    .bind(&trainer.name)
    .bind(trainer.age)
    .bind(&trainer.gender)
    .bind(&trainer.specialization)
    .bind(trainer.experience)
    .bind(trainer.salary)
    .bind(&trainer.contact)
    .bind(&trainer.email)
    .bind(&trainer.address)
    .bind(trainer.join_date)
    .bind(trainer.assigned_members)
    .bind(&trainer.status)
    .bind(&trainer.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Trainer {} not found",
            trainer.id
        )));
    }

    find_by_id(pool, &trainer.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update trainer".into()))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM trainer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
