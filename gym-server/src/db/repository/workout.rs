//! Workout plan repository. Listings come back in session-date order so
//! schedules read top to bottom.

use sqlx::SqlitePool;

use shared::models::WorkoutPlan;

use super::{RepoError, RepoResult};

const SELECT_PLAN: &str = "SELECT plan_id, trainer_id, member_id, title, focus_area, \
     session_date, start_time, end_time, notes, created_at FROM workout_plan";

pub async fn find_by_id(pool: &SqlitePool, plan_id: i64) -> RepoResult<Option<WorkoutPlan>> {
    let plan = sqlx::query_as::<_, WorkoutPlan>(&format!("{SELECT_PLAN} WHERE plan_id = ?"))
        .bind(plan_id)
        .fetch_optional(pool)
        .await?;
    Ok(plan)
}

pub async fn find_by_trainer(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Vec<WorkoutPlan>> {
    let plans = sqlx::query_as::<_, WorkoutPlan>(&format!(
        "{SELECT_PLAN} WHERE trainer_id = ? ORDER BY session_date ASC"
    ))
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;
    Ok(plans)
}

pub async fn find_by_member(pool: &SqlitePool, member_id: &str) -> RepoResult<Vec<WorkoutPlan>> {
    let plans = sqlx::query_as::<_, WorkoutPlan>(&format!(
        "{SELECT_PLAN} WHERE member_id = ? ORDER BY session_date ASC"
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(plans)
}

pub async fn create(pool: &SqlitePool, plan: &WorkoutPlan) -> RepoResult<WorkoutPlan> {
    sqlx::query(
        "INSERT INTO workout_plan (plan_id, trainer_id, member_id, title, focus_area, \
         session_date, start_time, end_time, notes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(plan.plan_id)
    .bind(&plan.trainer_id)
    .bind(&plan.member_id)
    .bind(&plan.title)
    .bind(&plan.focus_area)
    .bind(plan.session_date)
    .bind(&plan.start_time)
    .bind(&plan.end_time)
    .bind(&plan.notes)
    .bind(plan.created_at)
    .execute(pool)
    .await?;

    find_by_id(pool, plan.plan_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create workout plan".into()))
}

/// Replace the schedule fields; the trainer/member pairing never moves.
pub async fn update_schedule(pool: &SqlitePool, plan: &WorkoutPlan) -> RepoResult<WorkoutPlan> {
    let result = sqlx::query(
        "UPDATE workout_plan SET title = ?, focus_area = ?, session_date = ?, start_time = ?, \
         end_time = ?, notes = ? WHERE plan_id = ?",
    )
    .bind(&plan.title)
    .bind(&plan.focus_area)
    .bind(plan.session_date)
    .bind(&plan.start_time)
    .bind(&plan.end_time)
    .bind(&plan.notes)
    .bind(plan.plan_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Workout plan {} not found",
            plan.plan_id
        )));
    }

    find_by_id(pool, plan.plan_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update workout plan".into()))
}

pub async fn delete(pool: &SqlitePool, plan_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM workout_plan WHERE plan_id = ?")
        .bind(plan_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    const CREATE_PLAN_TABLE: &str = "CREATE TABLE workout_plan (
        plan_id      INTEGER PRIMARY KEY,
        trainer_id   TEXT NOT NULL,
        member_id    TEXT NOT NULL,
        title        TEXT,
        focus_area   TEXT,
        session_date TEXT,
        start_time   TEXT,
        end_time     TEXT,
        notes        TEXT,
        created_at   INTEGER NOT NULL
    )";

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(CREATE_PLAN_TABLE).execute(&pool).await.unwrap();
        pool
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn plan(plan_id: i64, date: &str) -> WorkoutPlan {
        WorkoutPlan {
            plan_id,
            trainer_id: "T1".into(),
            member_id: "00001".into(),
            title: Some("Leg day".into()),
            focus_area: Some("legs".into()),
            session_date: Some(d(date)),
            start_time: Some("09:00".into()),
            end_time: Some("10:00".into()),
            notes: None,
            created_at: 1,
        }
    }

    #[tokio::test]
    async fn listings_come_in_session_order() {
        let pool = test_pool().await;
        create(&pool, &plan(1, "2024-03-20")).await.unwrap();
        create(&pool, &plan(2, "2024-03-05")).await.unwrap();
        create(&pool, &plan(3, "2024-03-12")).await.unwrap();

        let by_trainer = find_by_trainer(&pool, "T1").await.unwrap();
        let dates: Vec<_> = by_trainer.iter().filter_map(|p| p.session_date).collect();
        assert_eq!(dates, vec![d("2024-03-05"), d("2024-03-12"), d("2024-03-20")]);

        let by_member = find_by_member(&pool, "00001").await.unwrap();
        assert_eq!(by_member.len(), 3);
    }

    #[tokio::test]
    async fn update_keeps_the_pairing() {
        let pool = test_pool().await;
        create(&pool, &plan(1, "2024-03-20")).await.unwrap();

        let mut changed = plan(1, "2024-03-22");
        changed.trainer_id = "T9".into();
        changed.title = Some("Push day".into());
        let stored = update_schedule(&pool, &changed).await.unwrap();

        assert_eq!(stored.title.as_deref(), Some("Push day"));
        assert_eq!(stored.session_date, Some(d("2024-03-22")));
        // The pairing columns are not part of the update.
        assert_eq!(stored.trainer_id, "T1");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update_schedule(&pool, &plan(9, "2024-03-22")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_outcome() {
        let pool = test_pool().await;
        create(&pool, &plan(1, "2024-03-20")).await.unwrap();
        assert!(delete(&pool, 1).await.unwrap());
        assert!(!delete(&pool, 1).await.unwrap());
    }
}
