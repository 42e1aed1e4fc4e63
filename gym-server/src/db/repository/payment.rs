//! Payment repository.
//!
//! Payment writes can carry a member sync: whenever a payment with a date
//! lands or is cleared, the member's `fees_status` (and `payment_date`)
//! must move in the same transaction. Callers describe the sync with
//! [`FeesSync`]; resolution of the member happens before the write.

use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};

use shared::models::Payment;

use super::{RepoError, RepoResult};

const SELECT_PAYMENT: &str = "SELECT payment_id, member_id, member_name, member_type, \
     amount_pay, payment_date, due_date, day_remaining, status FROM payment";

/// Member columns to update alongside a payment write.
///
/// `payment_date: None` leaves the member's stored date untouched; the
/// status always overwrites.
#[derive(Debug, Clone)]
pub struct FeesSync {
    pub member_id: String,
    pub payment_date: Option<NaiveDate>,
    pub fees_status: String,
}

// ── Queries ─────────────────────────────────────────────────────────────

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let payments = sqlx::query_as::<_, Payment>(&format!("{SELECT_PAYMENT} ORDER BY payment_id"))
        .fetch_all(pool)
        .await?;
    Ok(payments)
}

pub async fn find_by_id(pool: &SqlitePool, payment_id: i64) -> RepoResult<Option<Payment>> {
    let payment = sqlx::query_as::<_, Payment>(&format!("{SELECT_PAYMENT} WHERE payment_id = ?"))
        .bind(payment_id)
        .fetch_optional(pool)
        .await?;
    Ok(payment)
}

/// Payments recorded under exactly this member ID string.
pub async fn find_by_member(pool: &SqlitePool, member_id: &str) -> RepoResult<Vec<Payment>> {
    let payments = sqlx::query_as::<_, Payment>(&format!(
        "{SELECT_PAYMENT} WHERE member_id = ? ORDER BY payment_id"
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

// ── Writes ──────────────────────────────────────────────────────────────

pub async fn insert(
    pool: &SqlitePool,
    payment: &Payment,
    sync: Option<&FeesSync>,
) -> RepoResult<Payment> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO payment (payment_id, member_id, member_name, member_type, amount_pay, \
         payment_date, due_date, day_remaining, status) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payment.payment_id)
    .bind(&payment.member_id)
    .bind(&payment.member_name)
    .bind(&payment.member_type)
    .bind(payment.amount_pay)
    .bind(payment.payment_date)
    .bind(payment.due_date)
    .bind(&payment.day_remaining)
    .bind(&payment.status)
    .execute(&mut *tx)
    .await?;

    if let Some(sync) = sync {
        apply_fees_sync(&mut tx, sync).await?;
    }

    tx.commit().await?;

    find_by_id(pool, payment.payment_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payment".into()))
}

/// Full-replace write of an existing payment.
pub async fn replace(
    pool: &SqlitePool,
    payment: &Payment,
    sync: Option<&FeesSync>,
) -> RepoResult<Payment> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE payment SET member_id = ?, member_name = ?, member_type = ?, amount_pay = ?, \
         payment_date = ?, due_date = ?, day_remaining = ?, status = ? WHERE payment_id = ?",
    )
    .bind(&payment.member_id)
    .bind(&payment.member_name)
    .bind(&payment.member_type)
    .bind(payment.amount_pay)
    .bind(payment.payment_date)
    .bind(payment.due_date)
    .bind(&payment.day_remaining)
    .bind(&payment.status)
    .bind(payment.payment_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Payment {} not found",
            payment.payment_id
        )));
    }

    if let Some(sync) = sync {
        apply_fees_sync(&mut tx, sync).await?;
    }

    tx.commit().await?;

    find_by_id(pool, payment.payment_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update payment".into()))
}

/// Write back derived fields refreshed on a read path.
pub async fn persist_standing(
    pool: &SqlitePool,
    payment: &Payment,
    sync: Option<&FeesSync>,
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "UPDATE payment SET due_date = ?, day_remaining = ?, status = ? WHERE payment_id = ?",
    )
    .bind(payment.due_date)
    .bind(&payment.day_remaining)
    .bind(&payment.status)
    .bind(payment.payment_id)
    .execute(&mut *tx)
    .await?;

    if let Some(sync) = sync {
        apply_fees_sync(&mut tx, sync).await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Delete is idempotent; reports whether a row actually went.
pub async fn delete(pool: &SqlitePool, payment_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM payment WHERE payment_id = ?")
        .bind(payment_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn apply_fees_sync(tx: &mut Transaction<'_, Sqlite>, sync: &FeesSync) -> RepoResult<()> {
    sqlx::query(
        "UPDATE member SET fees_status = ?, payment_date = COALESCE(?, payment_date) \
         WHERE id = ?",
    )
    .bind(&sync.fees_status)
    .bind(sync.payment_date)
    .bind(&sync.member_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::member;
    use crate::db::repository::member::tests::{CREATE_MEMBER_TABLE, sample as member_sample};
    use sqlx::sqlite::SqlitePoolOptions;

    const CREATE_PAYMENT_TABLE: &str = "CREATE TABLE payment (
        payment_id    INTEGER PRIMARY KEY,
        member_id     TEXT,
        member_name   TEXT,
        member_type   TEXT,
        amount_pay    REAL,
        payment_date  TEXT,
        due_date      TEXT,
        day_remaining TEXT NOT NULL DEFAULT 'N/A',
        status        TEXT NOT NULL DEFAULT 'Not Paid'
    )";

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(CREATE_PAYMENT_TABLE).execute(&pool).await.unwrap();
        sqlx::query(CREATE_MEMBER_TABLE).execute(&pool).await.unwrap();
        pool
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample(payment_id: i64, member_id: &str) -> Payment {
        Payment {
            payment_id,
            member_id: Some(member_id.into()),
            member_name: Some("Jane Doe".into()),
            member_type: Some("monthly".into()),
            amount_pay: Some(49.0),
            payment_date: Some(d("2024-01-01")),
            due_date: Some(d("2024-01-31")),
            day_remaining: "6".into(),
            status: "Due Soon".into(),
        }
    }

    #[tokio::test]
    async fn insert_with_sync_marks_member_paid() {
        let pool = test_pool().await;
        member::create(&pool, &member_sample("00001")).await.unwrap();

        let sync = FeesSync {
            member_id: "00001".into(),
            payment_date: Some(d("2024-01-01")),
            fees_status: "Paid".into(),
        };
        insert(&pool, &sample(1, "00001"), Some(&sync)).await.unwrap();

        let member = member::find_by_id(&pool, "00001").await.unwrap().unwrap();
        assert_eq!(member.fees_status, "Paid");
        assert_eq!(member.payment_date, Some(d("2024-01-01")));
    }

    #[tokio::test]
    async fn unpaid_sync_keeps_member_payment_date() {
        let pool = test_pool().await;
        let mut paid = member_sample("00001");
        paid.fees_status = "Paid".into();
        paid.payment_date = Some(d("2024-01-01"));
        member::create(&pool, &paid).await.unwrap();

        let mut cleared = sample(1, "00001");
        cleared.payment_date = None;
        cleared.due_date = None;
        cleared.day_remaining = "N/A".into();
        cleared.status = "Not Paid".into();
        let sync = FeesSync {
            member_id: "00001".into(),
            payment_date: None,
            fees_status: "Unpaid".into(),
        };
        insert(&pool, &cleared, Some(&sync)).await.unwrap();

        let member = member::find_by_id(&pool, "00001").await.unwrap().unwrap();
        assert_eq!(member.fees_status, "Unpaid");
        // The previously recorded date survives a status-only sync.
        assert_eq!(member.payment_date, Some(d("2024-01-01")));
    }

    #[tokio::test]
    async fn replace_missing_rolls_back_without_sync() {
        let pool = test_pool().await;
        member::create(&pool, &member_sample("00001")).await.unwrap();

        let sync = FeesSync {
            member_id: "00001".into(),
            payment_date: Some(d("2024-01-01")),
            fees_status: "Paid".into(),
        };
        let err = replace(&pool, &sample(99, "00001"), Some(&sync))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        // The aborted transaction must not have touched the member.
        let member = member::find_by_id(&pool, "00001").await.unwrap().unwrap();
        assert_eq!(member.fees_status, "Unpaid");
    }

    #[tokio::test]
    async fn persist_standing_updates_derived_columns() {
        let pool = test_pool().await;
        let mut payment = sample(1, "00001");
        payment.due_date = None;
        payment.day_remaining = "N/A".into();
        payment.status = "Not Paid".into();
        insert(&pool, &payment, None).await.unwrap();

        payment.due_date = Some(d("2024-01-31"));
        payment.day_remaining = "6".into();
        payment.status = "Due Soon".into();
        persist_standing(&pool, &payment, None).await.unwrap();

        let stored = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(stored.due_date, Some(d("2024-01-31")));
        assert_eq!(stored.day_remaining, "6");
        assert_eq!(stored.status, "Due Soon");
        // Source columns stay as written.
        assert_eq!(stored.payment_date, Some(d("2024-01-01")));
    }

    #[tokio::test]
    async fn find_by_member_is_exact_match() {
        let pool = test_pool().await;
        insert(&pool, &sample(1, "00001"), None).await.unwrap();
        insert(&pool, &sample(2, "00002"), None).await.unwrap();

        let hits = find_by_member(&pool, "00001").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].payment_id, 1);
        assert!(find_by_member(&pool, "001").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let pool = test_pool().await;
        insert(&pool, &sample(1, "00001"), None).await.unwrap();
        assert!(delete(&pool, 1).await.unwrap());
        assert!(!delete(&pool, 1).await.unwrap());
    }
}
