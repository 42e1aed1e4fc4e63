//! Member repository.
//!
//! Lookups accept both ID spellings via [`find_by_any_id`]; writes always
//! use the canonical stored ID the caller already resolved.

use sqlx::SqlitePool;

use shared::models::Member;

use crate::membership::member_id;

use super::{RepoError, RepoResult};

const SELECT_MEMBER: &str = "SELECT id, name, first_name, last_name, age, gender, phone_num, \
     contact, email, address, trainer_id, member_type, amount_pay, date_registered, expiry_date, \
     payment_date, fees_status, attendance_count, status, created_at FROM member";

// ── Queries ─────────────────────────────────────────────────────────────

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let members = sqlx::query_as::<_, Member>(&format!("{SELECT_MEMBER} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(members)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Member>> {
    let member = sqlx::query_as::<_, Member>(&format!("{SELECT_MEMBER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(member)
}

/// Exact match first, then the alternate ID spelling.
pub async fn find_by_any_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Member>> {
    if let Some(member) = find_by_id(pool, id).await? {
        return Ok(Some(member));
    }
    find_by_id(pool, &member_id::alternate(id)).await
}

pub async fn find_by_trainer(pool: &SqlitePool, trainer_id: &str) -> RepoResult<Vec<Member>> {
    let members =
        sqlx::query_as::<_, Member>(&format!("{SELECT_MEMBER} WHERE trainer_id = ? ORDER BY id"))
            .bind(trainer_id)
            .fetch_all(pool)
            .await?;
    Ok(members)
}

/// Substring match on first or last name, case-insensitive.
pub async fn search(pool: &SqlitePool, query: &str) -> RepoResult<Vec<Member>> {
    let pattern = format!("%{query}%");
    let members = sqlx::query_as::<_, Member>(&format!(
        "{SELECT_MEMBER} WHERE first_name LIKE ? OR last_name LIKE ? ORDER BY id"
    ))
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;
    Ok(members)
}

/// Highest numeric part among canonically prefixed IDs; `None` on an
/// empty roster. Legacy rows without the prefix do not participate.
pub async fn max_id_number(pool: &SqlitePool) -> RepoResult<Option<i64>> {
    let max = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(CAST(SUBSTR(id, 3) AS INTEGER)) FROM member WHERE id LIKE '00%'",
    )
    .fetch_one(pool)
    .await?;
    Ok(max)
}

// ── Writes ──────────────────────────────────────────────────────────────

pub async fn create(pool: &SqlitePool, member: &Member) -> RepoResult<Member> {
    sqlx::query(
        "INSERT INTO member (id, name, first_name, last_name, age, gender, phone_num, contact, \
         email, address, trainer_id, member_type, amount_pay, date_registered, expiry_date, \
         payment_date, fees_status, attendance_count, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&member.id)
    .bind(&member.name)
    .bind(&member.first_name)
    .bind(&member.last_name)
    .bind(member.age)
    .bind(&member.gender)
    .bind(&member.phone_num)
    .bind(&member.contact)
    .bind(&member.email)
    .bind(&member.address)
    .bind(&member.trainer_id)
    .bind(&member.member_type)
    .bind(member.amount_pay)
    .bind(member.date_registered)
    .bind(member.expiry_date)
    .bind(member.payment_date)
    .bind(&member.fees_status)
    .bind(member.attendance_count)
    .bind(&member.status)
    .bind(member.created_at)
    .execute(pool)
    .await?;

    find_by_id(pool, &member.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}

/// Write the full merged record back.
pub async fn replace(pool: &SqlitePool, member: &Member) -> RepoResult<Member> {
    let result = sqlx::query(
        "UPDATE member SET name = ?, first_name = ?, last_name = ?, age = ?, gender = ?, \
         phone_num = ?, contact = ?, email = ?, address = ?, trainer_id = ?, member_type = ?, \
         amount_pay = ?, date_registered = ?, expiry_date = ?, payment_date = ?, \
         fees_status = ?, attendance_count = ?, status = ?, created_at = ? WHERE id = ?",
    )
    .bind(&member.name)
    .bind(&member.first_name)
    .bind(&member.last_name)
    .bind(member.age)
    .bind(&member.gender)
    .bind(&member.phone_num)
    .bind(&member.contact)
    .bind(&member.email)
    .bind(&member.address)
    .bind(&member.trainer_id)
    .bind(&member.member_type)
    .bind(member.amount_pay)
    .bind(member.date_registered)
    .bind(member.expiry_date)
    .bind(member.payment_date)
    .bind(&member.fees_status)
    .bind(member.attendance_count)
    .bind(&member.status)
    .bind(member.created_at)
    .bind(&member.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {} not found", member.id)));
    }

    find_by_id(pool, &member.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update member".into()))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    pub(crate) const CREATE_MEMBER_TABLE: &str = "CREATE TABLE member (
        id               TEXT PRIMARY KEY,
        name             TEXT,
        first_name       TEXT,
        last_name        TEXT,
        age              INTEGER,
        gender           TEXT,
        phone_num        TEXT,
        contact          TEXT,
        email            TEXT,
        address          TEXT,
        trainer_id       TEXT,
        member_type      TEXT,
        amount_pay       REAL,
        date_registered  TEXT NOT NULL,
        expiry_date      TEXT NOT NULL,
        payment_date     TEXT,
        fees_status      TEXT NOT NULL DEFAULT 'Unpaid',
        attendance_count INTEGER NOT NULL DEFAULT 0,
        status           TEXT NOT NULL DEFAULT 'active',
        created_at       INTEGER NOT NULL
    )";

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(CREATE_MEMBER_TABLE).execute(&pool).await.unwrap();
        pool
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub(crate) fn sample(id: &str) -> Member {
        Member {
            id: id.into(),
            name: Some("Jane Doe".into()),
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            age: Some(30),
            gender: Some("female".into()),
            phone_num: Some("555-0100".into()),
            contact: None,
            email: Some("jane@example.com".into()),
            address: None,
            trainer_id: None,
            member_type: Some("monthly".into()),
            amount_pay: Some(49.0),
            date_registered: d("2024-03-10"),
            expiry_date: d("2024-04-09"),
            payment_date: None,
            fees_status: "Unpaid".into(),
            attendance_count: 0,
            status: "active".into(),
            created_at: 1,
        }
    }

    #[tokio::test]
    async fn create_then_find_both_spellings() {
        let pool = test_pool().await;
        create(&pool, &sample("00005")).await.unwrap();

        assert!(find_by_any_id(&pool, "00005").await.unwrap().is_some());
        // Bare numeric spelling resolves to the same row.
        assert!(find_by_any_id(&pool, "005").await.unwrap().is_some());
        assert!(find_by_any_id(&pool, "00999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn legacy_unprefixed_id_resolves_via_prefixing() {
        let pool = test_pool().await;
        create(&pool, &sample("7")).await.unwrap();

        assert!(find_by_id(&pool, "007").await.unwrap().is_none());
        assert!(find_by_any_id(&pool, "007").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let pool = test_pool().await;
        create(&pool, &sample("00001")).await.unwrap();
        let err = create(&pool, &sample("00001")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn max_id_skips_legacy_rows() {
        let pool = test_pool().await;
        assert_eq!(max_id_number(&pool).await.unwrap(), None);

        create(&pool, &sample("00007")).await.unwrap();
        create(&pool, &sample("00003")).await.unwrap();
        // Legacy row without the prefix must not win.
        create(&pool, &sample("9999")).await.unwrap();

        assert_eq!(max_id_number(&pool).await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn replace_overwrites_and_checks_existence() {
        let pool = test_pool().await;
        create(&pool, &sample("00001")).await.unwrap();

        let mut updated = sample("00001");
        updated.fees_status = "Paid".into();
        updated.payment_date = Some(d("2024-03-15"));
        let stored = replace(&pool, &updated).await.unwrap();
        assert_eq!(stored.fees_status, "Paid");
        assert_eq!(stored.payment_date, Some(d("2024-03-15")));

        let missing = replace(&pool, &sample("00099")).await.unwrap_err();
        assert!(matches!(missing, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went() {
        let pool = test_pool().await;
        create(&pool, &sample("00001")).await.unwrap();
        assert!(delete(&pool, "00001").await.unwrap());
        assert!(!delete(&pool, "00001").await.unwrap());
    }

    #[tokio::test]
    async fn search_matches_either_name_case_insensitively() {
        let pool = test_pool().await;
        create(&pool, &sample("00001")).await.unwrap();
        let mut other = sample("00002");
        other.first_name = Some("John".into());
        other.last_name = Some("Smith".into());
        create(&pool, &other).await.unwrap();

        let by_first = search(&pool, "jane").await.unwrap();
        assert_eq!(by_first.len(), 1);
        assert_eq!(by_first[0].id, "00001");

        let by_last = search(&pool, "mit").await.unwrap();
        assert_eq!(by_last.len(), 1);
        assert_eq!(by_last[0].id, "00002");

        let by_shared = search(&pool, "o").await.unwrap();
        assert_eq!(by_shared.len(), 2);
    }

    #[tokio::test]
    async fn find_by_trainer_filters() {
        let pool = test_pool().await;
        let mut assigned = sample("00001");
        assigned.trainer_id = Some("T1".into());
        create(&pool, &assigned).await.unwrap();
        create(&pool, &sample("00002")).await.unwrap();

        let members = find_by_trainer(&pool, "T1").await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "00001");
    }
}
