use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gym member as stored and served.
///
/// `id` is the canonical `"00"`-prefixed identifier. `date_registered` and
/// `expiry_date` are always populated at creation; `payment_date` stays
/// empty until a payment with a date is recorded against the member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub phone_num: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub trainer_id: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub date_registered: NaiveDate,
    pub expiry_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub fees_status: String,
    pub attendance_count: i64,
    pub status: String,
    pub created_at: i64,
}

/// Registration payload.
///
/// `date_registered` is accepted as a raw string: an unparseable or missing
/// value falls back to the registration day rather than rejecting the
/// request. `username` and `password` ride along for credential issuance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub phone_num: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub trainer_id: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub date_registered: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sparse update payload; absent fields keep their stored values.
///
/// `trainer_id` is three-valued: absent keeps the assignment, blank clears
/// it, anything else must name an existing trainer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub phone_num: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub trainer_id: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub date_registered: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub fees_status: Option<String>,
    pub attendance_count: Option<i64>,
    pub status: Option<String>,
}
