use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A payment record with its derived standing.
///
/// `due_date` is derived once from `payment_date` when absent;
/// `day_remaining` and `status` are recomputed against the clock on every
/// read and write, so stored values are a cache of the last evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub payment_id: i64,
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub day_remaining: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Full-replace update payload; the path ID wins over any body ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    pub member_type: Option<String>,
    pub amount_pay: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}
