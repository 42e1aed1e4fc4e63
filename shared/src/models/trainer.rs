use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_i64;

/// A trainer on the gym staff. No derived fields; what goes in comes out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Trainer {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub specialization: Option<String>,
    pub experience: Option<i64>,
    pub salary: Option<f64>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub assigned_members: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<i64>,
}

/// Registration payload. `age` and `experience` accept numbers or numeric
/// strings; `join_date` falls back to the registration day when missing or
/// unparseable. `username`/`password` ride along for credential issuance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerCreate {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub experience: Option<i64>,
    pub salary: Option<f64>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Full-replace update payload; absent fields overwrite with empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub experience: Option<i64>,
    pub salary: Option<f64>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub assigned_members: Option<i64>,
    pub status: Option<String>,
}
