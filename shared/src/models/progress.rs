use serde::{Deserialize, Serialize};

/// A single measurement a trainer records for a member, e.g. weight or a
/// lift PR. `value` stays free-form text so units travel with the number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProgressEntry {
    pub progress_id: i64,
    pub member_id: String,
    pub trainer_id: String,
    pub metric: Option<String>,
    pub value: Option<String>,
    pub notes: Option<String>,
    pub recorded_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntryCreate {
    pub member_id: Option<String>,
    pub trainer_id: Option<String>,
    pub metric: Option<String>,
    pub value: Option<String>,
    pub notes: Option<String>,
    pub recorded_at: Option<i64>,
}

/// Updates replace the measurement; `recorded_at` is kept unless supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntryUpdate {
    pub metric: Option<String>,
    pub value: Option<String>,
    pub notes: Option<String>,
    pub recorded_at: Option<i64>,
}
