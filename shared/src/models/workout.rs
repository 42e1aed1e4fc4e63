use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled training session between a trainer and a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WorkoutPlan {
    pub plan_id: i64,
    pub trainer_id: String,
    pub member_id: String,
    pub title: Option<String>,
    pub focus_area: Option<String>,
    pub session_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanCreate {
    pub trainer_id: Option<String>,
    pub member_id: Option<String>,
    pub title: Option<String>,
    pub focus_area: Option<String>,
    pub session_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

/// Updates replace the schedule fields; the trainer/member pairing is fixed
/// at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanUpdate {
    pub title: Option<String>,
    pub focus_area: Option<String>,
    pub session_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}
