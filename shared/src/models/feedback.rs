use serde::{Deserialize, Serialize};

/// A message routed between roles; lands unread and stays until the
/// recipient marks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Feedback {
    pub feedback_id: i64,
    pub from_role: Option<String>,
    pub from_user_id: Option<String>,
    pub to_role: Option<String>,
    pub to_user_id: Option<String>,
    pub to_member_id: Option<String>,
    pub to_trainer_id: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreate {
    pub from_role: Option<String>,
    pub from_user_id: Option<String>,
    pub to_role: Option<String>,
    pub to_user_id: Option<String>,
    pub to_member_id: Option<String>,
    pub to_trainer_id: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
