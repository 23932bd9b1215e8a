use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An award or certification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon identifier understood by the frontend, e.g. "trophy".
    pub icon: String,
    pub color: String,
    pub date: String,
    pub issuer: Option<String>,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
