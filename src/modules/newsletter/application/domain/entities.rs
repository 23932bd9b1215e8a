use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberList {
    pub subscribers: Vec<Subscriber>,
    pub total: usize,
}

impl From<Vec<Subscriber>> for SubscriberList {
    fn from(subscribers: Vec<Subscriber>) -> Self {
        Self {
            total: subscribers.len(),
            subscribers,
        }
    }
}
