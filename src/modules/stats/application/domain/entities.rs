use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsCounters {
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
    pub technologies_mastered: i32,
}

impl Default for StatsCounters {
    fn default() -> Self {
        Self {
            projects_completed: 50,
            happy_clients: 30,
            years_experience: 5,
            technologies_mastered: 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub id: Uuid,
    #[serde(flatten)]
    pub counters: StatsCounters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatsView {
    Stored(Stats),
    Default(StatsCounters),
}
