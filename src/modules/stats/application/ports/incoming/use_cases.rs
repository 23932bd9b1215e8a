use async_trait::async_trait;
use serde::Deserialize;

use crate::shared::validation::ValidationErrors;
use crate::stats::application::domain::entities::{Stats, StatsCounters, StatsView};

/// A counter as the admin form sends it: a number, or display text like `"55+"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Text(String),
}

impl StatValue {
    fn is_truthy(&self) -> bool {
        match self {
            StatValue::Number(n) => *n != 0,
            StatValue::Text(s) => !s.is_empty(),
        }
    }

    /// Digits only; no digits at all reads as 0.
    fn parse(&self) -> Option<i64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(s) => {
                let digits: String = s.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    Some(0)
                } else {
                    digits.parse().ok()
                }
            }
        }
    }
}

/// Accepts the canonical keys and the display aliases used by the public
/// section. A truthy alias wins over the canonical key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsInput {
    pub projects_completed: Option<StatValue>,
    pub happy_clients: Option<StatValue>,
    pub years_experience: Option<StatValue>,
    pub technologies_mastered: Option<StatValue>,
    pub projects: Option<StatValue>,
    pub clients: Option<StatValue>,
    pub experience: Option<StatValue>,
    pub certifications: Option<StatValue>,
}

fn pick(alias: Option<StatValue>, canonical: Option<StatValue>) -> Option<StatValue> {
    alias.filter(StatValue::is_truthy).or(canonical)
}

fn counter(errors: &mut ValidationErrors, value: Option<StatValue>, label: &str) -> i32 {
    let Some(value) = value else {
        return 0;
    };
    match value.parse().map(i32::try_from) {
        Some(Ok(n)) if n >= 0 => n,
        Some(Ok(_)) => {
            errors.add(format!("{label} cannot be negative"));
            0
        }
        _ => {
            errors.add(format!("{label} is too large"));
            0
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStatsCommand {
    counters: StatsCounters,
}

impl UpdateStatsCommand {
    pub fn new(input: StatsInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let counters = StatsCounters {
            projects_completed: counter(
                &mut errors,
                pick(input.projects, input.projects_completed),
                "Projects completed",
            ),
            happy_clients: counter(
                &mut errors,
                pick(input.clients, input.happy_clients),
                "Happy clients",
            ),
            years_experience: counter(
                &mut errors,
                pick(input.experience, input.years_experience),
                "Years of experience",
            ),
            technologies_mastered: counter(
                &mut errors,
                pick(input.certifications, input.technologies_mastered),
                "Technologies mastered",
            ),
        };

        errors.finish(Self { counters })
    }

    pub fn into_counters(self) -> StatsCounters {
        self.counters
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait StatsUseCase: Send + Sync {
    async fn get_public(&self) -> Result<StatsView, StatsError>;

    async fn get_or_create(&self) -> Result<Stats, StatsError>;

    async fn upsert(&self, command: UpdateStatsCommand) -> Result<Stats, StatsError>;
}
