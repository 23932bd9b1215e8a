use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub bio: String,
    pub mission: String,
    pub goals: Vec<String>,
    pub currently_learning: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            bio: "\u{1F44B} Hi! I'm Anirban Islam Emon, a dedicated Computer Science & Engineering \
                  (CSE) student and a passionate Full-Stack Developer with a strong focus on \
                  building modern, scalable, and high-performance web applications."
                .into(),
            mission: "My mission is simple \u{2014} Build impactful products that deliver \
                      exceptional value to users and businesses while improving continuously \
                      as a developer."
                .into(),
            goals: vec![
                "Build scalable web applications".into(),
                "Learn new technologies continuously".into(),
                "Help businesses grow through technology".into(),
                "Create user-friendly digital experiences".into(),
            ],
            currently_learning: vec![
                "Next.js 14".into(),
                "TypeScript".into(),
                "GraphQL".into(),
                "Cloud Architecture".into(),
            ],
            skills: Vec::new(),
            experience: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: Uuid,
    #[serde(flatten)]
    pub content: AboutContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public read result: the stored row, or the unsaved default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AboutView {
    Stored(About),
    Default(AboutContent),
}
