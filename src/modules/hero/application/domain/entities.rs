use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Editable hero section content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    pub location: String,
    pub languages: String,
    pub profession: String,
    pub university: String,
    pub is_available: bool,
    pub profile_image: String,
    pub resume_url: String,
    pub bio: String,
}

impl Default for HeroContent {
    /// Seed content stored the first time the hero section is read.
    fn default() -> Self {
        Self {
            name: "Anirban Islam Emon".into(),
            title: "I'm a Developer".into(),
            location: "Bangladesh".into(),
            languages: "Bangla, English".into(),
            profession: "Computer Engineer".into(),
            university: "Varendra University".into(),
            is_available: true,
            profile_image: String::new(),
            resume_url: String::new(),
            bio: "Hi! I'm Anirban Islam Emon, a dedicated Computer Science & Engineering (CSE) \
                  student and a passionate Full-Stack Developer."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Uuid,
    #[serde(flatten)]
    pub content: HeroContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
