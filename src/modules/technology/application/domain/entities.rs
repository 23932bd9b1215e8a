use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_COLOR: &str = "#3B82F6";
pub const DEFAULT_PROFICIENCY: i16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Mobile,
    #[default]
    Other,
}

impl TechCategory {
    pub const ALL: [TechCategory; 6] = [
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Database,
        TechCategory::DevOps,
        TechCategory::Mobile,
        TechCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Database => "Database",
            TechCategory::DevOps => "DevOps",
            TechCategory::Mobile => "Mobile",
            TechCategory::Other => "Other",
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: TechCategory,
    pub proficiency: i16,
    pub logo: Option<String>,
    pub work_as: Option<String>,
    pub color: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_category_by_display_name() {
        for category in TechCategory::ALL {
            assert_eq!(TechCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(TechCategory::parse("devops"), None);
    }
}
