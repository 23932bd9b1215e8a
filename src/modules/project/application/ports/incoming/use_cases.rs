use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::project::application::{
    domain::entities::{Project, ProjectStatus},
    ports::outgoing::ProjectData,
};
use crate::shared::validation::{optional_text, text_list, ValidationErrors};

//
// ──────────────────────────────────────────────────────────
// Project Command
// ──────────────────────────────────────────────────────────
//

/// Request body for create and full-replace update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub tech_stack: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub status: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct ProjectCommand {
    data: ProjectData,
}

impl ProjectCommand {
    pub fn new(input: ProjectInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = errors.required(&input.title, "Title is required");
        errors.max_chars(&title, 200, "Title cannot exceed 200 characters");
        let description = errors.required(&input.description, "Description is required");

        let status = match input.status.as_deref().map(str::trim) {
            None | Some("") => ProjectStatus::default(),
            Some(raw) => ProjectStatus::parse(raw).unwrap_or_else(|| {
                errors.add(format!("Status must be one of: {}", ProjectStatus::ALLOWED));
                ProjectStatus::default()
            }),
        };

        errors.finish(Self {
            data: ProjectData {
                title,
                description,
                image: optional_text(input.image),
                tech_stack: text_list(input.tech_stack),
                url: optional_text(input.url),
                github_url: optional_text(input.github_url),
                featured: input.featured,
                status,
                order: input.order,
            },
        })
    }

    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    pub fn into_data(self) -> ProjectData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectError>;

    async fn create(&self, command: ProjectCommand) -> Result<Project, ProjectError>;

    async fn update(&self, id: Uuid, command: ProjectCommand) -> Result<Project, ProjectError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectError>;
}
