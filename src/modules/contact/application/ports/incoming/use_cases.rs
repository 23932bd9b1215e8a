use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::{
    ContactFilter, ContactInbox, ContactMessage, ContactStatus, ContactStatusChange,
    NewContactMessage,
};
use crate::shared::validation::{is_valid_email, normalize_email, ValidationErrors};

pub const DEFAULT_SUBJECT: &str = "General Inquiry";

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    message: NewContactMessage,
}

impl SubmitContactCommand {
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Self, ValidationErrors> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationErrors::single(
                "Name, email, and message are required fields",
            ));
        }
        if !is_valid_email(email) {
            return Err(ValidationErrors::single(
                "Please enter a valid email address",
            ));
        }

        let phone = phone.map(str::trim).unwrap_or_default();
        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT);

        let mut errors = ValidationErrors::new();
        errors.max_chars(name, 100, "Name cannot exceed 100 characters");
        errors.max_chars(phone, 20, "Phone cannot exceed 20 characters");
        errors.max_chars(subject, 200, "Subject cannot exceed 200 characters");
        errors.max_chars(message, 1000, "Message cannot exceed 1000 characters");

        errors.finish(Self {
            message: NewContactMessage {
                name: name.to_string(),
                email: normalize_email(email),
                phone: phone.to_string(),
                subject: subject.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn into_message(self) -> NewContactMessage {
        self.message
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateContactStatusCommand {
    change: ContactStatusChange,
}

impl UpdateContactStatusCommand {
    /// Marking a message `read` also flags it as read.
    pub fn new(status: Option<&str>, is_read: Option<bool>) -> Result<Self, ValidationErrors> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(ContactStatus::parse(raw).ok_or_else(|| {
                ValidationErrors::single("Status must be one of: new, read, replied")
            })?),
            None => None,
        };

        if status.is_none() && is_read.is_none() {
            return Err(ValidationErrors::single("Status or isRead is required"));
        }

        let is_read = match status {
            Some(ContactStatus::Read) => Some(true),
            _ => is_read,
        };

        Ok(Self {
            change: ContactStatusChange { status, is_read },
        })
    }

    pub fn change(&self) -> ContactStatusChange {
        self.change
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ContactUseCase: Send + Sync {
    async fn submit(&self, command: SubmitContactCommand) -> Result<Uuid, ContactError>;

    async fn list(&self, filter: ContactFilter) -> Result<ContactInbox, ContactError>;

    async fn update_status(
        &self,
        id: Uuid,
        command: UpdateContactStatusCommand,
    ) -> Result<ContactMessage, ContactError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactError>;
}
