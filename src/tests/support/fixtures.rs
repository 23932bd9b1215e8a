use chrono::Utc;
use uuid::Uuid;

use crate::contact::application::domain::entities::{ContactMessage, ContactStatus};
use crate::project::application::domain::entities::{Project, ProjectStatus};
use crate::technology::application::domain::entities::{TechCategory, Technology};
use crate::testimonial::application::domain::entities::Testimonial;

pub fn sample_project(title: &str) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        image: None,
        tech_stack: vec!["Rust".into(), "PostgreSQL".into()],
        url: None,
        github_url: Some("https://github.com/example/project".into()),
        featured: false,
        status: ProjectStatus::Completed,
        order: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_testimonial(name: &str) -> Testimonial {
    let now = Utc::now();
    Testimonial {
        id: Uuid::new_v4(),
        name: name.to_string(),
        city: "Dhaka".into(),
        rating: 5,
        comment: "Delivered on time".into(),
        avatar: None,
        date: "March 2024".into(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_technology(name: &str) -> Technology {
    let now = Utc::now();
    Technology {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: TechCategory::Backend,
        proficiency: 80,
        logo: None,
        work_as: None,
        color: "#3B82F6".into(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Unread message from `visitor@example.com`.
pub fn sample_contact_message(name: &str) -> ContactMessage {
    let now = Utc::now();
    ContactMessage {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: "visitor@example.com".into(),
        phone: String::new(),
        subject: "General Inquiry".into(),
        message: "Hello there".into(),
        status: ContactStatus::New,
        is_read: false,
        created_at: now,
        updated_at: now,
    }
}

pub const MULTIPART_BOUNDARY: &str = "----portfolio-test-boundary";

pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Encodes `parts` as a `multipart/form-data` body and returns it with the
/// matching `Content-Type` value.
pub fn multipart_form(parts: &[FormPart<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        body,
    )
}
