use serde::Serialize;

/// Record counts shown on the admin landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub projects: u64,
    pub testimonials: u64,
    pub contact_messages: u64,
    pub unread_messages: u64,
    pub subscribers: u64,
    pub active_technologies: u64,
}
