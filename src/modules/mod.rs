pub mod about;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod hero;
pub mod media;
pub mod newsletter;
pub mod project;
pub mod recognition;
pub mod resume;
pub mod social_link;
pub mod solution;
pub mod stats;
pub mod technology;
pub mod testimonial;
