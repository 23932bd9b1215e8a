mod social_link_repository;

pub use social_link_repository::{SocialLinkData, SocialLinkRepository, SocialLinkRepositoryError};
