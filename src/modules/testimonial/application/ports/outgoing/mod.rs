mod testimonial_repository;

pub use testimonial_repository::{TestimonialData, TestimonialRepository, TestimonialRepositoryError};
