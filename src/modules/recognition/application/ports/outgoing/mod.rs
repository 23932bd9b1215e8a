mod recognition_repository;

pub use recognition_repository::{RecognitionData, RecognitionRepository, RecognitionRepositoryError};
