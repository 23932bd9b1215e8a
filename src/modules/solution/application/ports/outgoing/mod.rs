mod solution_repository;

pub use solution_repository::{SolutionData, SolutionRepository, SolutionRepositoryError};
