mod technology_service;

pub use technology_service::TechnologyService;
