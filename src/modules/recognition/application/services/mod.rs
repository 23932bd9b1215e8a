mod recognition_service;

pub use recognition_service::RecognitionService;
