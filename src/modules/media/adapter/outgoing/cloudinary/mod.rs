mod config;
mod signing;
mod storage;

pub use config::{CloudinaryConfig, DEFAULT_ROOT_FOLDER};
pub use storage::CloudinaryStorage;
