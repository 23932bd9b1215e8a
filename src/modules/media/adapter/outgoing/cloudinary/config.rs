use std::fmt;

use crate::config::{ConfigError, ConfigSource};

pub const DEFAULT_ROOT_FOLDER: &str = "anirban-portfolio";
const API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Every upload lands under this folder.
    pub root_folder: String,
    pub api_base: String,
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("root_folder", &self.root_folder)
            .finish()
    }
}

impl CloudinaryConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: source.required("CLOUDINARY_CLOUD_NAME")?,
            api_key: source.required("CLOUDINARY_API_KEY")?,
            api_secret: source.required("CLOUDINARY_API_SECRET")?,
            root_folder: source
                .value("CLOUDINARY_FOLDER")
                .map(|f| f.trim_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ROOT_FOLDER.to_string()),
            api_base: API_BASE.to_string(),
        })
    }

    pub fn folder(&self, sub_folder: &str) -> String {
        format!("{}/{}", self.root_folder, sub_folder)
    }

    /// `resource_type` is `auto` for uploads, `image` for destroy.
    pub fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.api_base, self.cloud_name, resource_type, action
        )
    }
}
