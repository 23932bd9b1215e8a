use crate::media::application::domain::entities::FileUpload;

const MIB: usize = 1024 * 1024;
const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File is empty")]
    Empty,

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File exceeds the {limit_mib} MB limit")]
    TooLarge { limit_mib: usize },

    #[error("File content is not a valid PDF")]
    NotAPdf,

    #[error("Invalid upload folder")]
    InvalidFolder,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_bytes: usize,
    pub max_pdf_bytes: usize,
    pub max_file_name_len: usize,
    pub image_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_image_bytes: 5 * MIB,
            max_pdf_bytes: 10 * MIB,
            max_file_name_len: 255,
            image_types: Self::IMAGE_TYPES,
        }
    }
}

impl UploadPolicy {
    pub const IMAGE_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/svg+xml",
        "image/gif",
    ];
    pub const PDF_TYPE: &'static str = "application/pdf";
    const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

    /// Largest request body any upload route has to accept, multipart
    /// framing included.
    pub fn max_body_bytes(&self) -> usize {
        self.max_image_bytes.max(self.max_pdf_bytes) + Self::MULTIPART_OVERHEAD_BYTES
    }

    pub fn check(&self, file: &FileUpload) -> Result<MediaKind, UploadRejection> {
        if file.bytes.is_empty() {
            return Err(UploadRejection::Empty);
        }

        let name = file.file_name.as_str();
        if name.is_empty()
            || name.chars().count() > self.max_file_name_len
            || name.contains(['/', '\\'])
            || name.chars().any(char::is_control)
        {
            return Err(UploadRejection::InvalidFileName);
        }

        let (kind, limit) = if file.content_type == Self::PDF_TYPE {
            (MediaKind::Pdf, self.max_pdf_bytes)
        } else if self.image_types.contains(&file.content_type.as_str()) {
            (MediaKind::Image, self.max_image_bytes)
        } else {
            return Err(UploadRejection::UnsupportedType(file.content_type.clone()));
        };

        if file.size() > limit {
            return Err(UploadRejection::TooLarge {
                limit_mib: limit / MIB,
            });
        }

        if kind == MediaKind::Pdf && !file.bytes.starts_with(PDF_MAGIC) {
            return Err(UploadRejection::NotAPdf);
        }

        Ok(kind)
    }
}
