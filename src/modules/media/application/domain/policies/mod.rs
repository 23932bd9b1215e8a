mod upload_policy;

pub use upload_policy::{MediaKind, UploadPolicy, UploadRejection};
