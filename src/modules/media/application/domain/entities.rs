use serde::Serialize;

/// Raw bytes received from an admin upload, with the metadata the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(bytes: Vec<u8>, file_name: &str, content_type: &str) -> Self {
        Self {
            bytes,
            file_name: file_name.trim().to_string(),
            content_type: essence(content_type),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// `image/png; charset=binary` -> `image/png`
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Where the media host put an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    pub url: String,
    pub public_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parameters_are_dropped() {
        let file = FileUpload::new(vec![1], " logo.png ", "Image/PNG; charset=binary");
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.file_name, "logo.png");
        assert_eq!(file.size(), 1);
    }
}
