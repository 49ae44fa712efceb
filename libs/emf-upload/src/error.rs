use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("bad JSON in {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("bad JSON: {0}")]
    Parse(serde_json::Error),

    #[error("unexpected record shape: {0}")]
    Format(String),

    #[error("record serialization: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("upload failed: {0}")]
    Upload(String),
}

impl UploadError {
    pub fn format_err(msg: impl Into<String>) -> Self {
        UploadError::Format(msg.into())
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        UploadError::Upload(msg.into())
    }
}
