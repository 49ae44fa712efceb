use emf_upload::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum PutLogsError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Upload(#[from] UploadError),
}
