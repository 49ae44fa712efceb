use emf_upload::upload_file;

use super::cloudwatch::CloudWatchLogsSink;
use super::config::UploadConfig;
use super::error::PutLogsError;

pub async fn run(config: &UploadConfig) -> Result<(), PutLogsError> {
    let sink = CloudWatchLogsSink::from_env(config.region.as_deref()).await;
    upload_file(&config.file, &config.target, &sink).await?;
    Ok(())
}
