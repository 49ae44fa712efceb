use std::future::Future;
use std::pin::Pin;

use aws_config::BehaviorVersion;
use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::config::Region;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::types::{InputLogEvent, RejectedLogEventsInfo};

use emf_upload::{LogEventSink, RejectedEvents, UploadError, UploadEvent, UploadSummary, UploadTarget};

// ═══════════════════════════════════════════════════════════════
//  CloudWatch Logs sink — one PutLogEvents per batch
// ═══════════════════════════════════════════════════════════════

pub struct CloudWatchLogsSink {
    client: Client,
}

impl CloudWatchLogsSink {
    /// Credentials and region come from the default AWS provider chain;
    /// `region` overrides the latter when given.
    pub async fn from_env(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let sdk_config = loader.load().await;
        tracing::debug!(region = ?sdk_config.region(), "aws config loaded");
        Self::new(Client::new(&sdk_config))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl LogEventSink for CloudWatchLogsSink {
    fn put_events<'a>(
        &'a self,
        target: &'a UploadTarget,
        events: Vec<UploadEvent>,
    ) -> Pin<Box<dyn Future<Output = Result<UploadSummary, UploadError>> + Send + 'a>> {
        Box::pin(async move {
            let count = events.len();
            let log_events = events
                .into_iter()
                .map(to_input_log_event)
                .collect::<Result<Vec<_>, _>>()?;

            let output = self
                .client
                .put_log_events()
                .log_group_name(&target.log_group)
                .log_stream_name(&target.log_stream)
                .set_log_events(Some(log_events))
                .send()
                .await
                .map_err(|e| UploadError::upload(DisplayErrorContext(&e).to_string()))?;

            let rejected = output
                .rejected_log_events_info()
                .map(rejected_events)
                .unwrap_or_default();
            Ok(UploadSummary { events: count, rejected })
        })
    }
}

fn to_input_log_event(event: UploadEvent) -> Result<InputLogEvent, UploadError> {
    InputLogEvent::builder()
        .message(event.message)
        .timestamp(event.timestamp_ms)
        .build()
        .map_err(|e| UploadError::upload(format!("invalid log event: {e}")))
}

fn rejected_events(info: &RejectedLogEventsInfo) -> RejectedEvents {
    let index = |i: Option<i32>| i.and_then(|i| usize::try_from(i).ok());
    RejectedEvents {
        too_new_start: index(info.too_new_log_event_start_index()),
        too_old_end: index(info.too_old_log_event_end_index()),
        expired_end: index(info.expired_log_event_end_index()),
    }
}
