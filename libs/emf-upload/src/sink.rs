use std::future::Future;
use std::pin::Pin;

use crate::error::UploadError;
use crate::event::UploadEvent;

/// Where the events go: an existing log group and log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub log_group: String,
    pub log_stream: String,
}

/// Indices of events the service refused, as reported by the service.
///
/// `too_new_start`: events from this index on were too far in the future.
/// `too_old_end` / `expired_end`: events before this index were too old or
/// past the group's retention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectedEvents {
    pub too_new_start: Option<usize>,
    pub too_old_end: Option<usize>,
    pub expired_end: Option<usize>,
}

impl RejectedEvents {
    pub fn is_empty(&self) -> bool {
        self.too_new_start.is_none() && self.too_old_end.is_none() && self.expired_end.is_none()
    }
}

/// Outcome of the single upload call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub events: usize,
    pub rejected: RejectedEvents,
}

/// Destination for a batch of upload events.
///
/// Implementations perform exactly one service call per `put_events` and
/// do not retry on their own.
pub trait LogEventSink: Send + Sync {
    fn put_events<'a>(
        &'a self,
        target: &'a UploadTarget,
        events: Vec<UploadEvent>,
    ) -> Pin<Box<dyn Future<Output = Result<UploadSummary, UploadError>> + Send + 'a>>;
}
