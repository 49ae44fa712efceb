use std::path::Path;

use crate::error::UploadError;
use crate::event::build_events;
use crate::record::{load_records, normalize_records};
use crate::sink::{LogEventSink, UploadSummary, UploadTarget};
use crate::util::now_ms;

// ═══════════════════════════════════════════════════════════════
//  File → sink
// ═══════════════════════════════════════════════════════════════

/// Load `path`, backdate every record's `_aws.Timestamp` to one second ago,
/// and send all records to `sink` in a single call.
///
/// Any load or format failure returns before the sink is touched.
pub async fn upload_file(
    path: &Path,
    target: &UploadTarget,
    sink: &dyn LogEventSink,
) -> Result<UploadSummary, UploadError> {
    let records = load_records(path)?;
    let records = normalize_records(records, now_ms())?;
    let events = build_events(&records, now_ms)?;

    tracing::info!(
        events = events.len(),
        log_group = %target.log_group,
        log_stream = %target.log_stream,
        "uploading"
    );
    let summary = sink.put_events(target, events).await?;

    if summary.rejected.is_empty() {
        tracing::info!(events = summary.events, "upload accepted");
    } else {
        tracing::warn!(
            events = summary.events,
            too_new_start = ?summary.rejected.too_new_start,
            too_old_end = ?summary.rejected.too_old_end,
            expired_end = ?summary.rejected.expired_end,
            "service rejected some events"
        );
    }
    Ok(summary)
}
