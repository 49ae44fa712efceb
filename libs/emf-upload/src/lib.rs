//! Core of the `put-logs` helper: turn a file of canned EMF records into
//! log events stamped with the current time, and hand them to a
//! [`LogEventSink`] in a single call.
//!
//! Nothing in here talks to AWS directly; the binary supplies the sink.

pub mod error;
pub mod event;
pub mod record;
pub mod sink;
pub mod upload;
pub mod util;

pub use error::UploadError;
pub use event::{UploadEvent, build_events};
pub use record::{
    AWS_KEY, Record, TIMESTAMP_BACKDATE_MS, TIMESTAMP_KEY, load_records, normalize_record,
    normalize_records, parse_records,
};
pub use sink::{LogEventSink, RejectedEvents, UploadSummary, UploadTarget};
pub use upload::upload_file;
pub use util::now_ms;
