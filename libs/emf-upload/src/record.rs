use std::path::Path;

use serde_json::{Map, Value};

use crate::error::UploadError;
use crate::util::json_kind;

/// One EMF entry as found in the input file.
pub type Record = Map<String, Value>;

/// Reserved key carrying the CloudWatch metric metadata.
pub const AWS_KEY: &str = "_aws";

/// Timestamp field nested under [`AWS_KEY`], epoch milliseconds.
pub const TIMESTAMP_KEY: &str = "Timestamp";

/// How far before "now" the in-record timestamp is placed, so CloudWatch
/// Metrics attributes the datapoint to a minute that has already started.
pub const TIMESTAMP_BACKDATE_MS: i64 = 1000;

// ═══════════════════════════════════════════════════════════════
//  Loading
// ═══════════════════════════════════════════════════════════════

/// Read `path` and parse it into a record set.
pub fn load_records(path: &Path) -> Result<Vec<Record>, UploadError> {
    let content = std::fs::read_to_string(path).map_err(|source| UploadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| UploadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let records = into_records(value)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Parse JSON text into a record set. A lone object becomes a one-element set.
pub fn parse_records(text: &str) -> Result<Vec<Record>, UploadError> {
    into_records(serde_json::from_str(text).map_err(UploadError::Parse)?)
}

fn into_records(value: Value) -> Result<Vec<Record>, UploadError> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(UploadError::format_err(format!(
                    "element {i} is a JSON {}, expected an object",
                    json_kind(&other)
                ))),
            })
            .collect(),
        other => Err(UploadError::format_err(format!(
            "top-level JSON {}, expected an object or an array of objects",
            json_kind(&other)
        ))),
    }
}

// ═══════════════════════════════════════════════════════════════
//  Timestamp normalization
// ═══════════════════════════════════════════════════════════════

/// Return `record` with `_aws.Timestamp` set to `now_ms - 1000`.
///
/// A record without `_aws` is returned untouched. A non-object `_aws` is an error.
pub fn normalize_record(mut record: Record, now_ms: i64) -> Result<Record, UploadError> {
    match record.get_mut(AWS_KEY) {
        Some(Value::Object(aws)) => {
            aws.insert(TIMESTAMP_KEY.to_string(), Value::from(now_ms - TIMESTAMP_BACKDATE_MS));
        }
        Some(other) => {
            return Err(UploadError::format_err(format!(
                "\"{AWS_KEY}\" is a JSON {}, expected an object",
                json_kind(other)
            )));
        }
        None => {
            tracing::debug!("record has no \"{AWS_KEY}\" key, timestamp left as is");
        }
    }
    Ok(record)
}

/// Normalize every record against a single `now_ms` sample.
pub fn normalize_records(records: Vec<Record>, now_ms: i64) -> Result<Vec<Record>, UploadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            normalize_record(record, now_ms).map_err(|e| match e {
                UploadError::Format(msg) => UploadError::Format(format!("record {i}: {msg}")),
                other => other,
            })
        })
        .collect()
}
