use crate::error::UploadError;
use crate::record::Record;

/// A record serialized for upload, paired with its ingestion timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    pub message: String,
    pub timestamp_ms: i64,
}

impl UploadEvent {
    pub fn from_record(record: &Record, timestamp_ms: i64) -> Result<Self, UploadError> {
        Ok(Self {
            message: serde_json::to_string(record)?,
            timestamp_ms,
        })
    }
}

/// One event per record, input order preserved. `clock` is sampled once per
/// event, at the moment that event is serialized.
pub fn build_events(
    records: &[Record],
    mut clock: impl FnMut() -> i64,
) -> Result<Vec<UploadEvent>, UploadError> {
    records
        .iter()
        .map(|record| UploadEvent::from_record(record, clock()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AWS_KEY, TIMESTAMP_KEY, normalize_records, parse_records};
    use crate::util::now_ms;

    #[test]
    fn message_is_compact_json() {
        let recs = parse_records(r#"{ "_aws" : { "Timestamp" : 1 } , "a" : [1, 2] }"#).unwrap();
        let ev = UploadEvent::from_record(&recs[0], 42).unwrap();
        assert_eq!(ev.message, r#"{"_aws":{"Timestamp":1},"a":[1,2]}"#);
        assert_eq!(ev.timestamp_ms, 42);
    }

    #[test]
    fn message_keeps_input_key_order() {
        let text = r#"{"my_counter":1,"label":"v","_aws":{"Timestamp":1,"CloudWatchMetrics":[]}}"#;
        let recs = parse_records(text).unwrap();
        let ev = UploadEvent::from_record(&recs[0], 1).unwrap();
        assert_eq!(ev.message, text);
    }

    #[test]
    fn clock_is_sampled_per_event() {
        let recs = parse_records(r#"[{"n":1},{"n":2},{"n":3}]"#).unwrap();
        let mut t = 100;
        let events = build_events(&recs, || {
            t += 7;
            t
        })
        .unwrap();
        let stamps: Vec<_> = events.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, vec![107, 114, 121]);
        assert!(events[0].message.contains(r#""n":1"#));
        assert!(events[2].message.contains(r#""n":3"#));
    }

    #[test]
    fn event_timestamp_not_before_record_timestamp() {
        let recs = parse_records(r#"[{"_aws":{"Timestamp":1}},{"_aws":{"Timestamp":1}}]"#).unwrap();
        let recs = normalize_records(recs, now_ms()).unwrap();
        let events = build_events(&recs, now_ms).unwrap();
        for (rec, ev) in recs.iter().zip(&events) {
            let in_record = rec[AWS_KEY][TIMESTAMP_KEY].as_i64().unwrap();
            assert!(ev.timestamp_ms >= in_record);
        }
        assert!(events.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms));
    }

    #[test]
    fn message_parses_back_to_record() {
        let recs = parse_records(
            r#"{"_aws":{"CloudWatchMetrics":[{"Namespace":"MyNS","Dimensions":[["label"]],"Metrics":[{"Name":"my_counter"}]}],"Timestamp":1},"label":"value1","my_counter":1}"#,
        )
        .unwrap();
        let recs = normalize_records(recs, 2_000).unwrap();
        let ev = UploadEvent::from_record(&recs[0], 2_000).unwrap();
        let back = parse_records(&ev.message).unwrap();
        assert_eq!(back, recs);
    }
}
