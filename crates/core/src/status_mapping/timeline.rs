//! Tracking timeline scanning.
//!
//! Timelines arrive as raw JSON and are the least trustworthy signal on an
//! order: entries can be null, missing their code, or carry a code of the
//! wrong type. Both passes here tolerate that entry by entry instead of
//! rejecting the whole timeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Timeline code that marks an order as delivered.
const DELIVERED_CODE: &str = "delivered";

/// Timeline codes that mark an order as handed to the carrier.
const SHIPPED_CODES: [&str; 2] = ["shipped", "dispatched"];

/// Flags derived from one pass over a tracking timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimelineSignals {
    /// A `delivered` code was seen.
    pub has_delivered: bool,
    /// A shipment-level code was seen. Delivery implies this.
    pub has_shipped: bool,
    /// Raw entry count, malformed entries included.
    pub event_count: usize,
}

/// A tracking timeline entry in parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    /// Event code, present only when the raw entry carried a string code.
    pub code: Option<String>,
    /// Event time, present only when the raw entry carried a valid
    /// RFC 3339 timestamp.
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Scan a raw timeline for delivery and shipment evidence.
///
/// Anything that is not an array counts as an empty timeline. Entries that
/// are not objects, or whose `code` is missing or not a string, contribute
/// to [`event_count`](TimelineSignals::event_count) but to nothing else.
/// Codes are compared case-insensitively.
#[must_use]
pub fn scan_timeline(raw: Option<&Value>) -> TimelineSignals {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return TimelineSignals::default();
    };

    let mut has_delivered = false;
    let mut saw_shipped = false;
    for entry in entries {
        let Some(code) = entry.get("code").and_then(Value::as_str) else {
            continue;
        };
        if code.eq_ignore_ascii_case(DELIVERED_CODE) {
            has_delivered = true;
        } else if SHIPPED_CODES.iter().any(|c| code.eq_ignore_ascii_case(c)) {
            saw_shipped = true;
        }
    }

    TimelineSignals {
        has_delivered,
        has_shipped: has_delivered || saw_shipped,
        event_count: entries.len(),
    }
}

/// Parse a raw timeline into displayable events.
///
/// Non-object entries are dropped. Within an entry, an unusable code or
/// timestamp becomes `None` rather than discarding the event.
#[must_use]
pub fn parse_timeline(raw: Option<&Value>) -> Vec<TrackingEvent> {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| TrackingEvent {
            code: entry.get("code").and_then(Value::as_str).map(str::to_owned),
            occurred_at: entry
                .get("timestamp")
                .and_then(Value::as_str)
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        })
        .collect()
}
