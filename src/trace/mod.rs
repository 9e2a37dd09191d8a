//! In-memory transition tracing.
//!
//! A [`Trace`] is a diagnostic record of the path an automaton took:
//! one [`TraceRecord`] per successful dispatch, carrying state display
//! names and a timestamp. Records carry names rather than raw identities
//! because identities are process-local tokens; the trace exists to be
//! read (and serialized) by humans and tooling outside the process.
//!
//! Tracing is opt-in via [`BehaviorBuilder::traced`](crate::BehaviorBuilder::traced);
//! the untraced dispatch path allocates nothing per step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Display name of the state that was invoked.
    pub from: String,
    /// Display name of the state it returned (`<sentinel>` or `<unknown>`
    /// for identities outside the set).
    pub to: String,
    /// When the dispatch happened.
    pub timestamp: DateTime<Utc>,
    /// Zero-based position of this record in the trace.
    pub step: usize,
}

/// Ordered trace of dispatched transitions.
///
/// The trace is an immutable value: [`record`](Trace::record) returns a new
/// trace with the record appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use turnstile::{Behavior, StateId};
///
/// fn warm_up(_reps: &mut u32) -> StateId {
///     StateId::of(&run)
/// }
///
/// fn run(reps: &mut u32) -> StateId {
///     *reps += 1;
///     StateId::of(&run)
/// }
///
/// let mut behavior = Behavior::builder()
///     .state(warm_up)
///     .state(run)
///     .traced()
///     .build()
///     .unwrap();
///
/// let mut reps = 0;
/// behavior.invoke(&mut reps);
/// behavior.invoke(&mut reps);
///
/// let trace = behavior.trace().unwrap();
/// assert_eq!(trace.path(), vec!["warm_up", "run", "run"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new trace. The original is unchanged.
    pub fn record(&self, record: TraceRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in dispatch order.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True iff nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The path of state names traversed: the first record's origin, then
    /// each record's destination. Empty for an empty trace.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last record, `None` for an empty
    /// trace.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, step: usize) -> TraceRecord {
        TraceRecord {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
            step,
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert!(trace.path().is_empty());
        assert!(trace.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let trace = Trace::new();
        let recorded = trace.record(record("scan", "clean", 0));

        assert_eq!(trace.len(), 0);
        assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn path_returns_name_sequence() {
        let trace = Trace::new()
            .record(record("scan", "clean", 0))
            .record(record("clean", "scan", 1))
            .record(record("scan", "done", 2));

        assert_eq!(trace.path(), vec!["scan", "clean", "scan", "done"]);
    }

    #[test]
    fn duration_spans_first_to_last_record() {
        let start = Utc::now();
        let trace = Trace::new()
            .record(TraceRecord {
                from: "scan".to_string(),
                to: "clean".to_string(),
                timestamp: start,
                step: 0,
            })
            .record(TraceRecord {
                from: "clean".to_string(),
                to: "done".to_string(),
                timestamp: start + chrono::Duration::milliseconds(25),
                step: 1,
            });

        assert_eq!(trace.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let trace = Trace::new().record(record("scan", "done", 0));
        assert_eq!(trace.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn trace_serializes_round_trip() {
        let trace = Trace::new()
            .record(record("scan", "clean", 0))
            .record(record("clean", "done", 1));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(trace.records(), deserialized.records());
    }
}
