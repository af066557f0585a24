use crate::domain::model::Interval;

/// Whole days shared by two intervals. Zero or negative means they do not overlap,
/// including ranges that only touch on a single day.
pub fn overlap_days(a: &Interval, b: &Interval) -> i64 {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (end - start).num_days()
}
