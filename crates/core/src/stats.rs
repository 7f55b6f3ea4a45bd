//! Admin dashboard arithmetic.

/// Number of tags reported in engagement metrics.
pub const TOP_TAGS_LIMIT: i64 = 5;

/// Percentage of approved answers, rounded to one decimal place.
///
/// Returns `0.0` when there are no answers.
pub fn approval_rate(approved: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let percent = approved as f64 / total as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}
