//! Time window construction and bucketing.

use std::collections::HashMap;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::YearWindow;

/// Partition `[first, last)` into windows of width `increment`, with
/// consecutive window starts spaced `overlap_step` years apart.
///
/// Windows are emitted in chronological order. The final window's end may
/// exceed `last`. When `overlap_step < increment` consecutive windows
/// overlap and a year can fall into more than one of them.
pub fn build_year_windows(
    first: i32,
    last: i32,
    increment: i32,
    overlap_step: i32,
) -> AnalysisResult<Vec<YearWindow>> {
    if first >= last {
        return Err(AnalysisError::invalid_window_spec(format!(
            "first year must precede last year (got {} >= {})",
            first, last
        )));
    }
    if increment <= 0 {
        return Err(AnalysisError::invalid_window_spec(format!(
            "increment must be positive (got {})",
            increment
        )));
    }
    if overlap_step <= 0 {
        return Err(AnalysisError::invalid_window_spec(format!(
            "overlap step must be positive (got {})",
            overlap_step
        )));
    }

    let mut windows = Vec::new();
    let mut n = first;
    while n < last {
        windows.push(YearWindow::new(n, n + increment));
        n += overlap_step;
    }
    Ok(windows)
}

/// Bucket `(value, year)` items into every window whose interval contains
/// their year.
///
/// Every window appears as a key, empty buckets included. An item outside
/// all windows is silently dropped; an item inside an overlap region lands
/// in each containing window, deliberately without deduplication.
pub fn assign_to_windows<T: Clone>(
    items: &[(T, i32)],
    windows: &[YearWindow],
) -> HashMap<YearWindow, Vec<T>> {
    let mut buckets: HashMap<YearWindow, Vec<T>> =
        windows.iter().map(|w| (*w, Vec::new())).collect();

    for (value, year) in items {
        for window in windows {
            if window.contains(*year) {
                buckets.entry(*window).or_default().push(value.clone());
            }
        }
    }
    buckets
}
