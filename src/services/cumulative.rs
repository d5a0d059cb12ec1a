//! Cumulative aggregation of per-window location counts.

use std::collections::HashMap;

use crate::models::{LocationKey, YearWindow};

/// Fold per-window location counts into running totals.
///
/// Each output window maps a location to the sum of its counts across all
/// windows up to and including that window. The running state spans the
/// whole call; it is never reset between windows.
///
/// Caller contract: `windows` must be in non-decreasing chronological order
/// and non-overlapping (`overlap_step >= increment` at construction).
/// Overlapping windows double-count degrees that fall into more than one
/// window; the result is then meaningless but not rejected here.
/// [`compute_world_map_data`](crate::services::world_map::compute_world_map_data)
/// skips cumulative totals for overlapping specs.
pub fn accumulate_location_counts(
    windows: &[YearWindow],
    per_window: &HashMap<YearWindow, HashMap<LocationKey, u64>>,
) -> HashMap<YearWindow, HashMap<LocationKey, u64>> {
    let mut running: HashMap<LocationKey, u64> = HashMap::new();
    let mut cumulative = HashMap::with_capacity(windows.len());

    for window in windows {
        if let Some(counts) = per_window.get(window) {
            for (location, count) in counts {
                *running.entry(*location).or_insert(0) += count;
            }
        }
        cumulative.insert(*window, running.clone());
    }
    cumulative
}
