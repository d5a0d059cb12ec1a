//! World map aggregation: per-window school and location counts.
//!
//! Joins binned degree ids through the degree table to schools and their
//! coordinates. Join gaps are tolerated and tallied, never raised; the
//! counters travel with the result so callers can judge data completeness.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::WindowingSettings;
use crate::dataset::GenealogyDataset;
use crate::error::AnalysisResult;
use crate::models::{DegreeId, LocationKey, SchoolId, YearWindow};
use crate::services::cumulative::accumulate_location_counts;
use crate::services::windows::{assign_to_windows, build_year_windows};

/// Per-school degree tally for one window.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SchoolBucket {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub count: u64,
}

/// Result of the degree→school join over a set of binned windows.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolAggregation {
    /// Window → school → tally. Every binned window appears, empty maps
    /// included.
    pub per_window: HashMap<YearWindow, HashMap<SchoolId, SchoolBucket>>,
    /// Degree ids that could not be joined to a school record.
    pub error_count: usize,
    /// Total degree ids processed across all buckets.
    pub total_count: usize,
}

/// Complete world map data for one windowing run.
#[derive(Debug, Clone)]
pub struct WorldMapData {
    /// Windows in chronological order; iterate these to walk the maps below.
    pub windows: Vec<YearWindow>,
    pub school_counts: HashMap<YearWindow, HashMap<SchoolId, SchoolBucket>>,
    pub location_counts: HashMap<YearWindow, HashMap<LocationKey, u64>>,
    /// Running totals per window. Only present for non-overlapping window
    /// specs; overlapping windows would double-count degrees.
    pub cumulative_counts: Option<HashMap<YearWindow, HashMap<LocationKey, u64>>>,
    pub error_count: usize,
    pub total_count: usize,
}

/// Join binned degree ids to schools, producing per-window tallies.
///
/// A degree id absent from the degree table counts as an error and is
/// skipped. A degree whose school id is absent from the school table is also
/// counted as an error, and additionally logged: the degree row resolved, so
/// a missing school indicates a corrupt table rather than an ordinary gap.
/// Schools are never fabricated; tallies exist only for resolvable joins.
pub fn aggregate_schools(
    binned: &HashMap<YearWindow, Vec<DegreeId>>,
    dataset: &GenealogyDataset,
) -> SchoolAggregation {
    let mut per_window = HashMap::with_capacity(binned.len());
    let mut error_count = 0;
    let mut total_count = 0;

    for (window, degree_ids) in binned {
        let mut schools: HashMap<SchoolId, SchoolBucket> = HashMap::new();
        for degree_id in degree_ids {
            total_count += 1;
            let Some(degree) = dataset.degree(*degree_id) else {
                error_count += 1;
                continue;
            };
            match schools.entry(degree.school) {
                Entry::Occupied(mut slot) => {
                    slot.get_mut().count += 1;
                }
                Entry::Vacant(slot) => match dataset.school(degree.school) {
                    Some(school) => {
                        slot.insert(SchoolBucket {
                            name: school.name.clone(),
                            latitude: school.latitude,
                            longitude: school.longitude,
                            count: 1,
                        });
                    }
                    None => {
                        log::warn!(
                            "Degree {} resolved to school {} which is missing from the school table",
                            degree_id,
                            degree.school
                        );
                        error_count += 1;
                    }
                },
            }
        }
        per_window.insert(*window, schools);
    }

    SchoolAggregation {
        per_window,
        error_count,
        total_count,
    }
}

/// Re-key one window's school tallies by `(longitude, latitude)`.
///
/// Distinct schools sharing exact coordinates merge into one entry with
/// summed counts; school identity is dropped.
pub fn project_locations(
    school_counts: &HashMap<SchoolId, SchoolBucket>,
) -> HashMap<LocationKey, u64> {
    let mut locations = HashMap::with_capacity(school_counts.len());
    for bucket in school_counts.values() {
        *locations
            .entry(LocationKey::new(bucket.longitude, bucket.latitude))
            .or_insert(0) += bucket.count;
    }
    locations
}

/// Compute complete world map data for the given windowing settings.
///
/// Builds the window set, bins all dated degrees, joins them to schools,
/// projects per-location counts, and folds cumulative totals when the
/// windows are non-overlapping. This is the whole aggregation pipeline
/// behind one map animation.
pub fn compute_world_map_data(
    dataset: &GenealogyDataset,
    windowing: &WindowingSettings,
) -> AnalysisResult<WorldMapData> {
    let windows = build_year_windows(
        windowing.first,
        windowing.last,
        windowing.increment,
        windowing.overlap_step,
    )?;

    let dated = dataset.dated_degree_ids();
    let binned = assign_to_windows(&dated, &windows);
    let aggregation = aggregate_schools(&binned, dataset);

    log::info!(
        "Placed {} of {} binned degrees ({} join gaps)",
        aggregation.total_count - aggregation.error_count,
        aggregation.total_count,
        aggregation.error_count
    );

    let location_counts: HashMap<YearWindow, HashMap<LocationKey, u64>> = aggregation
        .per_window
        .iter()
        .map(|(window, schools)| (*window, project_locations(schools)))
        .collect();

    let cumulative_counts = if windowing.overlaps() {
        None
    } else {
        Some(accumulate_location_counts(&windows, &location_counts))
    };

    Ok(WorldMapData {
        windows,
        school_counts: aggregation.per_window,
        location_counts,
        cumulative_counts,
        error_count: aggregation.error_count,
        total_count: aggregation.total_count,
    })
}
