//! Service layer for analysis and visualization data.
//!
//! Services are pure functions over the in-memory tables: they take the
//! dataset (and any precomputed intermediates) as arguments and return
//! result DTOs together with their audit counters. Nothing in this layer
//! reads files or holds state between calls.

pub mod cumulative;
pub mod lineage;
pub mod windows;
pub mod world_map;


pub use cumulative::accumulate_location_counts;
pub use lineage::{resolve_lineage, LineageData};
pub use windows::{assign_to_windows, build_year_windows};
pub use world_map::{
    aggregate_schools, compute_world_map_data, project_locations, SchoolAggregation,
    SchoolBucket, WorldMapData,
};
