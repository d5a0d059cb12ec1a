//! Public API surface for the analysis engine.
//!
//! This file consolidates the types a presentation layer consumes: record
//! and window types, the dataset container, and the service entry points
//! with their result DTOs.

pub use crate::algorithms::closure::{AdvisingGraph, Direction};
pub use crate::config::{AnalysisConfig, MapSettings, WindowingSettings};
pub use crate::dataset::{parse_dataset_json_str, GenealogyDataset};
pub use crate::error::{AnalysisError, AnalysisResult};
pub use crate::models::geo::LocationKey;
pub use crate::models::records::{
    AcademicId, AdviseEdge, DegreeId, DegreeRecord, SchoolId, SchoolRecord,
};
pub use crate::models::window::YearWindow;
pub use crate::services::cumulative::accumulate_location_counts;
pub use crate::services::lineage::{resolve_lineage, LineageData};
pub use crate::services::windows::{assign_to_windows, build_year_windows};
pub use crate::services::world_map::{
    aggregate_schools, compute_world_map_data, project_locations, SchoolAggregation,
    SchoolBucket, WorldMapData,
};
