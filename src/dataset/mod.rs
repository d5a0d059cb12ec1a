//! In-memory genealogy tables.
//!
//! The pipeline consumes three read-only tables: degrees, schools, and
//! advise edges. [`GenealogyDataset`] owns them for the duration of one run
//! and exposes id-keyed lookups. Every service receives the dataset as an
//! explicit argument; there is no process-global table state.

pub mod parse;

pub use parse::parse_dataset_json_str;

use std::collections::HashMap;

use crate::models::{AcademicId, AdviseEdge, DegreeId, DegreeRecord, SchoolId, SchoolRecord};

/// Read-only genealogy tables with id-keyed lookup maps.
#[derive(Debug, Clone, Default)]
pub struct GenealogyDataset {
    degrees: HashMap<DegreeId, DegreeRecord>,
    schools: HashMap<SchoolId, SchoolRecord>,
    edges: Vec<AdviseEdge>,
    degrees_by_academic: HashMap<AcademicId, Vec<DegreeId>>,
    checksum: String,
}

impl GenealogyDataset {
    /// Build a dataset from raw table rows.
    ///
    /// Duplicate degree or school ids keep the last row seen, matching a
    /// keyed table overwrite.
    pub fn new(
        degrees: Vec<DegreeRecord>,
        schools: Vec<SchoolRecord>,
        edges: Vec<AdviseEdge>,
    ) -> Self {
        let mut degree_map = HashMap::with_capacity(degrees.len());
        let mut degrees_by_academic: HashMap<AcademicId, Vec<DegreeId>> = HashMap::new();
        for degree in degrees {
            degrees_by_academic
                .entry(degree.academic)
                .or_default()
                .push(degree.id);
            degree_map.insert(degree.id, degree);
        }

        let school_map = schools
            .into_iter()
            .map(|school| (school.id, school))
            .collect();

        Self {
            degrees: degree_map,
            schools: school_map,
            edges,
            degrees_by_academic,
            checksum: String::new(),
        }
    }

    /// Attach the checksum of the source the dataset was parsed from.
    pub fn with_checksum(mut self, checksum: String) -> Self {
        self.checksum = checksum;
        self
    }

    /// Look up a degree record by id.
    pub fn degree(&self, id: DegreeId) -> Option<&DegreeRecord> {
        self.degrees.get(&id)
    }

    /// Look up a school record by id.
    pub fn school(&self, id: SchoolId) -> Option<&SchoolRecord> {
        self.schools.get(&id)
    }

    /// The full advise-edge table.
    pub fn edges(&self) -> &[AdviseEdge] {
        &self.edges
    }

    /// Degree ids granted to one academic.
    pub fn degrees_for_academic(&self, academic: AcademicId) -> &[DegreeId] {
        self.degrees_by_academic
            .get(&academic)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All degrees with a known grant year, as `(id, year)` pairs sorted by
    /// degree id. Undated degrees are skipped before binning.
    pub fn dated_degree_ids(&self) -> Vec<(DegreeId, i32)> {
        let mut dated: Vec<(DegreeId, i32)> = self
            .degrees
            .values()
            .filter_map(|degree| degree.year.map(|year| (degree.id, year)))
            .collect();
        dated.sort_by_key(|(id, _)| *id);
        dated
    }

    pub fn degree_count(&self) -> usize {
        self.degrees.len()
    }

    pub fn school_count(&self) -> usize {
        self.schools.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checksum of the parsed source, empty for hand-built datasets.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}
