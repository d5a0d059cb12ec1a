//! Lineage resolution: closure over the advising graph plus degree lookup.

use std::collections::HashSet;

use crate::algorithms::{AdvisingGraph, Direction};
use crate::dataset::GenealogyDataset;
use crate::models::{AcademicId, DegreeId, DegreeRecord};

/// Resolved lineage for one academic: the degree records of everyone in
/// their advisor and advisee lines, deduplicated by degree id.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LineageData {
    pub seed: AcademicId,
    /// Degree rows for the whole lineage, sorted by degree id.
    pub degrees: Vec<DegreeRecord>,
    /// Size of the ancestor closure (seed included).
    pub ancestor_count: usize,
    /// Size of the descendant closure (seed excluded).
    pub descendant_count: usize,
}

/// Compute the full lineage of `seed`.
///
/// Takes the union of the ancestor closure (which includes the seed, so the
/// seed's own degrees are part of its line) and the descendant closure, then
/// fetches every degree record granted to anyone in either closure. A degree
/// appearing in both closures is reported once.
pub fn resolve_lineage(
    seed: AcademicId,
    graph: &AdvisingGraph,
    dataset: &GenealogyDataset,
) -> LineageData {
    let ancestors = graph.closure(seed, Direction::Ancestors);
    let descendants = graph.closure(seed, Direction::Descendants);

    let mut seen: HashSet<DegreeId> = HashSet::new();
    let mut degrees = Vec::new();
    for academic in ancestors.iter().chain(descendants.iter()) {
        for degree_id in dataset.degrees_for_academic(*academic) {
            if seen.insert(*degree_id) {
                if let Some(record) = dataset.degree(*degree_id) {
                    degrees.push(record.clone());
                }
            }
        }
    }
    degrees.sort_by_key(|degree| degree.id);

    LineageData {
        seed,
        degrees,
        ancestor_count: ancestors.len(),
        descendant_count: descendants.len(),
    }
}
