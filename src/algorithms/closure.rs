//! Advising graph and reachability closure.
//!
//! The advise-edge table forms a directed graph that is nominally acyclic
//! (an academic should not advise an ancestor) but nothing enforces that.
//! Traversal therefore keeps a visited set while expanding, so cyclic or
//! self-referential edges terminate and shared sub-lineages (diamond shapes)
//! are expanded once instead of exponentially.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::{AcademicId, AdviseEdge};

/// Traversal direction through the advising graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One hop back in time: the advisors of an academic.
    Ancestors,
    /// One hop forward in time: the advisees of an academic.
    Descendants,
}

/// Directed advisor→advisee edge set with adjacency maps for both directions.
///
/// Pure lookup structure over a static edge table; never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct AdvisingGraph {
    advisors_of: HashMap<AcademicId, Vec<AcademicId>>,
    advisees_of: HashMap<AcademicId, Vec<AcademicId>>,
}

impl AdvisingGraph {
    /// Build the adjacency maps from the edge table.
    pub fn from_edges(edges: &[AdviseEdge]) -> Self {
        let mut advisors_of: HashMap<AcademicId, Vec<AcademicId>> = HashMap::new();
        let mut advisees_of: HashMap<AcademicId, Vec<AcademicId>> = HashMap::new();
        for edge in edges {
            advisors_of.entry(edge.advisee).or_default().push(edge.advisor);
            advisees_of.entry(edge.advisor).or_default().push(edge.advisee);
        }
        Self {
            advisors_of,
            advisees_of,
        }
    }

    /// One-hop neighbors of `academic` in the requested direction.
    pub fn neighbors(&self, academic: AcademicId, direction: Direction) -> &[AcademicId] {
        let table = match direction {
            Direction::Ancestors => &self.advisors_of,
            Direction::Descendants => &self.advisees_of,
        };
        table.get(&academic).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All academics reachable from `seed` by repeated one-hop expansion in
    /// `direction`.
    ///
    /// Breadth-first with an explicit frontier and a growing visited set, so
    /// traversal terminates on cyclic data and visits shared sub-lineages
    /// once. Ancestor closures include the seed; descendant closures exclude
    /// it, even when a cycle makes the seed reachable from itself.
    pub fn closure(&self, seed: AcademicId, direction: Direction) -> HashSet<AcademicId> {
        let mut visited = HashSet::new();
        visited.insert(seed);

        let mut frontier = VecDeque::new();
        frontier.push_back(seed);

        while let Some(current) = frontier.pop_front() {
            for &next in self.neighbors(current, direction) {
                if visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }

        if direction == Direction::Descendants {
            visited.remove(&seed);
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(advisor: i64, advisee: i64) -> AdviseEdge {
        AdviseEdge {
            advisor: AcademicId(advisor),
            advisee: AcademicId(advisee),
        }
    }

    fn ids(values: &[i64]) -> HashSet<AcademicId> {
        values.iter().map(|v| AcademicId(*v)).collect()
    }

    #[test]
    fn neighbors_follow_edge_direction() {
        // A(1) advises B(2), B advises C(3)
        let graph = AdvisingGraph::from_edges(&[edge(1, 2), edge(2, 3)]);

        assert_eq!(graph.neighbors(AcademicId(2), Direction::Ancestors), &[AcademicId(1)]);
        assert_eq!(
            graph.neighbors(AcademicId(2), Direction::Descendants),
            &[AcademicId(3)]
        );
        assert!(graph.neighbors(AcademicId(1), Direction::Ancestors).is_empty());
        assert!(graph.neighbors(AcademicId(3), Direction::Descendants).is_empty());
    }

    #[test]
    fn chain_closures_match_seed_policy() {
        let graph = AdvisingGraph::from_edges(&[edge(1, 2), edge(2, 3)]);

        // Ancestors include the seed, descendants do not.
        assert_eq!(graph.closure(AcademicId(3), Direction::Ancestors), ids(&[1, 2, 3]));
        assert_eq!(graph.closure(AcademicId(1), Direction::Descendants), ids(&[2, 3]));
        assert_eq!(graph.closure(AcademicId(1), Direction::Ancestors), ids(&[1]));
        assert_eq!(graph.closure(AcademicId(3), Direction::Descendants), ids(&[]));
    }

    #[test]
    fn cyclic_edges_terminate() {
        // Chain plus a back edge C(3) -> A(1).
        let graph = AdvisingGraph::from_edges(&[edge(1, 2), edge(2, 3), edge(3, 1)]);

        assert_eq!(graph.closure(AcademicId(3), Direction::Ancestors), ids(&[1, 2, 3]));
        // The seed stays excluded from its own descendant closure even though
        // the cycle makes it reachable.
        assert_eq!(graph.closure(AcademicId(1), Direction::Descendants), ids(&[2, 3]));
    }

    #[test]
    fn self_loop_terminates() {
        let graph = AdvisingGraph::from_edges(&[edge(5, 5)]);

        assert_eq!(graph.closure(AcademicId(5), Direction::Ancestors), ids(&[5]));
        assert_eq!(graph.closure(AcademicId(5), Direction::Descendants), ids(&[]));
    }

    #[test]
    fn diamond_is_expanded_once() {
        // 1 advises 2 and 3; both advise 4.
        let graph = AdvisingGraph::from_edges(&[edge(1, 2), edge(1, 3), edge(2, 4), edge(3, 4)]);

        assert_eq!(graph.closure(AcademicId(4), Direction::Ancestors), ids(&[1, 2, 3, 4]));
        assert_eq!(graph.closure(AcademicId(1), Direction::Descendants), ids(&[2, 3, 4]));
    }

    #[test]
    fn isolated_academic_has_trivial_closures() {
        let graph = AdvisingGraph::from_edges(&[]);

        assert_eq!(graph.closure(AcademicId(7), Direction::Ancestors), ids(&[7]));
        assert_eq!(graph.closure(AcademicId(7), Direction::Descendants), ids(&[]));
    }
}
