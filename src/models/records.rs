//! Record types for the genealogy input tables.
//!
//! These mirror the three read-only tables the pipeline consumes: degrees,
//! schools, and advise edges. All records are immutable views for the
//! duration of one analysis run.

use serde::{Deserialize, Serialize};

/// Academic identifier. Identity is all the core knows about an academic;
/// names and biographies live in excluded collaborators.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AcademicId(pub i64);

/// Degree identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DegreeId(pub i64);

/// School identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SchoolId(pub i64);

macro_rules! impl_id_conversions {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn new(value: i64) -> Self {
                    $name(value)
                }

                pub fn value(&self) -> i64 {
                    self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $name {
                fn from(v: i64) -> Self {
                    $name(v)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )*
    };
}

impl_id_conversions!(AcademicId, DegreeId, SchoolId);

/// One granted degree/dissertation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeRecord {
    pub id: DegreeId,
    pub academic: AcademicId,
    /// Year the degree was granted. `None` when the source table carries the
    /// unknown-year sentinel (any negative value).
    #[serde(default, deserialize_with = "year_from_sentinel")]
    pub year: Option<i32>,
    pub school: SchoolId,
}

impl DegreeRecord {
    /// Returns `true` if this degree carries a usable grant year.
    pub fn has_known_year(&self) -> bool {
        self.year.is_some()
    }
}

/// A degree-granting institution with its map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: SchoolId,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A directed advising relation: `advisor` supervised `advisee`'s degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviseEdge {
    pub advisor: AcademicId,
    pub advisee: AcademicId,
}

/// Negative years encode "unknown" in the source tables.
fn year_from_sentinel<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<i32>::deserialize(deserializer)?;
    Ok(raw.filter(|year| *year >= 0))
}
