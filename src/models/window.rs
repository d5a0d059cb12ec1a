//! Time window type used to bucket dated records.

use serde::{Deserialize, Serialize};

/// Half-open year interval `[start, end)`.
///
/// Windows are identified by their `(start, end)` pair and used as map keys;
/// equal pairs are equal windows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    /// Create a new window covering `[start, end)`.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `year` falls inside this window.
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year < self.end
    }

    /// Window width in years.
    pub fn width(&self) -> i32 {
        self.end - self.start
    }
}

impl std::fmt::Display for YearWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
