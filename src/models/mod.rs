//! Domain types: table records, time windows, and coordinate keys.

pub mod geo;
pub mod records;
pub mod window;

pub use geo::*;
pub use records::*;
pub use window::*;
