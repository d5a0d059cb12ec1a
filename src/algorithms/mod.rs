//! Graph algorithms over the advising edge set.

pub mod closure;

pub use closure::{AdvisingGraph, Direction};
