//! # MGI Rust Backend
//!
//! Academic genealogy analysis engine.
//!
//! This crate analyzes a genealogy of academic degrees (advisor→advisee
//! relationships, degrees granted by schools with known location and year)
//! and derives the views a presentation layer plots: time-windowed,
//! geographically keyed degree counts for world maps, and full
//! ancestor/descendant lineages in the advising graph.
//!
//! ## Features
//!
//! - **Data Loading**: Parse genealogy tables from JSON format
//! - **Time Windowing**: Partition year ranges into (possibly overlapping) windows
//!   and bucket dated degrees into them
//! - **Aggregation**: Per-window per-school and per-location degree counts,
//!   with join-gap auditing and cumulative totals
//! - **Lineage**: Cycle-safe ancestor/descendant closure over the advising graph
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public types for downstream consumers
//! - [`models`]: Record, window and coordinate types
//! - [`dataset`]: In-memory genealogy tables and the JSON parser
//! - [`algorithms`]: Graph traversal over the advising edge set
//! - [`services`]: High-level analysis and visualization services

pub mod algorithms;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod services;
