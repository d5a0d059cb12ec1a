//! Analysis configuration file support.
//!
//! This module provides utilities for reading analysis parameters from TOML
//! configuration files: windowing defaults for the aggregation pipeline and
//! the bounding box the downstream renderer restricts its maps to.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};

/// Analysis configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub windowing: WindowingSettings,
    #[serde(default)]
    pub map: MapSettings,
}

/// Window construction settings.
///
/// Defaults are the decade aggregation used for the full-history map:
/// nine-year windows advanced by ten years over 1290–2019.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowingSettings {
    #[serde(default = "default_first_year")]
    pub first: i32,
    #[serde(default = "default_last_year")]
    pub last: i32,
    #[serde(default = "default_increment")]
    pub increment: i32,
    #[serde(default = "default_overlap_step")]
    pub overlap_step: i32,
}

impl WindowingSettings {
    /// Returns `true` when consecutive windows overlap, i.e. a year can fall
    /// into more than one window.
    pub fn overlaps(&self) -> bool {
        self.overlap_step < self.increment
    }
}

/// Bounding box for rendered maps: lower-left and upper-right corners in
/// degrees. Defaults cover the whole world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_lower_left_longitude")]
    pub lower_left_longitude: f64,
    #[serde(default = "default_lower_left_latitude")]
    pub lower_left_latitude: f64,
    #[serde(default = "default_upper_right_longitude")]
    pub upper_right_longitude: f64,
    #[serde(default = "default_upper_right_latitude")]
    pub upper_right_latitude: f64,
}

fn default_first_year() -> i32 {
    1290
}

fn default_last_year() -> i32 {
    2019
}

fn default_increment() -> i32 {
    9
}

fn default_overlap_step() -> i32 {
    10
}

fn default_lower_left_longitude() -> f64 {
    -180.0
}

fn default_lower_left_latitude() -> f64 {
    -90.0
}

fn default_upper_right_longitude() -> f64 {
    180.0
}

fn default_upper_right_latitude() -> f64 {
    90.0
}

impl Default for WindowingSettings {
    fn default() -> Self {
        Self {
            first: default_first_year(),
            last: default_last_year(),
            increment: default_increment(),
            overlap_step: default_overlap_step(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            lower_left_longitude: default_lower_left_longitude(),
            lower_left_latitude: default_lower_left_latitude(),
            upper_right_longitude: default_upper_right_longitude(),
            upper_right_latitude: default_upper_right_latitude(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            windowing: WindowingSettings::default(),
            map: MapSettings::default(),
        }
    }
}

impl AnalysisConfig {
    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string. Missing sections and fields
    /// fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> AnalysisResult<Self> {
        toml::from_str(contents)
            .map_err(|e| AnalysisError::configuration(format!("Invalid config TOML: {}", e)))
    }
}
