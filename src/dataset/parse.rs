// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// String-based parsing for the genealogy tables. The excluded loading
// collaborator is expected to hand the raw JSON to `parse_dataset_json_str`;
// no file paths or storage formats appear in this crate.

use anyhow::{Context, Result};

use super::GenealogyDataset;
use crate::models::{AdviseEdge, DegreeRecord, SchoolRecord};

#[derive(serde::Deserialize)]
struct DatasetInput {
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub degrees: Vec<DegreeRecord>,
    #[serde(default)]
    pub schools: Vec<SchoolRecord>,
    #[serde(default)]
    pub advises: Vec<AdviseEdge>,
}

fn validate_input_dataset(dataset_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(dataset_json).context("Invalid dataset JSON")?;
    let obj = value.as_object();
    if !obj.is_some_and(|o| o.contains_key("degrees")) {
        anyhow::bail!("Missing required 'degrees' field");
    }
    if !obj.is_some_and(|o| o.contains_key("schools")) {
        anyhow::bail!("Missing required 'schools' field");
    }
    Ok(())
}

/// Parse genealogy tables from a JSON string.
///
/// Expects an object with `degrees`, `schools`, and optional `advises`
/// arrays. Negative degree years deserialize as unknown. A checksum over the
/// raw input is computed when the input does not carry one.
pub fn parse_dataset_json_str(dataset_json: &str) -> Result<GenealogyDataset> {
    validate_input_dataset(dataset_json)?;

    let input: DatasetInput = serde_json::from_str(dataset_json)
        .context("Failed to deserialize dataset JSON using Serde")?;

    let checksum = if input.checksum.is_empty() {
        compute_dataset_checksum(dataset_json)
    } else {
        input.checksum
    };

    Ok(GenealogyDataset::new(input.degrees, input.schools, input.advises).with_checksum(checksum))
}

/// Compute a checksum for the dataset JSON
fn compute_dataset_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================
