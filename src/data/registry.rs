//! Run manifest: one entry per artifact the pipeline wrote, so consumers can
//! show "data as of".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::write_json;
use crate::error::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetEntry {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub path: String,
}

pub type Registry = BTreeMap<String, DataSetEntry>;

pub const REGISTRY_FILE: &str = "registry.json";
pub const REGISTRY_SOURCE: &str = "datacore precalculate";

/// Today's date in the format stored under `last_updated`.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub fn record(registry: &mut Registry, name: &str, path: &Path) {
    registry.insert(
        name.to_string(),
        DataSetEntry {
            source: REGISTRY_SOURCE.to_string(),
            last_updated: Some(today()),
            path: path.display().to_string(),
        },
    );
}

/// Previous manifest, or an empty one if the file is missing or invalid.
pub fn load_registry(path: &Path) -> Registry {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_registry(path: &Path, registry: &Registry) -> Result<(), PipelineError> {
    write_json(path, registry)
}
