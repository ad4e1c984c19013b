pub mod crew;
pub mod item;
pub mod profile;
pub mod registry;
pub mod validate;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::PipelineError;

pub use crew::{load_crew, save_crew, CrewRecord, Skill, SkillBlock};
pub use item::{load_items, ItemIndex, ItemRecord, ItemSource, SourceKind};
pub use profile::{CrewProfile, Events, ProfileMeta, ProfileStore};

/// Serialize `value` as compact JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let serialized =
        serde_json::to_string(value).map_err(|source| PipelineError::serialize(path, source))?;
    fs::write(path, serialized).map_err(|source| PipelineError::write(path, source))
}
