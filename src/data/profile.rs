//! Per-crew profile documents: `<profiles_dir>/<symbol>.md`, a YAML metadata
//! block fenced by `---` lines followed by a markdown body.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use tracing::{info, warn};

/// `events` is a count in most profiles and a list of event names in a few.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Events {
    Count(u32),
    Names(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileMeta {
    pub bigbook_tier: Option<i64>,
    pub events: Option<Events>,
    pub in_portal: Option<bool>,
}

impl ProfileMeta {
    /// Read each known key on its own. A value that does not fit is dropped
    /// with a warning and the remaining keys are still used.
    pub fn from_front_matter(header: &YamlValue) -> Self {
        Self {
            bigbook_tier: read_field(header, "bigbook_tier", |value| match value {
                YamlValue::Number(number) => number
                    .as_i64()
                    .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
                YamlValue::String(raw) => raw.trim().parse().ok(),
                _ => None,
            }),
            events: read_field(header, "events", |value| {
                serde_yaml::from_value(value.clone()).ok()
            }),
            in_portal: read_field(header, "in_portal", |value| match value {
                YamlValue::Bool(flag) => Some(*flag),
                YamlValue::String(raw) => raw.trim().parse().ok(),
                _ => None,
            }),
        }
    }

    /// Tier for tabular exports: only real tiers (1..20) count, everything else is 0.
    pub fn csv_tier(&self) -> i64 {
        match self.bigbook_tier {
            Some(tier) if tier != 0 && tier < 20 => tier,
            _ => 0,
        }
    }

    pub fn in_portal(&self) -> bool {
        self.in_portal.unwrap_or(false)
    }
}

fn read_field<T>(
    header: &YamlValue,
    key: &str,
    read: impl Fn(&YamlValue) -> Option<T>,
) -> Option<T> {
    let value = header.get(key).filter(|value| !value.is_null())?;
    let parsed = read(value);
    if parsed.is_none() {
        warn!(field = key, "ignoring unreadable profile metadata value");
    }
    parsed
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrewProfile {
    pub meta: ProfileMeta,
    pub content: String,
}

/// Split a document into its metadata block and trimmed body.
/// Documents without a leading `---` fence have no metadata.
fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix("---") else {
        return (None, raw.trim());
    };
    let rest = rest.trim_start_matches(|c| c == '\r' || c == '\n');
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(header), body.trim());
        }
        offset += line.len();
    }
    (None, raw.trim())
}

pub fn parse_profile(raw: &str) -> Result<CrewProfile, serde_yaml::Error> {
    let (header, body) = split_front_matter(raw);
    let meta = match header {
        Some(header) if !header.trim().is_empty() => {
            ProfileMeta::from_front_matter(&serde_yaml::from_str::<YamlValue>(header)?)
        }
        _ => ProfileMeta::default(),
    };
    Ok(CrewProfile {
        meta,
        content: body.to_string(),
    })
}

/// Directory of profile documents keyed by crew symbol.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.md"))
    }

    /// Missing documents yield `None`. A metadata block that is not valid YAML
    /// keeps the body and falls back to empty metadata.
    pub fn load(&self, symbol: &str) -> Option<CrewProfile> {
        let path = self.path_for(symbol);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                info!(symbol, path = %path.display(), "crew profile not found: {err}");
                return None;
            }
        };
        match parse_profile(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(symbol, path = %path.display(), "invalid profile metadata: {err}");
                let (_, body) = split_front_matter(&raw);
                Some(CrewProfile {
                    meta: ProfileMeta::default(),
                    content: body.to_string(),
                })
            }
        }
    }
}
