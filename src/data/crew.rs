//! Crew catalog records. Fields this crate does not compute are carried through
//! `extra` so a rewrite of crew.json preserves them.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::data::write_json;
use crate::error::PipelineError;

/// The six skill categories, in catalog-declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "command_skill")]
    Command,
    #[serde(rename = "science_skill")]
    Science,
    #[serde(rename = "security_skill")]
    Security,
    #[serde(rename = "engineering_skill")]
    Engineering,
    #[serde(rename = "diplomacy_skill")]
    Diplomacy,
    #[serde(rename = "medicine_skill")]
    Medicine,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Command,
        Skill::Science,
        Skill::Security,
        Skill::Engineering,
        Skill::Diplomacy,
        Skill::Medicine,
    ];

    /// Three-letter code used in rank field names and CSV headers.
    pub fn code(self) -> &'static str {
        match self {
            Self::Command => "CMD",
            Self::Science => "SCI",
            Self::Security => "SEC",
            Self::Engineering => "ENG",
            Self::Diplomacy => "DIP",
            Self::Medicine => "MED",
        }
    }

    /// Every unordered pair, `i` ascending then `j > i`.
    pub fn pairs() -> Vec<(Skill, Skill)> {
        let mut pairs = Vec::with_capacity(15);
        for i in 0..Self::ALL.len() - 1 {
            for j in i + 1..Self::ALL.len() {
                pairs.push((Self::ALL[i], Self::ALL[j]));
            }
        }
        pairs
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBlock {
    pub core: u32,
    pub range_min: u32,
    pub range_max: u32,
}

impl SkillBlock {
    pub fn core(&self) -> f64 {
        f64::from(self.core)
    }

    /// `range_min + range_max`, kept unhalved so callers control rounding order.
    pub fn range_sum(&self) -> f64 {
        f64::from(self.range_min) + f64::from(self.range_max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSlot {
    #[serde(default)]
    pub level: u32,
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionAbility {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ability_type: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPenalty {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub penalty_type: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Battle-station ability descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewAction {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_type: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_amount: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_cooldown: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<ActionAbility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<ActionPenalty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_phases: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipBattle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_bonus: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_chance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evasion: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewRecord {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    pub max_rarity: u8,
    #[serde(default)]
    pub base_skills: BTreeMap<Skill, SkillBlock>,
    #[serde(default)]
    pub equipment_slots: Vec<EquipmentSlot>,
    #[serde(default)]
    pub traits_named: Vec<String>,
    #[serde(default)]
    pub traits_hidden: Vec<String>,
    #[serde(default)]
    pub action: CrewAction,
    #[serde(default)]
    pub ship_battle: ShipBattle,
    #[serde(rename = "totalChronCost", default)]
    pub total_chron_cost: u64,
    #[serde(rename = "factionOnlyTotal", default)]
    pub faction_only_total: u64,
    #[serde(rename = "craftCost", default)]
    pub craft_cost: u64,
    #[serde(default)]
    pub ranks: BTreeMap<String, u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CrewRecord {
    pub fn skill(&self, skill: Skill) -> Option<&SkillBlock> {
        self.base_skills.get(&skill)
    }

    /// Passthrough field not modelled by this crate (e.g. `imageUrlPortrait`).
    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

pub fn load_crew(path: impl AsRef<Path>) -> Result<Vec<CrewRecord>, PipelineError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::read(path, source))?;
    serde_json::from_str(&raw).map_err(|source| PipelineError::parse(path, source))
}

/// Rewrites the full catalog as compact JSON.
pub fn save_crew(path: impl AsRef<Path>, crew: &[CrewRecord]) -> Result<(), PipelineError> {
    write_json(path.as_ref(), crew)
}
