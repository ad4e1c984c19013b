//! Item catalog: equipment, recipes and acquisition sources. Read-only here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    StoryMission,
    FactionMission,
    ShipBattle,
    Other(i64),
}

impl From<i64> for SourceKind {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::StoryMission,
            1 => Self::FactionMission,
            2 => Self::ShipBattle,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemSource {
    #[serde(rename = "type")]
    pub source_type: i64,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub avg_cost: Option<f64>,
    #[serde(default)]
    pub chance_grade: Option<f64>,
}

impl ItemSource {
    pub fn kind(&self) -> SourceKind {
        SourceKind::from(self.source_type)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeIngredient {
    pub symbol: String,
    pub count: u32,
    #[serde(rename = "factionOnly", default)]
    pub faction_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    #[serde(rename = "craftCost", default)]
    pub craft_cost: u64,
    #[serde(default)]
    pub list: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub item_sources: Vec<ItemSource>,
}

impl ItemRecord {
    /// Neither craftable nor obtainable: a catalog consistency problem.
    pub fn is_orphaned(&self) -> bool {
        self.recipe.is_none() && self.item_sources.is_empty()
    }
}

/// Symbol lookup over the item catalog, built once per run.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: Vec<ItemRecord>,
    by_symbol: HashMap<String, usize>,
}

impl ItemIndex {
    /// First entry wins when a symbol repeats.
    pub fn new(items: Vec<ItemRecord>) -> Self {
        let mut by_symbol = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            by_symbol.entry(item.symbol.clone()).or_insert(index);
        }
        Self { items, by_symbol }
    }

    pub fn get(&self, symbol: &str) -> Option<&ItemRecord> {
        self.by_symbol.get(symbol).map(|&index| &self.items[index])
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<ItemRecord>, PipelineError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::read(path, source))?;
    serde_json::from_str(&raw).map_err(|source| PipelineError::parse(path, source))
}
