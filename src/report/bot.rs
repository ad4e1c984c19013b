//! Reduced crew records for the chat bot (botcrew.json).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::data::{write_json, CrewProfile, CrewRecord, Events, Skill, SkillBlock};
use crate::error::PipelineError;
use crate::report::ProfileMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotCrew {
    pub name: String,
    pub short_name: String,
    pub traits_named: Vec<String>,
    pub traits_hidden: Vec<String>,
    #[serde(rename = "imageUrlPortrait", skip_serializing_if = "Option::is_none")]
    pub image_url_portrait: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Value>,
    #[serde(rename = "totalChronCost")]
    pub total_chron_cost: u64,
    #[serde(rename = "factionOnlyTotal")]
    pub faction_only_total: u64,
    #[serde(rename = "craftCost")]
    pub craft_cost: u64,
    pub symbol: String,
    pub max_rarity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigbook_tier: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Events>,
    pub ranks: BTreeMap<String, u32>,
    pub base_skills: BTreeMap<Skill, SkillBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_data: Option<Value>,
    pub in_portal: bool,
    #[serde(rename = "markdownContent")]
    pub markdown_content: String,
}

impl BotCrew {
    pub fn new(crew: &CrewRecord, profile: &CrewProfile) -> Self {
        Self {
            name: crew.name.clone(),
            short_name: crew.short_name.clone(),
            traits_named: crew.traits_named.clone(),
            traits_hidden: crew.traits_hidden.clone(),
            image_url_portrait: crew.extra_field("imageUrlPortrait").cloned(),
            collections: crew.extra_field("collections").cloned(),
            total_chron_cost: crew.total_chron_cost,
            faction_only_total: crew.faction_only_total,
            craft_cost: crew.craft_cost,
            symbol: crew.symbol.clone(),
            max_rarity: crew.max_rarity,
            bigbook_tier: profile.meta.bigbook_tier,
            events: profile.meta.events.clone(),
            ranks: crew.ranks.clone(),
            base_skills: crew.base_skills.clone(),
            skill_data: crew.extra_field("skill_data").cloned(),
            in_portal: profile.meta.in_portal(),
            markdown_content: profile.content.clone(),
        }
    }
}

/// One record per crew that has a profile, in roster order.
pub fn build_bot_crew(roster: &[CrewRecord], profiles: &ProfileMap) -> Vec<BotCrew> {
    roster
        .iter()
        .filter_map(|crew| match profiles.get(&crew.symbol) {
            Some(profile) => Some(BotCrew::new(crew, profile)),
            None => {
                info!(symbol = %crew.symbol, name = %crew.name, "crew profile not found, skipped in bot export");
                None
            }
        })
        .collect()
}

/// Write the bot export and mirror it when a mirror file already exists.
/// Returns whether the mirror was written.
pub fn save_bot_crew(
    path: &Path,
    mirror: Option<&Path>,
    records: &[BotCrew],
) -> Result<bool, PipelineError> {
    write_json(path, records)?;
    let Some(mirror) = mirror else {
        return Ok(false);
    };
    if !mirror.exists() {
        return Ok(false);
    }
    match write_json(mirror, records) {
        Ok(()) => Ok(true),
        Err(err) => {
            warn!(path = %mirror.display(), "failed to mirror bot export: {err}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProfileMeta;

    fn roster() -> Vec<CrewRecord> {
        serde_json::from_value(serde_json::json!([
            {
                "symbol": "data_tng",
                "name": "Data",
                "short_name": "Data",
                "max_rarity": 4,
                "imageUrlPortrait": "data.png",
                "collections": ["Androids"],
                "skill_data": [{"rarity": 1}],
                "ranks": {"voyRank": 8}
            },
            {"symbol": "lore_tng", "name": "Lore", "max_rarity": 4}
        ]))
        .unwrap()
    }

    fn profiles() -> ProfileMap {
        let mut profiles = ProfileMap::new();
        profiles.insert(
            "data_tng".to_string(),
            CrewProfile {
                meta: ProfileMeta {
                    bigbook_tier: Some(6),
                    events: Some(Events::Count(3)),
                    in_portal: Some(true),
                },
                content: "Fully functional.".to_string(),
            },
        );
        profiles
    }

    #[test]
    fn crew_without_profiles_are_skipped() {
        let records = build_bot_crew(&roster(), &profiles());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "data_tng");
        assert_eq!(records[0].ranks.get("voyRank"), Some(&8));
    }

    #[test]
    fn serialized_record_uses_consumer_field_names() {
        let records = build_bot_crew(&roster(), &profiles());
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["imageUrlPortrait"], "data.png");
        assert_eq!(json["collections"][0], "Androids");
        assert_eq!(json["bigbook_tier"], 6);
        assert_eq!(json["events"], 3);
        assert_eq!(json["in_portal"], true);
        assert_eq!(json["markdownContent"], "Fully functional.");
        assert_eq!(json["totalChronCost"], 0);
    }

    #[test]
    fn absent_passthrough_fields_are_omitted() {
        let roster = roster();
        let profile = CrewProfile {
            meta: ProfileMeta::default(),
            content: String::new(),
        };
        let json = serde_json::to_value(BotCrew::new(&roster[1], &profile)).unwrap();
        let record = json.as_object().unwrap();
        for key in ["imageUrlPortrait", "collections", "bigbook_tier", "events", "skill_data"] {
            assert!(!record.contains_key(key), "{key} should be omitted");
        }
        assert_eq!(json["in_portal"], false);
        assert_eq!(json["symbol"], "lore_tng");
    }

    #[test]
    fn mirror_is_written_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("botcrew.json");
        let mirror = dir.path().join("mirror.json");
        let records = build_bot_crew(&roster(), &profiles());

        assert!(!save_bot_crew(&primary, Some(&mirror), &records).unwrap());
        assert!(primary.exists());
        assert!(!mirror.exists());

        std::fs::write(&mirror, "[]").unwrap();
        assert!(save_bot_crew(&primary, Some(&mirror), &records).unwrap());
        let mirrored: Value = serde_json::from_str(&std::fs::read_to_string(&mirror).unwrap()).unwrap();
        assert_eq!(mirrored[0]["symbol"], "data_tng");
    }
}
