use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::CrewRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSetCount {
    pub name: String,
    pub value: u32,
}

/// Sorted, dot-joined skill codes, for crew whose skill set is tallied.
pub fn skill_set_name(crew: &CrewRecord) -> Option<String> {
    if !matches!(crew.max_rarity, 4 | 5) || crew.base_skills.len() != 3 {
        return None;
    }
    let mut codes: Vec<&str> = crew.base_skills.keys().map(|skill| skill.code()).collect();
    codes.sort_unstable();
    Some(codes.join("."))
}

/// Frequency of three-skill combinations among 4 and 5 star crew, rarest first.
/// Equal counts keep the order in which the combination was first seen.
pub fn sorted_skill_sets(roster: &[CrewRecord]) -> Vec<SkillSetCount> {
    let mut counts: Vec<SkillSetCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for name in roster.iter().filter_map(skill_set_name) {
        match positions.get(&name) {
            Some(&index) => counts[index].value += 1,
            None => {
                positions.insert(name.clone(), counts.len());
                counts.push(SkillSetCount { name, value: 1 });
            }
        }
    }

    counts.sort_by_key(|entry| entry.value);
    counts
}
