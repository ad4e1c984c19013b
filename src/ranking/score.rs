//! Scoring formulas for voyage and gauntlet style rankings.

use crate::data::{CrewRecord, Skill, SkillBlock};

pub const STARBASE_BONUS_CORE: f64 = 1.15;
pub const STARBASE_BONUS_RANGE: f64 = 1.13;
pub const THIRD_SKILL_MULTIPLIER: f64 = 0.25;
/// Chroniton-equivalent weight of one faction-only ingredient.
pub const FACTION_ONLY_WEIGHT: u64 = 30;

/// Core plus average roll, both with starbase bonuses.
pub fn voyage_term(block: &SkillBlock) -> f64 {
    block.core() * STARBASE_BONUS_CORE + (block.range_sum() / 2.0) * STARBASE_BONUS_RANGE
}

/// Average roll only; gauntlets ignore core.
pub fn gauntlet_term(block: &SkillBlock) -> f64 {
    (block.range_sum() * STARBASE_BONUS_RANGE) / 2.0
}

fn skill_terms<'a>(
    crew: &'a CrewRecord,
    term: fn(&SkillBlock) -> f64,
) -> impl Iterator<Item = (Skill, f64)> + 'a {
    Skill::ALL
        .into_iter()
        .filter_map(move |skill| crew.skill(skill).map(|block| (skill, term(block))))
}

pub fn voyage_score(crew: &CrewRecord) -> f64 {
    skill_terms(crew, voyage_term).map(|(_, v)| v).sum::<f64>().ceil()
}

pub fn gauntlet_score(crew: &CrewRecord) -> f64 {
    skill_terms(crew, gauntlet_term).map(|(_, v)| v).sum::<f64>().ceil()
}

pub fn chron_cost_score(crew: &CrewRecord) -> f64 {
    (crew.total_chron_cost + crew.faction_only_total * FACTION_ONLY_WEIGHT) as f64
}

pub fn base_score(crew: &CrewRecord, skill: Skill) -> f64 {
    crew.skill(skill)
        .map_or(0.0, |block| (block.core() * STARBASE_BONUS_CORE).ceil())
}

pub fn combined_score(crew: &CrewRecord, skill: Skill) -> f64 {
    crew.skill(skill).map_or(0.0, |block| {
        (block.core() * STARBASE_BONUS_CORE + gauntlet_term(block)).ceil()
    })
}

/// Pair skills count fully, every other skill at a quarter.
pub fn pair_voyage_score(crew: &CrewRecord, first: Skill, second: Skill) -> f64 {
    let (pair, tertiary) = skill_terms(crew, voyage_term).fold(
        (0.0, 0.0),
        |(pair, tertiary), (skill, value)| {
            if skill == first || skill == second {
                (pair + value, tertiary)
            } else {
                (pair, tertiary + value)
            }
        },
    );
    (pair + tertiary * THIRD_SKILL_MULTIPLIER).ceil()
}

/// Only the pair's gauntlet terms count.
pub fn pair_gauntlet_score(crew: &CrewRecord, first: Skill, second: Skill) -> f64 {
    skill_terms(crew, gauntlet_term)
        .filter(|(skill, _)| *skill == first || *skill == second)
        .map(|(_, v)| v)
        .sum::<f64>()
        .ceil()
}
