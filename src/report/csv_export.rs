//! Flat per-crew table (crew.csv) for spreadsheet users.
//!
//! Header cells are separated by `, `, row cells by a bare comma. Numbers are
//! written bare and strings double-quoted with embedded quotes stripped; rows
//! end in CRLF. A value missing from a present descriptor is
//! written as `0`, an absent optional descriptor as an empty cell.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Number;

use crate::data::{CrewProfile, CrewRecord, Skill};
use crate::error::PipelineError;
use crate::ranking::{pair_gauntlet_metrics, pair_voyage_metrics};
use crate::report::ProfileMap;

const TRAILING_COLUMNS: &[&str] = &[
    "traits",
    "hidden_traits",
    "action_name",
    "action_bonus_type",
    "action_bonus_amount",
    "action_initial_cooldown",
    "action_duration",
    "action_cooldown",
    "bonus_ability",
    "trigger",
    "uses_per_battle",
    "penalty_type",
    "penalty_amount",
    "accuracy",
    "crit_bonus",
    "crit_chance",
    "evasion",
    "charge_phases",
    "short_name",
];

/// Rank fields behind the V_* and G_* columns, in column order.
pub fn pair_rank_fields() -> Vec<String> {
    pair_voyage_metrics()
        .iter()
        .chain(pair_gauntlet_metrics().iter())
        .map(|metric| metric.field_name())
        .collect()
}

/// Bare column names, one per cell of every row.
pub fn columns(pair_fields: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = vec!["crew".into(), "tier".into(), "rarity".into()];
    for skill in Skill::ALL {
        columns.push(format!("{skill}_core"));
        columns.push(format!("{skill}_min"));
        columns.push(format!("{skill}_max"));
    }
    columns.extend(pair_fields.iter().cloned());
    columns.extend(TRAILING_COLUMNS.iter().map(|column| column.to_string()));
    columns
}

/// Header cells as consumers key on them: `crew, tier, rarity, ...`.
fn header_record(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            if index == 0 {
                column.clone()
            } else {
                format!(" {column}")
            }
        })
        .collect()
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', ""))
}

fn number_or_zero(value: Option<&Number>) -> String {
    value.map_or_else(|| "0".to_string(), Number::to_string)
}

/// Empty for absent or zero values.
fn truthy_or_empty(value: Option<&Number>) -> String {
    match value {
        Some(number) if number.as_f64() != Some(0.0) => number.to_string(),
        _ => String::new(),
    }
}

pub fn crew_row(
    crew: &CrewRecord,
    profile: Option<&CrewProfile>,
    pair_fields: &[String],
) -> Vec<String> {
    let mut row = Vec::with_capacity(3 + 3 * Skill::ALL.len() + pair_fields.len() + TRAILING_COLUMNS.len());
    row.push(quoted(&crew.name));
    row.push(profile.map_or(0, |p| p.meta.csv_tier()).to_string());
    row.push(crew.max_rarity.to_string());

    for skill in Skill::ALL {
        match crew.skill(skill) {
            Some(block) => {
                row.push(block.core.to_string());
                row.push(block.range_min.to_string());
                row.push(block.range_max.to_string());
            }
            None => row.extend(["0", "0", "0"].map(String::from)),
        }
    }

    for field in pair_fields {
        row.push(crew.ranks.get(field).copied().unwrap_or(0).to_string());
    }

    let action = &crew.action;
    row.push(quoted(&crew.traits_named.join(", ")));
    row.push(quoted(&crew.traits_hidden.join(", ")));
    row.push(quoted(&action.name));
    row.push(number_or_zero(action.bonus_type.as_ref()));
    row.push(number_or_zero(action.bonus_amount.as_ref()));
    row.push(number_or_zero(action.initial_cooldown.as_ref()));
    row.push(number_or_zero(action.duration.as_ref()));
    row.push(number_or_zero(action.cooldown.as_ref()));

    match &action.ability {
        Some(ability) => {
            row.push(number_or_zero(ability.ability_type.as_ref()));
            row.push(number_or_zero(ability.condition.as_ref()));
        }
        None => row.extend([String::new(), String::new()]),
    }
    row.push(truthy_or_empty(action.limit.as_ref()));
    match &action.penalty {
        Some(penalty) => {
            row.push(number_or_zero(penalty.penalty_type.as_ref()));
            row.push(number_or_zero(penalty.amount.as_ref()));
        }
        None => row.extend([String::new(), String::new()]),
    }

    let ship = &crew.ship_battle;
    row.push(truthy_or_empty(ship.accuracy.as_ref()));
    row.push(truthy_or_empty(ship.crit_bonus.as_ref()));
    row.push(truthy_or_empty(ship.crit_chance.as_ref()));
    row.push(truthy_or_empty(ship.evasion.as_ref()));
    row.push(action.charge_phases.is_some().to_string());
    row.push(quoted(&crew.short_name));
    row
}

pub fn write_crew_csv<W: io::Write>(
    writer: W,
    roster: &[CrewRecord],
    profiles: &ProfileMap,
) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    let pair_fields = pair_rank_fields();
    writer.write_record(header_record(&columns(&pair_fields)))?;
    for crew in roster {
        writer.write_record(crew_row(crew, profiles.get(&crew.symbol), &pair_fields))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_crew_csv(
    path: &Path,
    roster: &[CrewRecord],
    profiles: &ProfileMap,
) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::write(path, source))?;
    write_crew_csv(file, roster, profiles).map_err(|source| PipelineError::csv(path, source))
}
