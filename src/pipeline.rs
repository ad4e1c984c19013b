//! Stage ordering for a full recomputation.
//!
//! `precalculate` enriches crew.json and writes the statistics and CSV;
//! `export_bot_crew` reads the enriched catalog back and writes the bot export.

use serde::Serialize;
use tracing::info;

use crate::config::PipelineConfig;
use crate::data::registry::{load_registry, record, save_registry};
use crate::data::{load_crew, load_items, save_crew, write_json, CrewRecord, ItemIndex, ProfileStore};
use crate::demand::apply_crew_demands;
use crate::error::PipelineError;
use crate::ranking::run_battery;
use crate::report::{build_bot_crew, load_profiles, save_bot_crew, save_crew_csv, sorted_skill_sets};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrecalcSummary {
    pub crew: usize,
    pub items: usize,
    pub skill_sets: usize,
    pub profiles: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BotExportSummary {
    pub records: usize,
    pub skipped: usize,
    pub mirrored: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub precalc: PrecalcSummary,
    pub bot: BotExportSummary,
}

/// Derive cost totals, then every rank. Totals must exist before ranking.
pub fn enrich_roster(roster: &mut [CrewRecord], items: &ItemIndex) {
    apply_crew_demands(roster, items);
    run_battery(roster);
}

pub fn precalculate(config: &PipelineConfig) -> Result<PrecalcSummary, PipelineError> {
    let mut roster = load_crew(config.crew_path())?;
    let items = ItemIndex::new(load_items(config.items_path())?);
    info!(crew = roster.len(), items = items.len(), "catalogs loaded");

    enrich_roster(&mut roster, &items);
    save_crew(config.crew_path(), &roster)?;

    let skill_sets = sorted_skill_sets(&roster);
    write_json(&config.skill_sets_path(), &skill_sets)?;

    let profiles = load_profiles(&ProfileStore::new(&config.profiles_dir), &roster);
    save_crew_csv(&config.crew_csv_path(), &roster, &profiles)?;

    let mut registry = load_registry(&config.registry_path());
    record(&mut registry, "crew", &config.crew_path());
    record(&mut registry, "sorted_skill_sets", &config.skill_sets_path());
    record(&mut registry, "crew_csv", &config.crew_csv_path());
    save_registry(&config.registry_path(), &registry)?;

    let summary = PrecalcSummary {
        crew: roster.len(),
        items: items.len(),
        skill_sets: skill_sets.len(),
        profiles: profiles.len(),
    };
    info!(?summary, "precalculation complete");
    Ok(summary)
}

pub fn export_bot_crew(config: &PipelineConfig) -> Result<BotExportSummary, PipelineError> {
    let roster = load_crew(config.crew_path())?;
    let profiles = load_profiles(&ProfileStore::new(&config.profiles_dir), &roster);
    let records = build_bot_crew(&roster, &profiles);
    let mirrored = save_bot_crew(&config.bot_crew_path(), config.bot_mirror_path(), &records)?;

    let mut registry = load_registry(&config.registry_path());
    record(&mut registry, "bot_crew", &config.bot_crew_path());
    save_registry(&config.registry_path(), &registry)?;

    let summary = BotExportSummary {
        records: records.len(),
        skipped: roster.len() - records.len(),
        mirrored,
    };
    info!(?summary, "bot export complete");
    Ok(summary)
}

pub fn run(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    let precalc = precalculate(config)?;
    let bot = export_bot_crew(config)?;
    Ok(RunSummary { precalc, bot })
}
