//! Roster-wide outputs: skill-set statistics, the CSV table and the bot export.

pub mod bot;
pub mod csv_export;
pub mod skill_sets;

use std::collections::HashMap;

use crate::data::{CrewProfile, CrewRecord, ProfileStore};

pub use bot::{build_bot_crew, save_bot_crew, BotCrew};
pub use csv_export::{save_crew_csv, write_crew_csv};
pub use skill_sets::{sorted_skill_sets, SkillSetCount};

/// Profiles keyed by crew symbol.
pub type ProfileMap = HashMap<String, CrewProfile>;

/// Load every roster member's profile once; crew without one are left out.
pub fn load_profiles(store: &ProfileStore, roster: &[CrewRecord]) -> ProfileMap {
    roster
        .iter()
        .filter_map(|crew| store.load(&crew.symbol).map(|profile| (crew.symbol.clone(), profile)))
        .collect()
}
