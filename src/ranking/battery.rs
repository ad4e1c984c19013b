use tracing::debug;

use crate::data::{CrewRecord, Skill};
use crate::ranking::engine::rank_by;
use crate::ranking::score::{
    base_score, chron_cost_score, combined_score, gauntlet_score, pair_gauntlet_score,
    pair_voyage_score, voyage_score,
};

/// One ranked metric and the field it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Voyage,
    Gauntlet,
    ChronCost,
    Base(Skill),
    Combined(Skill),
    PairVoyage(Skill, Skill),
    PairGauntlet(Skill, Skill),
}

impl Metric {
    pub fn field_name(&self) -> String {
        match self {
            Self::Voyage => "voyRank".to_string(),
            Self::Gauntlet => "gauntletRank".to_string(),
            Self::ChronCost => "chronCostRank".to_string(),
            Self::Base(skill) => format!("B_{skill}"),
            Self::Combined(skill) => format!("A_{skill}"),
            Self::PairVoyage(first, second) => format!("V_{first}_{second}"),
            Self::PairGauntlet(first, second) => format!("G_{first}_{second}"),
        }
    }

    pub fn score(&self, crew: &CrewRecord) -> f64 {
        match *self {
            Self::Voyage => voyage_score(crew),
            Self::Gauntlet => gauntlet_score(crew),
            Self::ChronCost => chron_cost_score(crew),
            Self::Base(skill) => base_score(crew, skill),
            Self::Combined(skill) => combined_score(crew, skill),
            Self::PairVoyage(first, second) => pair_voyage_score(crew, first, second),
            Self::PairGauntlet(first, second) => pair_gauntlet_score(crew, first, second),
        }
    }
}

/// Pair-voyage metrics in export column order.
pub fn pair_voyage_metrics() -> Vec<Metric> {
    Skill::pairs()
        .into_iter()
        .map(|(first, second)| Metric::PairVoyage(first, second))
        .collect()
}

/// Pair-gauntlet metrics in export column order.
pub fn pair_gauntlet_metrics() -> Vec<Metric> {
    Skill::pairs()
        .into_iter()
        .map(|(first, second)| Metric::PairGauntlet(first, second))
        .collect()
}

/// The full battery in ranking order.
pub fn all_metrics() -> Vec<Metric> {
    let mut metrics = vec![Metric::Voyage, Metric::Gauntlet, Metric::ChronCost];
    for skill in Skill::ALL {
        metrics.push(Metric::Base(skill));
        metrics.push(Metric::Combined(skill));
    }
    for (first, second) in Skill::pairs() {
        metrics.push(Metric::PairVoyage(first, second));
        metrics.push(Metric::PairGauntlet(first, second));
    }
    metrics
}

/// Clear previous ranks and rank the roster on every metric.
/// Demand totals must already be written, the chron cost rank reads them.
pub fn run_battery(roster: &mut [CrewRecord]) {
    for crew in roster.iter_mut() {
        crew.ranks.clear();
    }
    let metrics = all_metrics();
    for metric in &metrics {
        rank_by(roster, &metric.field_name(), |crew| Some(metric.score(crew)));
    }
    debug!(metrics = metrics.len(), crew = roster.len(), "ranking battery complete");
}
