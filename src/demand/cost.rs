use tracing::{debug, warn};

use crate::data::{ItemRecord, ItemSource, SourceKind};

/// Retry overhead applied to a mission's base cost.
pub const RNGESUS: f64 = 1.8;
/// Grades run 0..=5; the multiplier is `6 - grade`.
const CHANCE_GRADE_CEILING: f64 = 6.0;

/// Faction-only sources are priced separately via the faction-only total.
pub fn is_chroniton_source(source: &ItemSource) -> bool {
    matches!(source.kind(), SourceKind::StoryMission | SourceKind::ShipBattle)
}

/// Estimate for one source, or `None` when the source has no measurable cost.
pub fn source_estimate(source: &ItemSource) -> Option<f64> {
    let cost = source.cost.filter(|cost| *cost != 0.0)?;
    if let Some(avg_cost) = source.avg_cost.filter(|avg| *avg != 0.0) {
        return Some(avg_cost.max(0.0));
    }
    let grade = source.chance_grade.unwrap_or(0.0);
    Some(((CHANCE_GRADE_CEILING - grade) * RNGESUS * cost).max(0.0))
}

/// Cheapest chroniton estimate across an item's story and ship battle sources.
/// Returns 0 when the item has no such sources or none of them is measurable.
pub fn estimate_chroniton_cost(equipment: &ItemRecord) -> f64 {
    let mut sources = equipment
        .item_sources
        .iter()
        .filter(|source| is_chroniton_source(source))
        .peekable();
    if sources.peek().is_none() {
        return 0.0;
    }

    let mut cheapest: Option<f64> = None;
    for source in sources {
        match source_estimate(source) {
            Some(estimate) => {
                cheapest = Some(cheapest.map_or(estimate, |best| best.min(estimate)));
            }
            None => debug!(
                symbol = %equipment.symbol,
                source_type = source.source_type,
                "mission information not available"
            ),
        }
    }

    cheapest.unwrap_or_else(|| {
        warn!(symbol = %equipment.symbol, "could not calculate cost for equipment");
        0.0
    })
}
