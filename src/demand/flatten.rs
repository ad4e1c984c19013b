use std::collections::HashMap;

use tracing::warn;

use crate::data::{CrewRecord, ItemIndex, ItemRecord};
use crate::demand::cost::estimate_chroniton_cost;

/// Total requirement for one ingredient across all of a crew's equipment slots.
#[derive(Debug, Clone)]
pub struct Demand<'a> {
    pub symbol: String,
    pub count: u32,
    /// `None` when the ingredient symbol is missing from the item catalog.
    pub equipment: Option<&'a ItemRecord>,
    pub faction_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CrewDemands<'a> {
    pub craft_cost: u64,
    /// One entry per ingredient symbol, in first-seen order.
    pub demands: Vec<Demand<'a>>,
    pub faction_only_total: u64,
    pub total_chron_cost: u64,
}

/// Flatten a crew's equipment one recipe level deep.
///
/// Slot equipment without a recipe is a base item and contributes nothing;
/// ingredients are never decomposed further.
pub fn calculate_crew_demands<'a>(crew: &CrewRecord, items: &'a ItemIndex) -> CrewDemands<'a> {
    let mut craft_cost = 0u64;
    let mut demands: Vec<Demand<'a>> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for slot in &crew.equipment_slots {
        let Some(equipment) = items.get(&slot.symbol) else {
            warn!(crew = %crew.symbol, symbol = %slot.symbol, "equipment slot not found in item catalog");
            continue;
        };
        let Some(recipe) = &equipment.recipe else {
            continue;
        };

        for ingredient in &recipe.list {
            if let Some(&index) = seen.get(ingredient.symbol.as_str()) {
                demands[index].count += ingredient.count;
                continue;
            }

            let resolved = items.get(&ingredient.symbol);
            match resolved {
                Some(item) if item.is_orphaned() => {
                    warn!(symbol = %item.symbol, "equipment with no recipe and no sources");
                }
                None => {
                    warn!(crew = %crew.symbol, symbol = %ingredient.symbol, "recipe ingredient not found in item catalog");
                }
                _ => {}
            }

            seen.insert(ingredient.symbol.as_str(), demands.len());
            demands.push(Demand {
                symbol: ingredient.symbol.clone(),
                count: ingredient.count,
                equipment: resolved,
                faction_only: ingredient.faction_only,
            });
        }

        craft_cost += recipe.craft_cost;
    }

    let faction_only_total = demands
        .iter()
        .filter(|demand| demand.faction_only)
        .map(|demand| u64::from(demand.count))
        .sum();

    let chron_cost: f64 = demands
        .iter()
        .filter_map(|demand| demand.equipment)
        .map(estimate_chroniton_cost)
        .sum();

    CrewDemands {
        craft_cost,
        demands,
        faction_only_total,
        total_chron_cost: chron_cost.floor() as u64,
    }
}

/// Compute and store the derived cost totals on every crew record.
pub fn apply_crew_demands(roster: &mut [CrewRecord], items: &ItemIndex) {
    for crew in roster.iter_mut() {
        let totals = calculate_crew_demands(crew, items);
        crew.total_chron_cost = totals.total_chron_cost;
        crew.faction_only_total = totals.faction_only_total;
        crew.craft_cost = totals.craft_cost;
    }
}
