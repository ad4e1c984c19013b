use std::collections::HashSet;
use std::fmt;

use crate::data::{CrewRecord, ItemIndex};
use crate::demand::cost::{is_chroniton_source, source_estimate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn with_severity(
        &self,
        severity: ValidationSeverity,
    ) -> impl Iterator<Item = &ValidationDiagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.severity == severity)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.with_severity(severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.with_severity(ValidationSeverity::Error).next().is_some()
    }
}

/// One-line tally, e.g. `2 error(s), 1 warning(s), 0 info`.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s), {} info",
            self.count(ValidationSeverity::Error),
            self.count(ValidationSeverity::Warning),
            self.count(ValidationSeverity::Info)
        )
    }
}

/// Cross-check both catalogs without running the pipeline.
pub fn validate_catalogs(crew: &[CrewRecord], items: &ItemIndex) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_items(&mut report, items);
    validate_crew(&mut report, crew, items);
    report
}

fn validate_items(report: &mut ValidationReport, items: &ItemIndex) {
    let mut seen = HashSet::new();
    for (index, item) in items.items().iter().enumerate() {
        let context = format!("items[{index}] symbol='{}'", item.symbol);
        if !seen.insert(item.symbol.as_str()) {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                "duplicate item symbol",
            );
        }

        if item.is_orphaned() {
            report.push(
                ValidationSeverity::Warning,
                context.clone(),
                "equipment with no recipe and no sources",
            );
        }

        if let Some(recipe) = &item.recipe {
            for (slot, ingredient) in recipe.list.iter().enumerate() {
                if items.get(&ingredient.symbol).is_none() {
                    report.push(
                        ValidationSeverity::Error,
                        format!("{context}.recipe.list[{slot}]"),
                        format!("unknown ingredient '{}'", ingredient.symbol),
                    );
                }
            }
        }

        let scored: Vec<_> = item
            .item_sources
            .iter()
            .enumerate()
            .filter(|(_, source)| is_chroniton_source(source))
            .collect();
        for (source_index, source) in &scored {
            if source.cost.unwrap_or(0.0) == 0.0 {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.item_sources[{source_index}]"),
                    "mission source has no cost",
                );
            }
        }
        if !scored.is_empty() && scored.iter().all(|(_, source)| source_estimate(source).is_none()) {
            report.push(
                ValidationSeverity::Warning,
                context,
                "no source yields a chroniton estimate",
            );
        }
    }
}

fn validate_crew(report: &mut ValidationReport, crew: &[CrewRecord], items: &ItemIndex) {
    let mut seen = HashSet::new();
    for (index, member) in crew.iter().enumerate() {
        let context = format!("crew[{index}] symbol='{}'", member.symbol);
        if !seen.insert(member.symbol.as_str()) {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                "duplicate crew symbol",
            );
        }

        for (slot_index, slot) in member.equipment_slots.iter().enumerate() {
            if items.get(&slot.symbol).is_none() {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.equipment_slots[{slot_index}]"),
                    format!("unknown equipment '{}'", slot.symbol),
                );
            }
        }

        if member.base_skills.is_empty() {
            report.push(
                ValidationSeverity::Info,
                context,
                "crew has no base skills and will not be ranked on skills",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemRecord;

    fn items() -> ItemIndex {
        let items: Vec<ItemRecord> = serde_json::from_str(
            r#"[
                {"symbol": "phaser", "recipe": {"craftCost": 1, "list": [
                    {"symbol": "wire", "count": 1},
                    {"symbol": "ghost", "count": 1}
                ]}},
                {"symbol": "wire", "item_sources": [{"type": 0, "chance_grade": 3}]},
                {"symbol": "lens"},
                {"symbol": "lens", "item_sources": [{"type": 1, "cost": 8}]}
            ]"#,
        )
        .unwrap();
        ItemIndex::new(items)
    }

    fn crew() -> Vec<CrewRecord> {
        serde_json::from_value(serde_json::json!([
            {"symbol": "a", "name": "A", "max_rarity": 1, "equipment_slots": [{"symbol": "phaser"}, {"symbol": "padd"}]},
            {"symbol": "a", "name": "A again", "max_rarity": 1}
        ]))
        .unwrap()
    }

    fn messages(report: &ValidationReport, severity: ValidationSeverity) -> Vec<String> {
        report
            .with_severity(severity)
            .map(|diag| diag.message.clone())
            .collect()
    }

    #[test]
    fn reports_reference_and_consistency_problems() {
        let report = validate_catalogs(&crew(), &items());
        assert!(report.has_errors());

        let errors = messages(&report, ValidationSeverity::Error);
        assert!(errors.contains(&"unknown ingredient 'ghost'".to_string()));
        assert!(errors.contains(&"duplicate item symbol".to_string()));
        assert!(errors.contains(&"unknown equipment 'padd'".to_string()));
        assert!(errors.contains(&"duplicate crew symbol".to_string()));

        let warnings = messages(&report, ValidationSeverity::Warning);
        assert_eq!(
            warnings,
            [
                "mission source has no cost",
                "no source yields a chroniton estimate",
                "equipment with no recipe and no sources",
            ]
        );
        assert_eq!(report.count(ValidationSeverity::Info), 2);
        assert_eq!(report.to_string(), "4 error(s), 3 warning(s), 2 info");
        assert!(report.diagnostics[0]
            .to_string()
            .starts_with("[error] items[0] symbol='phaser'.recipe.list[1]: unknown ingredient 'ghost'"));
    }

    #[test]
    fn clean_catalogs_have_no_errors() {
        let items = ItemIndex::new(
            serde_json::from_str(r#"[{"symbol": "wire", "item_sources": [{"type": 2, "cost": 4, "chance_grade": 5}]}]"#)
                .unwrap(),
        );
        let crew: Vec<CrewRecord> = serde_json::from_value(serde_json::json!([{
            "symbol": "b", "name": "B", "max_rarity": 2,
            "equipment_slots": [{"symbol": "wire"}],
            "base_skills": {"security_skill": {"core": 1, "range_min": 1, "range_max": 2}}
        }]))
        .unwrap();
        let report = validate_catalogs(&crew, &items);
        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    }
}
