use crate::model::{RegulationRule, RegulationTable, RestrictionLevel};
use crate::validate::ValidItem;

/// The 2025 sample table: Microchips (high, no tax) and Wine (moderate, 15%).
pub fn table_2025() -> RegulationTable {
    RegulationTable::new("test")
        .with_rule(
            "8542",
            RegulationRule::new("Microchips", RestrictionLevel::High).with_license_required(true),
        )
        .with_rule(
            "2204",
            RegulationRule::new("Wine", RestrictionLevel::Moderate).with_tax_rate(0.15),
        )
}

pub fn valid(index: usize, hscode: &'static str, value: f64, has_license: bool) -> ValidItem<'static> {
    ValidItem {
        index,
        hscode,
        value,
        has_license,
    }
}
