use logishield_domain::model::{RegulationRule, RegulationTable, RestrictionLevel};

pub const DEFAULT_PROFILE: &str = "default";

/// Preset regulation tables.
///
/// Keep these small and readable. Anything site-specific should go into repo config.
pub fn preset(profile: &str) -> Option<RegulationTable> {
    match profile {
        "default" => Some(default_profile()),
        "electronics" => Some(electronics_profile()),
        "empty" => Some(RegulationTable::new("empty")),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &["default", "electronics", "empty"]
}

fn default_profile() -> RegulationTable {
    RegulationTable::new("default")
        .with_rule(
            "8542",
            RegulationRule::new("Microchips", RestrictionLevel::High).with_license_required(true),
        )
        .with_rule(
            "2204",
            RegulationRule::new("Wine", RestrictionLevel::Moderate).with_tax_rate(0.15),
        )
}

fn electronics_profile() -> RegulationTable {
    default_profile()
        .with_profile("electronics")
        .with_rule(
            "8506",
            RegulationRule::new("Lithium Batteries", RestrictionLevel::High)
                .with_license_required(true),
        )
        .with_rule(
            "8471",
            RegulationRule::new("Computers", RestrictionLevel::None).with_tax_rate(0.0),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_preset_resolves() {
        for name in preset_names() {
            let table = preset(name).expect("preset");
            assert_eq!(table.profile(), *name);
        }
        assert!(preset("nope").is_none());
    }

    #[test]
    fn default_preset_is_the_sample_table() {
        let table = preset(DEFAULT_PROFILE).expect("preset");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("8542").map(|r| r.restriction),
            Some(RestrictionLevel::High)
        );
        assert_eq!(table.get("2204").and_then(|r| r.tax_rate), Some(0.15));
    }

    #[test]
    fn electronics_extends_default() {
        let table = preset("electronics").expect("preset");
        assert_eq!(table.len(), 4);
        assert!(table.get("2204").is_some());
        assert_eq!(
            table.get("8506").map(|r| r.name.as_str()),
            Some("Lithium Batteries")
        );
    }
}
