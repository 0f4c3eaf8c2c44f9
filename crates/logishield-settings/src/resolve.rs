use crate::{model::LogishieldConfigV1, model::RuleConfig, presets};
use anyhow::Context;
use logishield_domain::model::{RegulationRule, RegulationTable, RestrictionLevel};
use logishield_types::SCHEMA_CONFIG_V1;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub table: RegulationTable,
}

pub fn resolve_config(
    cfg: LogishieldConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut table = if cfg.extend_profile.unwrap_or(true) {
        presets::preset(&profile).with_context(|| {
            format!(
                "unknown profile: {profile} (expected one of: {})",
                presets::preset_names().join(", ")
            )
        })?
    } else {
        RegulationTable::new(profile)
    };

    for (code, rc) in cfg.rules.iter() {
        let rule = parse_rule(code, rc).with_context(|| format!("invalid rule for {code}"))?;
        table.insert(code.trim(), rule);
    }

    Ok(ResolvedConfig { table })
}

fn parse_rule(code: &str, rc: &RuleConfig) -> anyhow::Result<RegulationRule> {
    if code.trim().is_empty() {
        anyhow::bail!("classification code must not be empty");
    }
    if rc.name.trim().is_empty() {
        anyhow::bail!("rule name must not be empty");
    }

    let mut rule = RegulationRule::new(rc.name.trim(), parse_restriction(&rc.restriction)?);
    if let Some(rate) = rc.tax_rate {
        rule = rule.with_tax_rate(parse_tax_rate(rate)?);
    }
    rule.license_required = rc.license_required;
    Ok(rule)
}

fn parse_restriction(v: &str) -> anyhow::Result<RestrictionLevel> {
    match v.to_ascii_lowercase().as_str() {
        "none" => Ok(RestrictionLevel::None),
        "moderate" => Ok(RestrictionLevel::Moderate),
        "high" => Ok(RestrictionLevel::High),
        _ => anyhow::bail!("unknown restriction: {v} (expected none|moderate|high)"),
    }
}

fn parse_tax_rate(rate: f64) -> anyhow::Result<f64> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        anyhow::bail!("tax_rate must be a fraction in [0, 1], got {rate}");
    }
    Ok(rate)
}
