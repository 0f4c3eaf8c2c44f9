use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `logishield.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LogishieldConfigV1 {
    /// Optional schema string for tooling (`logishield.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Built-in regulation preset to start from (`default`, `electronics`, `empty`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Merge `rules` over the preset (default) or replace the preset entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend_profile: Option<bool>,

    /// Map of classification code -> rule.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Display name of the regulated goods.
    pub name: String,

    /// `none`, `moderate`, or `high`.
    pub restriction: String,

    /// Fraction of declared value owed as duty, in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_required: Option<bool>,
}
