use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RestrictionLevel {
    None,
    Moderate,
    High,
}

impl RestrictionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionLevel::None => "none",
            RestrictionLevel::Moderate => "moderate",
            RestrictionLevel::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegulationRule {
    /// Display name of the regulated goods (e.g. "Microchips").
    pub name: String,
    pub restriction: RestrictionLevel,
    /// Fraction of declared value owed as duty, in `[0, 1]`.
    pub tax_rate: Option<f64>,
    /// Descriptive only; the license check keys off `restriction`.
    pub license_required: Option<bool>,
}

impl RegulationRule {
    pub fn new(name: impl Into<String>, restriction: RestrictionLevel) -> Self {
        Self {
            name: name.into(),
            restriction,
            tax_rate: None,
            license_required: None,
        }
    }

    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    pub fn with_license_required(mut self, required: bool) -> Self {
        self.license_required = Some(required);
        self
    }
}

/// Classification code -> rule. Built once, then only shared by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegulationTable {
    profile: String,
    rules: BTreeMap<String, RegulationRule>,
}

impl RegulationTable {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            rules: BTreeMap::new(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_rule(mut self, code: impl Into<String>, rule: RegulationRule) -> Self {
        self.insert(code, rule);
        self
    }

    /// Insert or replace the rule for `code`.
    pub fn insert(&mut self, code: impl Into<String>, rule: RegulationRule) {
        self.rules.insert(code.into(), rule);
    }

    pub fn get(&self, code: &str) -> Option<&RegulationRule> {
        self.rules.get(code)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegulationRule)> {
        self.rules.iter().map(|(code, rule)| (code.as_str(), rule))
    }
}

/// Declared value as supplied by the loader: a JSON number, or spreadsheet-style text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredValue {
    Number(f64),
    Text(String),
    Other(JsonValue),
}

impl From<f64> for DeclaredValue {
    fn from(v: f64) -> Self {
        DeclaredValue::Number(v)
    }
}

/// Classification code as supplied. Integer codes (spreadsheet exports) arrive as text;
/// any other JSON type is kept so validation can name the item and field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeclaredCode {
    Text(String),
    Other(JsonValue),
}

impl DeclaredCode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DeclaredCode::Text(code) => Some(code),
            DeclaredCode::Other(_) => None,
        }
    }
}

impl From<&str> for DeclaredCode {
    fn from(code: &str) -> Self {
        DeclaredCode::Text(code.to_string())
    }
}

impl From<String> for DeclaredCode {
    fn from(code: String) -> Self {
        DeclaredCode::Text(code)
    }
}

impl<'de> Deserialize<'de> for DeclaredCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCode {
            Text(String),
            Integer(u64),
            Other(JsonValue),
        }

        Ok(match RawCode::deserialize(deserializer)? {
            RawCode::Text(s) => DeclaredCode::Text(s),
            RawCode::Integer(n) => DeclaredCode::Text(n.to_string()),
            RawCode::Other(v) => DeclaredCode::Other(v),
        })
    }
}

/// License-present flag as supplied: a JSON boolean, or anything else for validation to reject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredFlag {
    Bool(bool),
    Other(JsonValue),
}

impl From<bool> for DeclaredFlag {
    fn from(flag: bool) -> Self {
        DeclaredFlag::Bool(flag)
    }
}

/// One shipment line item. Fields are optional here; validation decides what is required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestItem {
    #[serde(
        default,
        alias = "HS_Code",
        alias = "code",
        skip_serializing_if = "Option::is_none"
    )]
    pub hscode: Option<DeclaredCode>,

    #[serde(default, alias = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<DeclaredValue>,

    #[serde(default, alias = "license", skip_serializing_if = "Option::is_none")]
    pub has_license: Option<DeclaredFlag>,
}

impl ManifestItem {
    pub fn new(hscode: impl Into<String>, value: f64) -> Self {
        Self {
            hscode: Some(DeclaredCode::Text(hscode.into())),
            value: Some(DeclaredValue::Number(value)),
            has_license: None,
        }
    }

    pub fn with_license(mut self, has_license: bool) -> Self {
        self.has_license = Some(DeclaredFlag::Bool(has_license));
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub items: Vec<ManifestItem>,
}
