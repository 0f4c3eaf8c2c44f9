//! Resolution tracking: which flagged rows a reviewer has signed off.
//!
//! This is presentation-layer state. The engine never reads it.

use anyhow::Context;
use logishield_types::Finding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item index -> resolved flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionLedger {
    #[serde(default)]
    resolved: BTreeMap<usize, bool>,
}

impl ResolutionLedger {
    /// Parse a ledger file. Empty input yields an empty ledger.
    pub fn parse_json(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).context("parse resolution ledger")
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("serialize resolution ledger")?;
        json.push('\n');
        Ok(json)
    }

    pub fn mark_resolved(&mut self, item_index: usize) {
        self.resolved.insert(item_index, true);
    }

    pub fn reopen(&mut self, item_index: usize) {
        self.resolved.insert(item_index, false);
    }

    pub fn is_resolved(&self, item_index: usize) -> bool {
        self.resolved.get(&item_index).copied().unwrap_or(false)
    }

    /// Whether a finding is covered by a resolution. Tool-level findings never are.
    pub fn covers(&self, finding: &Finding) -> bool {
        finding.item_index.is_some_and(|i| self.is_resolved(i))
    }

    pub fn outstanding<'a>(&self, findings: &'a [Finding]) -> Vec<&'a Finding> {
        findings.iter().filter(|f| !self.covers(f)).collect()
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.values().filter(|r| **r).count()
    }
}
