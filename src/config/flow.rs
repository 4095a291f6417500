//! Confidence bands and routing rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Signal;

/// One confidence band threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    pub id: String,
    pub min_delta: i32,
}

/// Confidence configuration: the ordered band list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSection {
    pub bands: Vec<ConfidenceBand>,
}

impl ConfidenceSection {
    /// The band with the smallest threshold, i.e. the default tier.
    pub fn lowest_band(&self) -> Option<&ConfidenceBand> {
        self.bands.iter().min_by_key(|b| b.min_delta)
    }
}

/// The flow point a routing rule fires at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowTrigger {
    DiagnosticComplete,
}

/// One conditional override rule, evaluated in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    pub when: RuleWhen,
    pub then: RuleThen,
}

/// Rule guards. Absent guards match anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleWhen {
    pub phase: FlowTrigger,
    #[serde(default)]
    pub confidence_band: Option<String>,
    #[serde(default)]
    pub dominant_signal: Option<Signal>,
}

/// Rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleThen {
    pub primary_path: String,
    #[serde(default)]
    pub secondary_path: Option<String>,
}

/// The `flow` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSection {
    #[serde(default)]
    pub routing_rules: Vec<RoutingRule>,
}
