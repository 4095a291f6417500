//! Summary logic: why-evidence templates and intent translation rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Signal;

/// Default cap on why-evidence bullets.
pub const DEFAULT_WHY_MAX_BULLETS: usize = 3;

/// Why-evidence configuration: one phrase per core signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyEvidence {
    #[serde(default)]
    pub templates: BTreeMap<Signal, String>,
    #[serde(default)]
    pub max_bullets: Option<usize>,
}

impl WhyEvidence {
    /// Effective bullet cap.
    pub fn max_bullets(&self) -> usize {
        self.max_bullets.unwrap_or(DEFAULT_WHY_MAX_BULLETS)
    }
}

/// Supervisor-facing content attached to a matched rule, or the fallback.
///
/// Every field is optional; absent fields resolve to generic defaults at
/// translation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationContent {
    #[serde(default)]
    pub coaching_focus: Option<Vec<String>>,
    #[serde(default)]
    pub watchouts: Option<Vec<String>>,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub leader_ask: Option<String>,
    #[serde(default)]
    pub pressure_test: Option<String>,
    #[serde(default)]
    pub success_criteria: Option<Vec<String>>,
    #[serde(default)]
    pub checkpoint_days: Option<u32>,
}

/// Guards for one intent translation rule.
///
/// Version conditions are equality checks against the primary path's
/// declared version fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRuleWhen {
    pub primary_path: String,
    #[serde(default)]
    pub version: BTreeMap<String, String>,
}

/// One intent translation rule, evaluated in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub when: IntentRuleWhen,
    pub then: TranslationContent,
}

/// The `summaryLogic` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLogic {
    #[serde(default)]
    pub why_evidence: WhyEvidence,
    #[serde(default)]
    pub intent_translation_rules: Vec<IntentRule>,
    #[serde(default)]
    pub fallback_intent_translation: TranslationContent,
}
