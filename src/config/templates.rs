//! UI strings and summary section labels, with built-in defaults.
//!
//! The whole section is optional in the document; every field falls back to
//! the defaults below so the summary generator always has a label to render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default cap on evidence bullets drawn from the decision log.
pub const DEFAULT_EVIDENCE_MAX: usize = 4;

/// Strings consumed by the rendering collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiStrings {
    /// Display labels per confidence band id; a missing entry falls back to
    /// the band id verbatim.
    pub confidence_labels: BTreeMap<String, String>,
}

/// Section labels for both summary documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarySections {
    pub respondent_heading: String,
    pub recommended_path: String,
    pub why: String,
    pub evidence: String,
    pub focus: String,
    pub experiments: String,
    pub open_question: String,
    pub supervisor_heading: String,
    pub translation: String,
    pub coaching_focus: String,
    pub watchouts: String,
    pub leader_ask: String,
    pub pressure_test: String,
    pub success_criteria: String,
    pub checkpoint: String,
    pub evidence_max: usize,
}

impl Default for SummarySections {
    fn default() -> Self {
        Self {
            respondent_heading: "Your next chapter plan".to_string(),
            recommended_path: "Recommended path".to_string(),
            why: "Why this direction".to_string(),
            evidence: "Evidence from your answers".to_string(),
            focus: "Focus statement".to_string(),
            experiments: "Selected experiments".to_string(),
            open_question: "Open question for your conversation".to_string(),
            supervisor_heading: "Coaching brief for your People Leader".to_string(),
            translation: "What this direction means".to_string(),
            coaching_focus: "Coaching focus".to_string(),
            watchouts: "Watch-outs".to_string(),
            leader_ask: "The ask".to_string(),
            pressure_test: "Pressure-test question".to_string(),
            success_criteria: "Success criteria".to_string(),
            checkpoint: "Checkpoint".to_string(),
            evidence_max: DEFAULT_EVIDENCE_MAX,
        }
    }
}

/// The `templates` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Templates {
    pub ui_strings: UiStrings,
    pub summary_sections: SummarySections,
}
