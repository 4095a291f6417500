//! Question and option shapes shared by the diagnostic and refinement phases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionSignals;

/// Default selection cap for multi-choice questions that do not set one.
pub const DEFAULT_MULTI_SELECT_CAP: usize = 2;

/// How many options a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuestionKind {
    #[default]
    #[serde(rename = "single")]
    SingleChoice,
    #[serde(rename = "multi")]
    MultiChoice,
}

/// One question in either phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default, rename = "type")]
    pub kind: QuestionKind,
    /// Selection cap for multi-choice questions.
    #[serde(default)]
    pub max_selections: Option<usize>,
    pub options: Vec<ChoiceOption>,
}

impl Question {
    /// Effective selection cap: 1 for single-choice, configured or default
    /// for multi-choice.
    pub fn selection_cap(&self) -> usize {
        match self.kind {
            QuestionKind::SingleChoice => 1,
            QuestionKind::MultiChoice => {
                self.max_selections.unwrap_or(DEFAULT_MULTI_SELECT_CAP)
            }
        }
    }

    /// Looks up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Options in presentation order; unordered entries sort last, ties keep
    /// document order.
    pub fn ordered_options(&self) -> Vec<&ChoiceOption> {
        let mut out: Vec<&ChoiceOption> = self.options.iter().collect();
        out.sort_by_key(|o| o.order.unwrap_or(u32::MAX));
        out
    }
}

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
    /// Additive signal deltas and last-write-wins scale observations.
    #[serde(default)]
    pub signals: Option<OptionSignals>,
    /// Additive per-path score deltas. Diagnostic only.
    #[serde(default)]
    pub path_scores: Option<BTreeMap<String, i32>>,
    /// Version-record field assignments. Refinement only.
    #[serde(default)]
    pub sets: Option<BTreeMap<String, String>>,
    /// Presentation ordering.
    #[serde(default)]
    pub order: Option<u32>,
}
