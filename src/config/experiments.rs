//! Experiment library and selection rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default number of experiments pre-selected for a path.
pub const DEFAULT_PICK_COUNT: usize = 2;

/// Default cap on manually selected experiments.
pub const DEFAULT_MAX_PICK_COUNT: usize = 3;

/// One experiment in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSpec {
    pub id: String,
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub timeframe: String,
}

/// Suggestion lists and pick-count bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRules {
    #[serde(default)]
    pub suggestions_by_path: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub default_pick_count: Option<usize>,
    #[serde(default)]
    pub max_pick_count: Option<usize>,
}

impl SelectionRules {
    /// Effective default pick count.
    pub fn default_pick_count(&self) -> usize {
        self.default_pick_count.unwrap_or(DEFAULT_PICK_COUNT)
    }

    /// Effective selection cap.
    pub fn max_pick_count(&self) -> usize {
        self.max_pick_count.unwrap_or(DEFAULT_MAX_PICK_COUNT)
    }
}

/// The `experiments` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentsSection {
    #[serde(default)]
    pub library: Vec<ExperimentSpec>,
    #[serde(default)]
    pub selection_rules: SelectionRules,
}
