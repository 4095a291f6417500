//! Decision log: the ordered record of every answer applied.
//!
//! Rebuilt wholesale by recompute; read by the summary generator for
//! evidence narration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionSignals;

/// Which phase an answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPhase {
    Diagnostic,
    Refinement,
}

/// One applied option: what was asked, what was chosen, what it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionLogEntry {
    pub phase: AnswerPhase,
    /// The path whose refinement set the answer belongs to. Diagnostic
    /// entries carry `None`.
    pub path_id: Option<String>,
    pub question_id: String,
    pub option_id: String,
    pub prompt: String,
    pub answer_label: String,
    pub signals_applied: Option<OptionSignals>,
    pub scores_applied: Option<BTreeMap<String, i32>>,
    pub sets_applied: Option<BTreeMap<String, String>>,
}

/// Append-only ordered record of applied answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLog {
    entries: Vec<DecisionLogEntry>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: DecisionLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DecisionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `max` entries, in original chronological order.
    pub fn last_chronological(&self, max: usize) -> &[DecisionLogEntry] {
        let start = self.entries.len().saturating_sub(max);
        &self.entries[start..]
    }
}
