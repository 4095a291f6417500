//! Phase enum for tracking the questionnaire lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a questionnaire session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Intro,
    Diagnostic,
    Recommendation,
    Refinement,
    Planning,
    Summary,
}

impl Phase {
    /// Validates a transition from this phase to another.
    ///
    /// Forward: Intro -> Diagnostic -> Recommendation -> Refinement ->
    /// Planning -> Summary. Backward navigation steps one phase at a time.
    pub fn can_transition_to(&self, target: &Phase) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            (Intro, Diagnostic)
                | (Diagnostic, Recommendation)
                | (Recommendation, Diagnostic)
                | (Recommendation, Refinement)
                | (Refinement, Recommendation)
                | (Refinement, Planning)
                | (Planning, Refinement)
                | (Planning, Summary)
                | (Summary, Planning)
        )
    }

    /// True while the phase accepts question answers.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Phase::Diagnostic | Phase::Refinement)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Intro => "intro",
            Phase::Diagnostic => "diagnostic",
            Phase::Recommendation => "recommendation",
            Phase::Refinement => "refinement",
            Phase::Planning => "planning",
            Phase::Summary => "summary",
        };
        write!(f, "{}", s)
    }
}
