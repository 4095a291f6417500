//! Routing engine: ordered override rules on top of the score ranking.

use serde::{Deserialize, Serialize};

use crate::config::{FlowTrigger, RoutingRule};
use crate::domain::confidence::Confidence;
use crate::domain::foundation::Signal;

/// Fallback primary path when no path has ever been scored.
pub const FALLBACK_PRIMARY_PATH: &str = "thrive";

/// Fallback secondary path when no path has ever been scored.
pub const FALLBACK_SECONDARY_PATH: &str = "levelUp";

/// How the current primary/secondary pair was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChosenBy {
    RoutingRule,
    Recommendation,
    UserOverride,
}

/// A settled primary/secondary pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutcome {
    pub primary_path: String,
    pub secondary_path: Option<String>,
    pub chosen_by: ChosenBy,
}

/// Evaluates override rules in configured order; the first full match wins.
///
/// A rule matches when its phase guard equals the current trigger and its
/// optional band and dominant-signal guards, where present, equal the
/// current state. Returns `None` when no rule matches, in which case the
/// caller falls back to [`fallback_route`].
pub fn route(
    dominant: Signal,
    confidence: &Confidence,
    trigger: FlowTrigger,
    rules: &[RoutingRule],
) -> Option<RouteOutcome> {
    rules
        .iter()
        .find(|rule| {
            rule.when.phase == trigger
                && rule
                    .when
                    .confidence_band
                    .as_deref()
                    .map_or(true, |band| band == confidence.band)
                && rule
                    .when
                    .dominant_signal
                    .map_or(true, |signal| signal == dominant)
        })
        .map(|rule| RouteOutcome {
            primary_path: rule.then.primary_path.clone(),
            secondary_path: rule
                .then
                .secondary_path
                .clone()
                .or_else(|| confidence.runner_up.clone()),
            chosen_by: ChosenBy::RoutingRule,
        })
}

/// Score-ranked outcome when no override rule matched.
///
/// Degenerate input (no scored paths at all) falls back to fixed path ids
/// rather than erroring.
pub fn fallback_route(confidence: &Confidence) -> RouteOutcome {
    RouteOutcome {
        primary_path: confidence
            .top
            .clone()
            .unwrap_or_else(|| FALLBACK_PRIMARY_PATH.to_string()),
        secondary_path: Some(
            confidence
                .runner_up
                .clone()
                .unwrap_or_else(|| FALLBACK_SECONDARY_PATH.to_string()),
        ),
        chosen_by: ChosenBy::Recommendation,
    }
}
