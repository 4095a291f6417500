//! Confidence classification from the score gap between the top two paths.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ConfidenceBand;
use crate::domain::scoring::PathScoreTable;

/// Band id used when the configuration carries no usable band list.
/// The loader rejects an empty list, so this only backstops direct calls.
const DEFAULT_BAND_ID: &str = "early";

/// Qualitative read on how clearly one path leads the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    pub band: String,
    pub delta: i32,
    pub top: Option<String>,
    pub runner_up: Option<String>,
    pub label: String,
}

impl Default for Confidence {
    fn default() -> Self {
        Self {
            band: DEFAULT_BAND_ID.to_string(),
            delta: 0,
            top: None,
            runner_up: None,
            label: DEFAULT_BAND_ID.to_string(),
        }
    }
}

/// Classifies the current score table into a confidence band.
///
/// Bands are evaluated by descending threshold; the first band whose
/// `minDelta` does not exceed the observed delta wins, and the lowest band
/// acts as the catch-all. The display label falls back to the band id when
/// no label is configured.
pub fn classify(
    scores: &PathScoreTable,
    bands: &[ConfidenceBand],
    labels: &BTreeMap<String, String>,
) -> Confidence {
    let (top, runner_up) = scores.top_two();
    let delta = match (top, runner_up) {
        (Some(t), Some(r)) => t.score - r.score,
        _ => 0,
    };

    let mut sorted: Vec<&ConfidenceBand> = bands.iter().collect();
    sorted.sort_by(|a, b| b.min_delta.cmp(&a.min_delta));
    let band = sorted
        .iter()
        .find(|b| b.min_delta <= delta)
        .or_else(|| sorted.last())
        .map(|b| b.id.as_str())
        .unwrap_or(DEFAULT_BAND_ID);

    let label = labels.get(band).cloned().unwrap_or_else(|| band.to_string());

    Confidence {
        band: band.to_string(),
        delta,
        top: top.map(|t| t.path_id.clone()),
        runner_up: runner_up.map(|r| r.path_id.clone()),
        label,
    }
}
