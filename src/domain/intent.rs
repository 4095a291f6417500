//! Path intent and the per-path version store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::routing::{ChosenBy, RouteOutcome};

/// Structured record of refinement answers for one path.
///
/// Fields are the flat, per-path declared set from the configuration;
/// nested assignments use dotted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    fields: BTreeMap<String, String>,
}

impl VersionRecord {
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Per-path version records.
///
/// Records are created lazily on first write and never deleted, so a path
/// revisited after a switch still carries its earlier answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStore {
    records: BTreeMap<String, VersionRecord>,
}

impl VersionStore {
    pub fn record(&self, path_id: &str) -> Option<&VersionRecord> {
        self.records.get(path_id)
    }

    pub fn record_mut(&mut self, path_id: &str) -> &mut VersionRecord {
        self.records.entry(path_id.to_string()).or_default()
    }

    /// Writes a batch of field assignments into a path's record.
    pub fn apply_sets(&mut self, path_id: &str, sets: &BTreeMap<String, String>) {
        let record = self.record_mut(path_id);
        for (field, value) in sets {
            record.set(field.clone(), value.clone());
        }
    }
}

/// The settled primary/secondary pair and how it was chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathIntent {
    pub primary_path: Option<String>,
    pub secondary_path: Option<String>,
    pub chosen_by: Option<ChosenBy>,
}

impl PathIntent {
    /// Adopts a routing outcome.
    pub fn adopt(&mut self, outcome: RouteOutcome) {
        self.primary_path = Some(outcome.primary_path);
        self.secondary_path = outcome.secondary_path;
        self.chosen_by = Some(outcome.chosen_by);
    }
}
