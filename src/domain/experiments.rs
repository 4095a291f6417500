//! Experiment selection: configured defaults plus bounded manual toggling.

use serde::{Deserialize, Serialize};

use crate::config::{ExperimentSpec, SelectionRules};

/// Resolves a path's configured suggestions against the library.
///
/// Unresolvable suggestion ids are skipped silently; the result is
/// truncated to the default pick count.
pub fn select_defaults<'a>(
    path_id: &str,
    library: &'a [ExperimentSpec],
    rules: &SelectionRules,
) -> Vec<&'a ExperimentSpec> {
    let ids = rules
        .suggestions_by_path
        .get(path_id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    ids.iter()
        .filter_map(|id| library.iter().find(|e| &e.id == id))
        .take(rules.default_pick_count())
        .collect()
}

/// Manually curated experiment selection, bounded by the configured cap.
///
/// Insertion order is preserved; it is the order experiments appear in the
/// plan and summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSelection {
    selected: Vec<ExperimentSpec>,
    max: usize,
}

impl PlanSelection {
    pub fn new(max: usize) -> Self {
        Self {
            selected: Vec::new(),
            max,
        }
    }

    /// Starts from a default selection, truncated to the cap.
    pub fn seeded(mut defaults: Vec<ExperimentSpec>, max: usize) -> Self {
        defaults.truncate(max);
        Self {
            selected: defaults,
            max,
        }
    }

    /// Toggles an experiment: a selected id is removed, an unselected one is
    /// added unless the selection is at the cap, in which case nothing
    /// changes. Returns whether the selection changed.
    pub fn toggle(&mut self, experiment: &ExperimentSpec) -> bool {
        if let Some(pos) = self.selected.iter().position(|e| e.id == experiment.id) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() < self.max {
            self.selected.push(experiment.clone());
            return true;
        }
        false
    }

    pub fn selected(&self) -> &[ExperimentSpec] {
        &self.selected
    }

    /// Label of the first selected experiment, if any.
    pub fn first_label(&self) -> Option<&str> {
        self.selected.first().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn library() -> Vec<ExperimentSpec> {
        serde_json::from_value(json!([
            {"id": "e1", "path": "levelUp", "label": "Lead a small initiative", "timeframe": "4 weeks"},
            {"id": "e2", "path": "levelUp", "label": "Own a gnarly fix", "timeframe": "2 weeks"},
            {"id": "e3", "path": "levelUp", "label": "Mentor a newer colleague", "timeframe": "6 weeks"}
        ]))
        .unwrap()
    }

    fn rules(value: serde_json::Value) -> SelectionRules {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn defaults_resolve_and_truncate() {
        let library = library();
        let rules = rules(json!({
            "suggestionsByPath": {"levelUp": ["e2", "e1", "e3"]},
            "defaultPickCount": 2
        }));

        let picked = select_defaults("levelUp", &library, &rules);
        let ids: Vec<&str> = picked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1"]);
    }

    #[test]
    fn unresolvable_suggestions_are_skipped() {
        let library = library();
        let rules = rules(json!({
            "suggestionsByPath": {"levelUp": ["ghost", "e3"]},
            "defaultPickCount": 2
        }));

        let picked = select_defaults("levelUp", &library, &rules);
        let ids: Vec<&str> = picked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3"]);
    }

    #[test]
    fn unknown_path_yields_empty_defaults() {
        let library = library();
        let rules = SelectionRules::default();
        assert!(select_defaults("reset", &library, &rules).is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let library = library();
        let mut selection = PlanSelection::new(3);

        assert!(selection.toggle(&library[0]));
        assert_eq!(selection.len(), 1);

        assert!(selection.toggle(&library[0]));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_at_cap_is_a_no_op() {
        let library = library();
        let mut selection = PlanSelection::new(2);
        selection.toggle(&library[0]);
        selection.toggle(&library[1]);

        assert!(!selection.toggle(&library[2]));
        let ids: Vec<&str> = selection.selected().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn removing_below_cap_allows_adding_again() {
        let library = library();
        let mut selection = PlanSelection::new(2);
        selection.toggle(&library[0]);
        selection.toggle(&library[1]);
        selection.toggle(&library[0]); // remove e1

        assert!(selection.toggle(&library[2]));
        let ids: Vec<&str> = selection.selected().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e3"]);
    }

    #[test]
    fn seeded_selection_respects_cap() {
        let selection = PlanSelection::seeded(library(), 2);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.first_label(), Some("Lead a small initiative"));
    }
}
