//! Focus statement builder: closed-slot template rendering.

use crate::config::FocusBuilder;
use crate::domain::experiments::PlanSelection;
use crate::domain::intent::VersionRecord;

/// Slot for the path-specific descriptor fragment.
pub const SLOT_DESCRIPTOR: &str = "descriptor";

/// Slot for the first selected experiment's label.
pub const SLOT_EXPERIMENT: &str = "experiment";

/// The closed set of slots a focus template may use. Anything else is a
/// load-time integrity error.
pub const KNOWN_SLOTS: &[&str] = &[SLOT_DESCRIPTOR, SLOT_EXPERIMENT];

/// Descriptor used when a path has no descriptor map configured at all.
pub const DEFAULT_DESCRIPTOR_PHRASE: &str = "meaningful progress in this direction";

/// Experiment phrase used when nothing is selected.
pub const DEFAULT_EXPERIMENT_PHRASE: &str = "one meaningful stretch experiment";

/// Extracts `{slot}` names from a template.
///
/// Only simple identifiers count as slots; stray braces are treated as
/// literal text.
pub fn template_slots(template: &str) -> Vec<String> {
    let mut slots = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    slots.push(name.to_string());
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    slots
}

fn render_slots(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in slots {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

/// Builds the one-sentence statement of intent for the chosen path.
///
/// The descriptor resolves through the path's declared discriminant field:
/// configured value match first, then the map's default phrase, then a fixed
/// generic phrase when the path has no descriptor map. The experiment slot
/// takes the first selected experiment's label, or a generic phrase when
/// nothing is selected.
pub fn build_focus_statement(
    path_id: &str,
    version: Option<&VersionRecord>,
    selection: &PlanSelection,
    builder: &FocusBuilder,
) -> String {
    let template = builder
        .templates
        .get(path_id)
        .map(String::as_str)
        .unwrap_or("");

    let descriptor = match builder.descriptors.get(path_id) {
        Some(map) => version
            .and_then(|v| v.get(&map.field))
            .and_then(|value| map.by.get(value))
            .cloned()
            .unwrap_or_else(|| map.default.clone()),
        None => DEFAULT_DESCRIPTOR_PHRASE.to_string(),
    };
    let experiment = selection.first_label().unwrap_or(DEFAULT_EXPERIMENT_PHRASE);

    render_slots(
        template,
        &[
            (SLOT_DESCRIPTOR, descriptor.as_str()),
            (SLOT_EXPERIMENT, experiment),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExperimentSpec;
    use serde_json::json;

    fn builder() -> FocusBuilder {
        serde_json::from_value(json!({
            "templates": {
                "levelUp": "Over the next chapter I want to grow toward {descriptor}, starting with {experiment}."
            },
            "descriptors": {
                "levelUp": {
                    "field": "levelUpType",
                    "by": {"craft": "deeper technical mastery"},
                    "default": "greater responsibility and impact"
                }
            }
        }))
        .unwrap()
    }

    fn selection_with(label: &str) -> PlanSelection {
        let spec = ExperimentSpec {
            id: "e1".to_string(),
            path: "levelUp".to_string(),
            label: label.to_string(),
            timeframe: String::new(),
        };
        PlanSelection::seeded(vec![spec], 3)
    }

    #[test]
    fn resolves_descriptor_and_experiment() {
        let mut version = VersionRecord::default();
        version.set("levelUpType", "craft");

        let statement = build_focus_statement(
            "levelUp",
            Some(&version),
            &selection_with("Lead a small initiative"),
            &builder(),
        );

        assert_eq!(
            statement,
            "Over the next chapter I want to grow toward deeper technical mastery, starting with Lead a small initiative."
        );
    }

    #[test]
    fn missing_discriminant_uses_configured_default() {
        let statement = build_focus_statement(
            "levelUp",
            None,
            &selection_with("Lead a small initiative"),
            &builder(),
        );
        assert!(statement.contains("greater responsibility and impact"));
    }

    #[test]
    fn unrecognized_discriminant_uses_configured_default() {
        let mut version = VersionRecord::default();
        version.set("levelUpType", "mystery");

        let statement = build_focus_statement(
            "levelUp",
            Some(&version),
            &selection_with("X"),
            &builder(),
        );
        assert!(statement.contains("greater responsibility and impact"));
    }

    #[test]
    fn no_selection_uses_generic_experiment_phrase() {
        let statement = build_focus_statement(
            "levelUp",
            None,
            &PlanSelection::new(3),
            &builder(),
        );
        assert!(statement.contains(DEFAULT_EXPERIMENT_PHRASE));
    }

    #[test]
    fn path_without_descriptor_map_uses_generic_phrase() {
        let builder: FocusBuilder = serde_json::from_value(json!({
            "templates": {"reset": "I want to rebuild {descriptor}."}
        }))
        .unwrap();

        let statement =
            build_focus_statement("reset", None, &PlanSelection::new(3), &builder);
        assert_eq!(
            statement,
            format!("I want to rebuild {}.", DEFAULT_DESCRIPTOR_PHRASE)
        );
    }

    #[test]
    fn template_slots_finds_identifiers_only() {
        assert_eq!(
            template_slots("grow {descriptor} via {experiment}"),
            vec!["descriptor", "experiment"]
        );
        assert_eq!(template_slots("literal {not a slot} text"), Vec::<String>::new());
        assert_eq!(template_slots("no slots"), Vec::<String>::new());
        assert_eq!(template_slots("dangling {brace"), Vec::<String>::new());
    }

    #[test]
    fn unconfigured_path_renders_empty() {
        let statement =
            build_focus_statement("ghost", None, &PlanSelection::new(3), &builder());
        assert_eq!(statement, "");
    }
}
