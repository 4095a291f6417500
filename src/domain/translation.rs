//! Intent translation: path + version into supervisor-facing coaching content.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{IntentRule, TranslationContent};
use crate::domain::intent::VersionRecord;

/// Checkpoint horizon used when a rule leaves it unset.
pub const DEFAULT_CHECKPOINT_DAYS: u32 = 30;

/// Generic narrative sentence.
pub const GENERIC_TRANSLATION: &str =
    "They are testing a direction and want coaching, not a verdict.";

/// Generic leader ask.
pub const GENERIC_LEADER_ASK: &str =
    "Ask what support would make the first experiment easier to start.";

/// Generic pressure-test question.
pub const GENERIC_PRESSURE_TEST: &str =
    "What evidence would tell you this direction is the wrong one?";

static GENERIC_COACHING_FOCUS: Lazy<Vec<String>> = Lazy::new(|| {
    vec!["Help them name what visible progress looks like in the next month.".to_string()]
});

static GENERIC_WATCHOUTS: Lazy<Vec<String>> = Lazy::new(|| {
    vec!["Watch for commitments made to please rather than to learn.".to_string()]
});

static GENERIC_SUCCESS_CRITERIA: Lazy<Vec<String>> = Lazy::new(|| {
    vec!["The first experiment has a scheduled start and a scheduled review.".to_string()]
});

/// Fully resolved coaching content; every field has a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub coaching_focus: Vec<String>,
    pub watchouts: Vec<String>,
    pub translation: String,
    pub leader_ask: String,
    pub pressure_test: String,
    pub success_criteria: Vec<String>,
    pub checkpoint_days: u32,
}

impl TranslationResult {
    /// Resolves configured content, filling each absent field with its
    /// generic default independently.
    pub fn from_content(content: &TranslationContent) -> Self {
        Self {
            coaching_focus: content
                .coaching_focus
                .clone()
                .unwrap_or_else(|| GENERIC_COACHING_FOCUS.clone()),
            watchouts: content
                .watchouts
                .clone()
                .unwrap_or_else(|| GENERIC_WATCHOUTS.clone()),
            translation: content
                .translation
                .clone()
                .unwrap_or_else(|| GENERIC_TRANSLATION.to_string()),
            leader_ask: content
                .leader_ask
                .clone()
                .unwrap_or_else(|| GENERIC_LEADER_ASK.to_string()),
            pressure_test: content
                .pressure_test
                .clone()
                .unwrap_or_else(|| GENERIC_PRESSURE_TEST.to_string()),
            success_criteria: content
                .success_criteria
                .clone()
                .unwrap_or_else(|| GENERIC_SUCCESS_CRITERIA.clone()),
            checkpoint_days: content.checkpoint_days.unwrap_or(DEFAULT_CHECKPOINT_DAYS),
        }
    }
}

/// Evaluates rules in order; the first rule whose path guard and every
/// version condition hold wins. No match returns the fallback content.
pub fn translate(
    primary_path: &str,
    version: Option<&VersionRecord>,
    rules: &[IntentRule],
    fallback: &TranslationContent,
) -> TranslationResult {
    let matched = rules.iter().find(|rule| {
        rule.when.primary_path == primary_path
            && rule.when.version.iter().all(|(field, expected)| {
                version.and_then(|v| v.get(field)) == Some(expected.as_str())
            })
    });
    TranslationResult::from_content(matched.map(|r| &r.then).unwrap_or(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules() -> Vec<IntentRule> {
        serde_json::from_value(json!([
            {
                "when": {"primaryPath": "levelUp", "version": {"levelUpType": "craft"}},
                "then": {
                    "translation": "They want to deepen the craft, not collect scope.",
                    "coachingFocus": ["Protect focused time."],
                    "checkpointDays": 21
                }
            },
            {
                "when": {"primaryPath": "levelUp"},
                "then": {"translation": "They want to grow where they stand."}
            }
        ]))
        .unwrap()
    }

    fn version(field: &str, value: &str) -> VersionRecord {
        let mut record = VersionRecord::default();
        record.set(field, value);
        record
    }

    #[test]
    fn first_full_match_wins() {
        let version = version("levelUpType", "craft");
        let result = translate("levelUp", Some(&version), &rules(), &TranslationContent::default());

        assert_eq!(result.translation, "They want to deepen the craft, not collect scope.");
        assert_eq!(result.checkpoint_days, 21);
    }

    #[test]
    fn unmet_version_condition_falls_through_to_later_rule() {
        let version = version("levelUpType", "visibility");
        let result = translate("levelUp", Some(&version), &rules(), &TranslationContent::default());

        assert_eq!(result.translation, "They want to grow where they stand.");
    }

    #[test]
    fn missing_version_record_fails_conditions() {
        let result = translate("levelUp", None, &rules(), &TranslationContent::default());
        assert_eq!(result.translation, "They want to grow where they stand.");
    }

    #[test]
    fn no_match_returns_fallback_content() {
        let fallback: TranslationContent = serde_json::from_value(json!({
            "translation": "A direction is forming; treat the next month as evidence-gathering."
        }))
        .unwrap();

        let result = translate("reset", None, &rules(), &fallback);
        assert_eq!(
            result.translation,
            "A direction is forming; treat the next month as evidence-gathering."
        );
    }

    #[test]
    fn absent_fields_fall_back_independently() {
        let version = version("levelUpType", "craft");
        let result = translate("levelUp", Some(&version), &rules(), &TranslationContent::default());

        // The matched rule sets translation, coachingFocus, and checkpoint;
        // everything else resolves to the generic defaults.
        assert_eq!(result.coaching_focus, vec!["Protect focused time.".to_string()]);
        assert_eq!(result.leader_ask, GENERIC_LEADER_ASK);
        assert_eq!(result.pressure_test, GENERIC_PRESSURE_TEST);
        assert_eq!(result.watchouts, *GENERIC_WATCHOUTS);
        assert_eq!(result.success_criteria, *GENERIC_SUCCESS_CRITERIA);
    }

    #[test]
    fn empty_content_is_fully_generic() {
        let result = TranslationResult::from_content(&TranslationContent::default());
        assert_eq!(result.checkpoint_days, DEFAULT_CHECKPOINT_DAYS);
        assert_eq!(result.translation, GENERIC_TRANSLATION);
    }
}
