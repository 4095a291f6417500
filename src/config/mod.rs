//! Typed configuration model for the questionnaire document.
//!
//! The document is an external JSON contract (`career_flow.json` shape).
//! Loading is two-phase: serde deserialization into the typed sections here,
//! then a cross-reference [`QuestionnaireConfig::validate`] pass that checks
//! every path/question/option/field reference. Both phases fail fast; the
//! engines only ever see a fully valid, immutable document.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::QuestionnaireConfig;
//!
//! let raw = std::fs::read_to_string("career_flow.json").unwrap();
//! let config = QuestionnaireConfig::from_json_str(&raw).expect("invalid configuration");
//! println!("{} paths configured", config.paths.len());
//! ```

mod error;
mod experiments;
mod flow;
mod focus;
mod questions;
mod summary_logic;
mod templates;

pub use error::{ConfigError, IntegrityError};
pub use experiments::{
    ExperimentSpec, ExperimentsSection, SelectionRules, DEFAULT_MAX_PICK_COUNT,
    DEFAULT_PICK_COUNT,
};
pub use flow::{
    ConfidenceBand, ConfidenceSection, FlowSection, FlowTrigger, RoutingRule, RuleThen, RuleWhen,
};
pub use focus::{DescriptorMap, FocusBuilder, FocusStatementSection};
pub use questions::{ChoiceOption, Question, QuestionKind, DEFAULT_MULTI_SELECT_CAP};
pub use summary_logic::{
    IntentRule, IntentRuleWhen, SummaryLogic, TranslationContent, WhyEvidence,
    DEFAULT_WHY_MAX_BULLETS,
};
pub use templates::{SummarySections, Templates, UiStrings, DEFAULT_EVIDENCE_MAX};

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::focus::{template_slots, KNOWN_SLOTS};

/// One career path the questionnaire can recommend toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub short: String,
    /// Closed set of version-record fields legal for this path.
    #[serde(default)]
    pub version_fields: Vec<String>,
}

/// The `diagnostic` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSection {
    pub questions: Vec<Question>,
    pub confidence: ConfidenceSection,
}

/// The `refinement` section: per-path question sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementSection {
    #[serde(default)]
    pub question_sets: BTreeMap<String, Vec<Question>>,
}

/// Root of the configuration document. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireConfig {
    pub paths: Vec<PathSpec>,
    pub diagnostic: DiagnosticSection,
    pub refinement: RefinementSection,
    pub flow: FlowSection,
    pub summary_logic: SummaryLogic,
    pub focus_statement: FocusStatementSection,
    pub experiments: ExperimentsSection,
    #[serde(default)]
    pub templates: Templates,
}

impl QuestionnaireConfig {
    /// Parses and validates a configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Looks up a path by id.
    pub fn path(&self, id: &str) -> Option<&PathSpec> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// True if the path id is configured.
    pub fn has_path(&self, id: &str) -> bool {
        self.path(id).is_some()
    }

    /// Cross-reference integrity checks over the whole document.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        let mut path_ids: HashSet<&str> = HashSet::new();
        for path in &self.paths {
            if !path_ids.insert(path.id.as_str()) {
                return Err(IntegrityError::DuplicatePathId(path.id.clone()));
            }
        }

        if self.diagnostic.confidence.bands.is_empty() {
            return Err(IntegrityError::NoConfidenceBands);
        }

        self.validate_question_list(
            &self.diagnostic.questions,
            "diagnostic.questions",
            &path_ids,
            true,
        )?;

        for (path_id, questions) in &self.refinement.question_sets {
            if !path_ids.contains(path_id.as_str()) {
                return Err(IntegrityError::UnknownPath {
                    context: "refinement.questionSets".to_string(),
                    path_id: path_id.clone(),
                });
            }
            let context = format!("refinement.questionSets.{}", path_id);
            self.validate_question_list(questions, &context, &path_ids, false)?;
            for question in questions {
                for option in &question.options {
                    if option.path_scores.is_some() {
                        return Err(IntegrityError::ScoresInRefinement {
                            question_id: question.id.clone(),
                            option_id: option.id.clone(),
                        });
                    }
                    if let Some(sets) = &option.sets {
                        for field in sets.keys() {
                            self.check_version_field(path_id, field, &context)?;
                        }
                    }
                }
            }
        }

        for (i, rule) in self.flow.routing_rules.iter().enumerate() {
            self.check_path(
                &path_ids,
                &rule.then.primary_path,
                format!("flow.routingRules[{}].then.primaryPath", i),
            )?;
            if let Some(secondary) = &rule.then.secondary_path {
                self.check_path(
                    &path_ids,
                    secondary,
                    format!("flow.routingRules[{}].then.secondaryPath", i),
                )?;
            }
        }

        for (i, rule) in self.summary_logic.intent_translation_rules.iter().enumerate() {
            let context = format!("summaryLogic.intentTranslationRules[{}]", i);
            self.check_path(&path_ids, &rule.when.primary_path, context.clone())?;
            for field in rule.when.version.keys() {
                self.check_version_field(&rule.when.primary_path, field, &context)?;
            }
        }

        for (path_id, template) in &self.focus_statement.builder.templates {
            self.check_path(
                &path_ids,
                path_id,
                "focusStatement.builder.templates".to_string(),
            )?;
            for slot in template_slots(template) {
                if !KNOWN_SLOTS.contains(&slot.as_str()) {
                    return Err(IntegrityError::UnknownTemplateSlot {
                        path_id: path_id.clone(),
                        slot,
                    });
                }
            }
        }
        for (path_id, map) in &self.focus_statement.builder.descriptors {
            self.check_path(
                &path_ids,
                path_id,
                "focusStatement.builder.descriptors".to_string(),
            )?;
            self.check_version_field(path_id, &map.field, "focusStatement.builder.descriptors")?;
        }

        for (i, experiment) in self.experiments.library.iter().enumerate() {
            self.check_path(
                &path_ids,
                &experiment.path,
                format!("experiments.library[{}]", i),
            )?;
        }
        for path_id in self.experiments.selection_rules.suggestions_by_path.keys() {
            self.check_path(
                &path_ids,
                path_id,
                "experiments.selectionRules.suggestionsByPath".to_string(),
            )?;
        }
        let rules = &self.experiments.selection_rules;
        if rules.default_pick_count() > rules.max_pick_count() {
            return Err(IntegrityError::PickCountsInverted {
                default: rules.default_pick_count(),
                max: rules.max_pick_count(),
            });
        }

        Ok(())
    }

    fn check_path(
        &self,
        path_ids: &HashSet<&str>,
        path_id: &str,
        context: String,
    ) -> Result<(), IntegrityError> {
        if path_ids.contains(path_id) {
            Ok(())
        } else {
            Err(IntegrityError::UnknownPath {
                context,
                path_id: path_id.to_string(),
            })
        }
    }

    fn check_version_field(
        &self,
        path_id: &str,
        field: &str,
        context: &str,
    ) -> Result<(), IntegrityError> {
        let declared = self
            .path(path_id)
            .map(|p| p.version_fields.iter().any(|f| f == field))
            .unwrap_or(false);
        if declared {
            Ok(())
        } else {
            Err(IntegrityError::UndeclaredVersionField {
                path_id: path_id.to_string(),
                field: field.to_string(),
                context: context.to_string(),
            })
        }
    }

    fn validate_question_list(
        &self,
        questions: &[Question],
        context: &str,
        path_ids: &HashSet<&str>,
        allow_path_scores: bool,
    ) -> Result<(), IntegrityError> {
        let mut question_ids: HashSet<&str> = HashSet::new();
        for question in questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(IntegrityError::DuplicateQuestionId {
                    context: context.to_string(),
                    question_id: question.id.clone(),
                });
            }
            if question.max_selections == Some(0) {
                return Err(IntegrityError::ZeroSelectionCap(question.id.clone()));
            }
            let mut option_ids: HashSet<&str> = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(IntegrityError::DuplicateOptionId {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
                if allow_path_scores {
                    if let Some(scores) = &option.path_scores {
                        for path_id in scores.keys() {
                            self.check_path(
                                path_ids,
                                path_id,
                                format!("option '{}' pathScores in question '{}'", option.id, question.id),
                            )?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
