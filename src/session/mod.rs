//! Session aggregate: owns all mutable questionnaire state.
//!
//! One `Session` is the whole engine surface the rendering collaborator
//! drives. Every entry point is synchronous; none performs I/O. Derived
//! state (signals, scores, decision log, version records) is never patched
//! in place: each mutation of the answer log triggers a full recompute, so
//! backward navigation is always consistent with forward progress.
//!
//! Misuse (answering outside a question phase, toggling past a cap,
//! unknown ids) is silently ignored rather than raised: the questionnaire
//! stays forgiving by design. Only configuration loading can fail.

use serde::Serialize;

use crate::config::{ExperimentSpec, FlowTrigger, Question, QuestionnaireConfig};
use crate::domain::confidence::{classify, Confidence};
use crate::domain::decision_log::{AnswerPhase, DecisionLog};
use crate::domain::experiments::{select_defaults, PlanSelection};
use crate::domain::focus::build_focus_statement;
use crate::domain::foundation::{Phase, Signal, SignalVector};
use crate::domain::intent::{PathIntent, VersionRecord};
use crate::domain::routing::{fallback_route, route, ChosenBy};
use crate::domain::scoring::{recompute, AnswerEvent, PathScoreTable, RecomputeOutcome};
use crate::domain::summary::{generate, Summaries, SummaryInputs};
use crate::domain::translation::translate;

/// Default open question seeded into every plan.
pub const DEFAULT_OPEN_QUESTION: &str =
    "What would you recommend as the best next step to test and build this direction?";

/// The experiment-selection plan as the collaborator reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub experiments: Vec<ExperimentSpec>,
    pub focus_statement: String,
    pub open_question: String,
}

/// A single questionnaire session.
pub struct Session {
    config: QuestionnaireConfig,
    phase: Phase,
    diagnostic_answers: Vec<AnswerEvent>,
    refinement_answers: Vec<AnswerEvent>,
    diagnostic_index: usize,
    pending: Vec<String>,
    derived: RecomputeOutcome,
    confidence: Confidence,
    intent: PathIntent,
    selection: PlanSelection,
    focus_statement: String,
    open_question: String,
    summaries: Option<Summaries>,
}

impl Session {
    /// Starts a session over a loaded configuration.
    pub fn new(config: QuestionnaireConfig) -> Self {
        let derived = recompute(&config, []);
        let confidence = classify(
            &derived.path_scores,
            &config.diagnostic.confidence.bands,
            &config.templates.ui_strings.confidence_labels,
        );
        let max_pick = config.experiments.selection_rules.max_pick_count();
        Self {
            config,
            phase: Phase::Intro,
            diagnostic_answers: Vec::new(),
            refinement_answers: Vec::new(),
            diagnostic_index: 0,
            pending: Vec::new(),
            derived,
            confidence,
            intent: PathIntent::default(),
            selection: PlanSelection::new(max_pick),
            focus_statement: String::new(),
            open_question: DEFAULT_OPEN_QUESTION.to_string(),
            summaries: None,
        }
    }

    // ---- navigation -----------------------------------------------------

    /// Leaves the intro screen and presents the first diagnostic question.
    pub fn begin_diagnostic(&mut self) -> bool {
        self.set_phase(Phase::Diagnostic)
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Diagnostic => self.config.diagnostic.questions.get(self.diagnostic_index),
            Phase::Refinement => {
                let path_id = self.intent.primary_path.as_deref()?;
                self.config
                    .refinement
                    .question_sets
                    .get(path_id)?
                    .get(self.refinement_index())
            }
            _ => None,
        }
    }

    /// Toggles an option on the current question.
    ///
    /// Single-choice questions replace the pending pick; multi-choice
    /// questions add up to the question's cap, where further adds are
    /// ignored. Returns whether the pending selection changed.
    pub fn toggle_choice(&mut self, option_id: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if question.option(option_id).is_none() {
            return false;
        }
        let cap = question.selection_cap();

        if let Some(pos) = self.pending.iter().position(|id| id == option_id) {
            self.pending.remove(pos);
            return true;
        }
        if cap == 1 {
            self.pending.clear();
            self.pending.push(option_id.to_string());
            return true;
        }
        if self.pending.len() < cap {
            self.pending.push(option_id.to_string());
            return true;
        }
        tracing::debug!(option = option_id, cap, "selection cap reached, toggle ignored");
        false
    }

    /// Commits the pending selection as the answer to the current question,
    /// recomputes all derived state, and advances.
    ///
    /// Completing the last diagnostic question runs the routing engine and
    /// moves the session to the recommendation phase.
    pub fn confirm_answer(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let (phase, path_id, question_id) = match self.phase {
            Phase::Diagnostic => {
                let Some(question) = self.config.diagnostic.questions.get(self.diagnostic_index)
                else {
                    return false;
                };
                (AnswerPhase::Diagnostic, None, question.id.clone())
            }
            Phase::Refinement => {
                let Some(path_id) = self.intent.primary_path.clone() else {
                    return false;
                };
                let index = self.refinement_index();
                let Some(question) = self
                    .config
                    .refinement
                    .question_sets
                    .get(&path_id)
                    .and_then(|set| set.get(index))
                else {
                    return false;
                };
                (AnswerPhase::Refinement, Some(path_id), question.id.clone())
            }
            _ => return false,
        };

        let event = AnswerEvent {
            phase,
            path_id,
            question_id: question_id.clone(),
            option_ids: std::mem::take(&mut self.pending),
        };
        tracing::debug!(question = %question_id, phase = ?phase, "answer committed");
        match phase {
            AnswerPhase::Diagnostic => self.diagnostic_answers.push(event),
            AnswerPhase::Refinement => self.refinement_answers.push(event),
        }
        self.recompute_derived();

        if phase == AnswerPhase::Diagnostic {
            self.diagnostic_index += 1;
            if self.diagnostic_index >= self.config.diagnostic.questions.len() {
                self.complete_diagnostic();
            }
        }
        true
    }

    /// Steps backward one question or one phase.
    ///
    /// Both phases use the same policy: the last committed answer of the
    /// phase is dropped from the log and everything derived is recomputed
    /// from the shorter prefix.
    pub fn go_back(&mut self) -> bool {
        if !self.pending.is_empty() {
            self.pending.clear();
            return true;
        }
        match self.phase {
            Phase::Intro => false,
            Phase::Diagnostic => {
                if self.diagnostic_index == 0 {
                    return false;
                }
                self.diagnostic_index -= 1;
                self.diagnostic_answers.pop();
                self.recompute_derived();
                true
            }
            Phase::Recommendation => {
                if !self.set_phase(Phase::Diagnostic) {
                    return false;
                }
                if self.diagnostic_index > 0 {
                    self.diagnostic_index -= 1;
                    self.diagnostic_answers.pop();
                    self.recompute_derived();
                }
                true
            }
            Phase::Refinement => {
                let Some(primary) = self.intent.primary_path.clone() else {
                    return self.set_phase(Phase::Recommendation);
                };
                let last_for_path = self
                    .refinement_answers
                    .iter()
                    .rposition(|a| a.path_id.as_deref() == Some(primary.as_str()));
                match last_for_path {
                    Some(pos) => {
                        self.refinement_answers.remove(pos);
                        self.recompute_derived();
                        true
                    }
                    None => self.set_phase(Phase::Recommendation),
                }
            }
            Phase::Planning => self.set_phase(Phase::Refinement),
            Phase::Summary => self.set_phase(Phase::Planning),
        }
    }

    /// Overrides the primary path at or after the recommendation screen.
    ///
    /// Version records of previously visited paths are untouched, so
    /// switching away and back loses nothing.
    pub fn choose_path(&mut self, path_id: &str) -> bool {
        if !matches!(
            self.phase,
            Phase::Recommendation | Phase::Refinement | Phase::Planning
        ) {
            return false;
        }
        if !self.config.has_path(path_id) {
            return false;
        }
        if self.intent.primary_path.as_deref() == Some(path_id) {
            return false;
        }
        let secondary = self
            .derived
            .path_scores
            .ranked()
            .into_iter()
            .find(|entry| entry.path_id != path_id)
            .map(|entry| entry.path_id.clone());
        tracing::debug!(path = path_id, "primary path overridden");
        self.intent = PathIntent {
            primary_path: Some(path_id.to_string()),
            secondary_path: secondary,
            chosen_by: Some(ChosenBy::UserOverride),
        };
        self.pending.clear();
        if self.phase == Phase::Planning {
            self.seed_plan();
        }
        true
    }

    /// Enters the refinement phase for the settled primary path.
    pub fn begin_refinement(&mut self) -> bool {
        if self.intent.primary_path.is_none() {
            return false;
        }
        self.pending.clear();
        self.set_phase(Phase::Refinement)
    }

    /// Enters the planning phase, seeding default experiments for the
    /// primary path and the default open question.
    pub fn begin_planning(&mut self) -> bool {
        if !self.set_phase(Phase::Planning) {
            return false;
        }
        self.seed_plan();
        true
    }

    /// Toggles an experiment by library id; unknown ids are ignored.
    pub fn toggle_experiment(&mut self, experiment_id: &str) -> bool {
        if self.phase != Phase::Planning {
            return false;
        }
        let Some(spec) = self
            .config
            .experiments
            .library
            .iter()
            .find(|e| e.id == experiment_id)
        else {
            return false;
        };
        self.selection.toggle(spec)
    }

    /// Replaces the open question carried into the supervisor conversation.
    pub fn set_open_question(&mut self, text: impl Into<String>) {
        self.open_question = text.into();
    }

    /// Finalizes the plan: builds the focus statement, runs intent
    /// translation, and regenerates both summaries in full. May be called
    /// again from the summary screen after plan changes.
    pub fn finalize_plan(&mut self) -> bool {
        if !matches!(self.phase, Phase::Planning | Phase::Summary) {
            return false;
        }
        let Some(primary) = self.intent.primary_path.clone() else {
            return false;
        };
        let version = self.derived.versions.record(&primary);
        self.focus_statement = build_focus_statement(
            &primary,
            version,
            &self.selection,
            &self.config.focus_statement.builder,
        );
        let translation = translate(
            &primary,
            version,
            &self.config.summary_logic.intent_translation_rules,
            &self.config.summary_logic.fallback_intent_translation,
        );
        let lowest_band = self
            .config
            .diagnostic
            .confidence
            .lowest_band()
            .map(|b| b.id.as_str())
            .unwrap_or("early");

        let summaries = generate(&SummaryInputs {
            path: self.config.path(&primary),
            signals: &self.derived.signals,
            confidence: &self.confidence,
            lowest_band,
            decision_log: &self.derived.decision_log,
            why: &self.config.summary_logic.why_evidence,
            sections: &self.config.templates.summary_sections,
            experiments: self.selection.selected(),
            focus_statement: &self.focus_statement,
            open_question: &self.open_question,
            translation: &translation,
        });
        self.summaries = Some(summaries);
        tracing::debug!(path = %primary, "plan finalized, summaries regenerated");

        if self.phase == Phase::Planning {
            self.set_phase(Phase::Summary);
        }
        true
    }

    // ---- read-back surface ----------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &QuestionnaireConfig {
        &self.config
    }

    pub fn confidence(&self) -> &Confidence {
        &self.confidence
    }

    pub fn signals(&self) -> &SignalVector {
        &self.derived.signals
    }

    pub fn path_scores(&self) -> &PathScoreTable {
        &self.derived.path_scores
    }

    pub fn dominant_signal(&self) -> Signal {
        self.derived.signals.dominant_core()
    }

    pub fn decision_log(&self) -> &DecisionLog {
        &self.derived.decision_log
    }

    pub fn intent(&self) -> &PathIntent {
        &self.intent
    }

    /// The version record for a path, if any answer has been applied to it.
    pub fn version(&self, path_id: &str) -> Option<&VersionRecord> {
        self.derived.versions.record(path_id)
    }

    /// The options currently toggled on the pending question.
    pub fn pending_selection(&self) -> &[String] {
        &self.pending
    }

    pub fn plan(&self) -> Plan {
        Plan {
            experiments: self.selection.selected().to_vec(),
            focus_statement: self.focus_statement.clone(),
            open_question: self.open_question.clone(),
        }
    }

    pub fn summaries(&self) -> Option<&Summaries> {
        self.summaries.as_ref()
    }

    /// (answered, total) for the diagnostic phase.
    pub fn diagnostic_progress(&self) -> (usize, usize) {
        (
            self.diagnostic_index,
            self.config.diagnostic.questions.len(),
        )
    }

    /// (answered, total) for the current path's refinement set.
    pub fn refinement_progress(&self) -> (usize, usize) {
        let total = self
            .intent
            .primary_path
            .as_deref()
            .and_then(|path_id| self.config.refinement.question_sets.get(path_id))
            .map(Vec::len)
            .unwrap_or(0);
        (self.refinement_index(), total)
    }

    // ---- internals -------------------------------------------------------

    fn refinement_index(&self) -> usize {
        let Some(primary) = self.intent.primary_path.as_deref() else {
            return 0;
        };
        self.refinement_answers
            .iter()
            .filter(|a| a.path_id.as_deref() == Some(primary))
            .count()
    }

    fn recompute_derived(&mut self) {
        self.derived = recompute(
            &self.config,
            self.diagnostic_answers
                .iter()
                .chain(self.refinement_answers.iter()),
        );
        self.confidence = classify(
            &self.derived.path_scores,
            &self.config.diagnostic.confidence.bands,
            &self.config.templates.ui_strings.confidence_labels,
        );
    }

    fn complete_diagnostic(&mut self) {
        let dominant = self.derived.signals.dominant_core();
        let outcome = route(
            dominant,
            &self.confidence,
            FlowTrigger::DiagnosticComplete,
            &self.config.flow.routing_rules,
        )
        .unwrap_or_else(|| fallback_route(&self.confidence));
        tracing::debug!(
            primary = %outcome.primary_path,
            chosen_by = ?outcome.chosen_by,
            band = %self.confidence.band,
            dominant = %dominant,
            "diagnostic complete"
        );
        self.intent.adopt(outcome);
        self.set_phase(Phase::Recommendation);
    }

    fn seed_plan(&mut self) {
        let rules = &self.config.experiments.selection_rules;
        let defaults: Vec<ExperimentSpec> = match self.intent.primary_path.as_deref() {
            Some(path_id) => {
                select_defaults(path_id, &self.config.experiments.library, rules)
                    .into_iter()
                    .cloned()
                    .collect()
            }
            None => Vec::new(),
        };
        self.selection = PlanSelection::seeded(defaults, rules.max_pick_count());
    }

    fn set_phase(&mut self, target: Phase) -> bool {
        if self.phase.can_transition_to(&target) {
            tracing::debug!(from = %self.phase, to = %target, "phase transition");
            self.phase = target;
            true
        } else {
            tracing::debug!(from = %self.phase, to = %target, "phase transition ignored");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> QuestionnaireConfig {
        QuestionnaireConfig::from_value(json!({
            "paths": [
                {"id": "levelUp", "label": "Level Up", "short": "Grow in place", "versionFields": ["levelUpType"]},
                {"id": "moveAcross", "label": "Move Across", "short": "Change lanes", "versionFields": ["acrossPurpose"]},
                {"id": "reset", "label": "Reset", "short": "Rebalance"}
            ],
            "diagnostic": {
                "questions": [
                    {
                        "id": "d1",
                        "prompt": "What pulls you most?",
                        "type": "multi",
                        "options": [
                            {"id": "a", "label": "Mastery", "signals": {"depth": 2}, "pathScores": {"levelUp": 3}},
                            {"id": "b", "label": "Range", "signals": {"scope": 1}, "pathScores": {"moveAcross": 1}},
                            {"id": "c", "label": "Pace", "signals": {"recalibration": 1}, "pathScores": {"reset": 2}}
                        ]
                    },
                    {
                        "id": "d2",
                        "prompt": "Pick your energizer",
                        "options": [
                            {"id": "x", "label": "Hard problems", "signals": {"depth": 1}, "pathScores": {"levelUp": 1}},
                            {"id": "y", "label": "New rooms", "signals": {"breadth": 2}, "pathScores": {"moveAcross": 2}}
                        ]
                    }
                ],
                "confidence": {
                    "bands": [
                        {"id": "strong", "minDelta": 25},
                        {"id": "emerging", "minDelta": 10},
                        {"id": "early", "minDelta": 0}
                    ]
                }
            },
            "refinement": {
                "questionSets": {
                    "levelUp": [
                        {
                            "id": "r1",
                            "prompt": "What kind of level up?",
                            "options": [
                                {"id": "craft", "label": "Deeper craft", "sets": {"levelUpType": "craft"}},
                                {"id": "lead", "label": "Leading others", "sets": {"levelUpType": "lead"}}
                            ]
                        }
                    ],
                    "moveAcross": [
                        {
                            "id": "m1",
                            "prompt": "Why across?",
                            "options": [
                                {"id": "fit", "label": "Better fit", "sets": {"acrossPurpose": "fit"}}
                            ]
                        }
                    ]
                }
            },
            "flow": {"routingRules": []},
            "summaryLogic": {
                "whyEvidence": {
                    "templates": {"depth": "Depth keeps showing up."},
                    "maxBullets": 3
                }
            },
            "focusStatement": {
                "builder": {
                    "templates": {"levelUp": "Grow toward {descriptor}, starting with {experiment}."},
                    "descriptors": {
                        "levelUp": {
                            "field": "levelUpType",
                            "by": {"craft": "deeper technical mastery"},
                            "default": "greater responsibility and impact"
                        }
                    }
                }
            },
            "experiments": {
                "library": [
                    {"id": "e1", "path": "levelUp", "label": "Lead a small initiative", "timeframe": "4 weeks"},
                    {"id": "e2", "path": "levelUp", "label": "Own a gnarly fix", "timeframe": "2 weeks"},
                    {"id": "e3", "path": "levelUp", "label": "Mentor a colleague", "timeframe": "6 weeks"}
                ],
                "selectionRules": {
                    "suggestionsByPath": {"levelUp": ["e1", "e2"]},
                    "defaultPickCount": 2,
                    "maxPickCount": 3
                }
            }
        }))
        .unwrap()
    }

    fn answer(session: &mut Session, option_ids: &[&str]) {
        for id in option_ids {
            assert!(session.toggle_choice(id), "toggle {}", id);
        }
        assert!(session.confirm_answer());
    }

    fn through_diagnostic(session: &mut Session) {
        assert!(session.begin_diagnostic());
        answer(session, &["a", "b"]);
        answer(session, &["x"]);
    }

    #[test]
    fn diagnostic_completion_routes_and_transitions() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);

        assert_eq!(session.phase(), Phase::Recommendation);
        assert_eq!(session.intent().primary_path.as_deref(), Some("levelUp"));
        assert_eq!(session.intent().secondary_path.as_deref(), Some("moveAcross"));
        assert_eq!(session.intent().chosen_by, Some(ChosenBy::Recommendation));
        assert_eq!(session.path_scores().get("levelUp"), 4);
        assert_eq!(session.dominant_signal(), Signal::Depth);
    }

    #[test]
    fn multi_select_cap_ignores_third_toggle() {
        let mut session = Session::new(config());
        session.begin_diagnostic();

        assert!(session.toggle_choice("a"));
        assert!(session.toggle_choice("b"));
        assert!(!session.toggle_choice("c"));
        assert_eq!(session.pending_selection(), ["a", "b"]);
    }

    #[test]
    fn single_choice_toggle_replaces() {
        let mut session = Session::new(config());
        session.begin_diagnostic();
        answer(&mut session, &["a"]);

        assert!(session.toggle_choice("x"));
        assert!(session.toggle_choice("y"));
        assert_eq!(session.pending_selection(), ["y"]);
    }

    #[test]
    fn go_back_recomputes_from_truncated_log() {
        let mut session = Session::new(config());
        session.begin_diagnostic();
        answer(&mut session, &["a"]);
        let after_first = session.path_scores().get("levelUp");

        answer(&mut session, &["x"]);
        assert_eq!(session.phase(), Phase::Recommendation);

        // Back to the last diagnostic question; its answer is dropped.
        assert!(session.go_back());
        assert_eq!(session.phase(), Phase::Diagnostic);
        assert_eq!(session.path_scores().get("levelUp"), after_first);
        assert_eq!(session.decision_log().len(), 1);

        // Re-answer differently; scores follow the new log.
        answer(&mut session, &["y"]);
        assert_eq!(session.path_scores().get("moveAcross"), 2);
    }

    #[test]
    fn refinement_writes_version_record() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        assert!(session.begin_refinement());

        answer(&mut session, &["craft"]);
        assert_eq!(
            session.version("levelUp").and_then(|v| v.get("levelUpType")),
            Some("craft")
        );
        // Refinement never scores paths.
        assert_eq!(session.path_scores().get("levelUp"), 4);
    }

    #[test]
    fn refinement_go_back_drops_last_answer_for_path() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.begin_refinement();
        answer(&mut session, &["craft"]);

        assert!(session.go_back());
        assert_eq!(session.phase(), Phase::Refinement);
        assert!(session.version("levelUp").is_none());
        assert_eq!(session.refinement_progress(), (0, 1));
    }

    #[test]
    fn version_records_survive_path_switches() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.begin_refinement();
        answer(&mut session, &["craft"]);

        assert!(session.choose_path("moveAcross"));
        assert_eq!(session.intent().chosen_by, Some(ChosenBy::UserOverride));
        answer(&mut session, &["fit"]);

        assert!(session.choose_path("levelUp"));
        assert_eq!(
            session.version("levelUp").and_then(|v| v.get("levelUpType")),
            Some("craft")
        );
        assert_eq!(
            session.version("moveAcross").and_then(|v| v.get("acrossPurpose")),
            Some("fit")
        );
        // Back on levelUp, its single question is already answered.
        assert_eq!(session.refinement_progress(), (1, 1));
    }

    #[test]
    fn planning_seeds_defaults_and_toggles_bounded() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.begin_refinement();
        answer(&mut session, &["craft"]);
        assert!(session.begin_planning());

        let plan = session.plan();
        let ids: Vec<&str> = plan.experiments.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);

        // Add the third (cap is 3), then a removal.
        assert!(session.toggle_experiment("e3"));
        assert!(session.toggle_experiment("e1"));
        assert!(!session.toggle_experiment("ghost"));
        let plan = session.plan();
        let ids: Vec<&str> = plan.experiments.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e3"]);
    }

    #[test]
    fn finalize_builds_focus_and_summaries() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.begin_refinement();
        answer(&mut session, &["craft"]);
        session.begin_planning();
        session.set_open_question("Which experiment would you sponsor?");

        assert!(session.finalize_plan());
        assert_eq!(session.phase(), Phase::Summary);

        let plan = session.plan();
        assert_eq!(
            plan.focus_statement,
            "Grow toward deeper technical mastery, starting with Lead a small initiative."
        );

        let summaries = session.summaries().unwrap();
        assert!(summaries.respondent.contains("Level Up — Grow in place"));
        assert!(summaries.respondent.contains("Which experiment would you sponsor?"));
        assert!(summaries.supervisor.contains("Check in after 30 days."));
    }

    #[test]
    fn refinalize_regenerates_after_plan_change() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.begin_refinement();
        answer(&mut session, &["craft"]);
        session.begin_planning();
        session.finalize_plan();
        let first = session.summaries().unwrap().respondent.clone();

        // Change the plan from the summary screen and finalize again.
        assert!(session.go_back());
        assert!(session.toggle_experiment("e1"));
        assert!(session.finalize_plan());
        let second = session.summaries().unwrap().respondent.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn answers_outside_question_phases_are_ignored() {
        let mut session = Session::new(config());
        assert!(!session.toggle_choice("a"));
        assert!(!session.confirm_answer());

        through_diagnostic(&mut session);
        // Recommendation phase: answering is a no-op.
        assert!(!session.toggle_choice("a"));
        assert!(!session.confirm_answer());
    }

    #[test]
    fn choose_path_requires_known_path() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        assert!(!session.choose_path("ghost"));
        assert!(session.choose_path("reset"));
        assert_eq!(session.intent().primary_path.as_deref(), Some("reset"));
        // Secondary falls back to the best-scoring other path.
        assert_eq!(session.intent().secondary_path.as_deref(), Some("levelUp"));
    }

    #[test]
    fn reset_path_without_questions_reaches_planning() {
        let mut session = Session::new(config());
        through_diagnostic(&mut session);
        session.choose_path("reset");
        assert!(session.begin_refinement());
        assert!(session.current_question().is_none());
        assert!(session.begin_planning());
        assert!(session.plan().experiments.is_empty());
        assert!(session.finalize_plan());
    }
}
