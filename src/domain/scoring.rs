//! Signal/score accumulator: full idempotent recompute from the answer log.
//!
//! All derived state (signal vector, path scores, decision log, version
//! records) is a pure function of the configuration and an ordered answer
//! prefix. Backward navigation is recomputation against a shorter prefix,
//! never an undo.

use serde::{Deserialize, Serialize};

use crate::config::{PathSpec, Question, QuestionnaireConfig};
use crate::domain::decision_log::{AnswerPhase, DecisionLog, DecisionLogEntry};
use crate::domain::foundation::SignalVector;
use crate::domain::intent::VersionStore;

/// One committed answer: a question plus every option chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvent {
    pub phase: AnswerPhase,
    /// Refinement answers carry the path whose question set they belong to.
    pub path_id: Option<String>,
    pub question_id: String,
    pub option_ids: Vec<String>,
}

/// Per-path running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathScore {
    pub path_id: String,
    pub score: i32,
}

/// Path id -> running score, kept in configuration order.
///
/// Configuration order is the tie-break everywhere a ranking is taken:
/// sorting is stable, so first-seen wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathScoreTable {
    entries: Vec<PathScore>,
}

impl PathScoreTable {
    /// Zero-initialized table over the configured paths.
    pub fn for_paths(paths: &[PathSpec]) -> Self {
        Self {
            entries: paths
                .iter()
                .map(|p| PathScore {
                    path_id: p.id.clone(),
                    score: 0,
                })
                .collect(),
        }
    }

    /// Adds a delta onto a path's score. Unknown ids are ignored; the loader
    /// guarantees referenced paths exist.
    pub fn add(&mut self, path_id: &str, delta: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.path_id == path_id) {
            entry.score += delta;
        }
    }

    pub fn get(&self, path_id: &str) -> i32 {
        self.entries
            .iter()
            .find(|e| e.path_id == path_id)
            .map(|e| e.score)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[PathScore] {
        &self.entries
    }

    /// Entries by descending score; configuration order breaks ties.
    pub fn ranked(&self) -> Vec<&PathScore> {
        let mut ranked: Vec<&PathScore> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// The leading and runner-up entries.
    pub fn top_two(&self) -> (Option<&PathScore>, Option<&PathScore>) {
        let ranked = self.ranked();
        (ranked.first().copied(), ranked.get(1).copied())
    }
}

/// Everything recompute derives from an answer prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeOutcome {
    pub signals: SignalVector,
    pub path_scores: PathScoreTable,
    pub decision_log: DecisionLog,
    pub versions: VersionStore,
}

/// Rebuilds all derived state from an ordered answer prefix.
///
/// Deterministic and idempotent: the same prefix always produces identical
/// output. Diagnostic answers contribute signals, scales, and path scores;
/// refinement answers contribute signals, scales, and version-record
/// assignments, never path scores. Selections beyond a question's cap are
/// dropped, and answers or options that no longer resolve against the
/// configuration are skipped.
pub fn recompute<'a>(
    config: &QuestionnaireConfig,
    answers: impl IntoIterator<Item = &'a AnswerEvent>,
) -> RecomputeOutcome {
    let mut outcome = RecomputeOutcome {
        signals: SignalVector::default(),
        path_scores: PathScoreTable::for_paths(&config.paths),
        decision_log: DecisionLog::new(),
        versions: VersionStore::default(),
    };

    for answer in answers {
        let Some(question) = resolve_question(config, answer) else {
            continue;
        };
        for option_id in answer.option_ids.iter().take(question.selection_cap()) {
            let Some(option) = question.option(option_id) else {
                continue;
            };
            if let Some(signals) = &option.signals {
                outcome.signals.apply(signals);
            }
            match answer.phase {
                AnswerPhase::Diagnostic => {
                    if let Some(scores) = &option.path_scores {
                        for (path_id, delta) in scores {
                            outcome.path_scores.add(path_id, *delta);
                        }
                    }
                }
                AnswerPhase::Refinement => {
                    if let (Some(path_id), Some(sets)) = (answer.path_id.as_deref(), &option.sets)
                    {
                        outcome.versions.apply_sets(path_id, sets);
                    }
                }
            }
            outcome.decision_log.push(DecisionLogEntry {
                phase: answer.phase,
                path_id: answer.path_id.clone(),
                question_id: question.id.clone(),
                option_id: option.id.clone(),
                prompt: question.prompt.clone(),
                answer_label: option.label.clone(),
                signals_applied: option.signals.clone(),
                scores_applied: option.path_scores.clone(),
                sets_applied: option.sets.clone(),
            });
        }
    }

    outcome
}

fn resolve_question<'a>(
    config: &'a QuestionnaireConfig,
    answer: &AnswerEvent,
) -> Option<&'a Question> {
    match answer.phase {
        AnswerPhase::Diagnostic => config
            .diagnostic
            .questions
            .iter()
            .find(|q| q.id == answer.question_id),
        AnswerPhase::Refinement => {
            let path_id = answer.path_id.as_deref()?;
            config
                .refinement
                .question_sets
                .get(path_id)?
                .iter()
                .find(|q| q.id == answer.question_id)
        }
    }
}
