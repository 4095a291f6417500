//! Summary generation: the two rendered text documents.
//!
//! Both documents are composed from scratch on every plan finalization,
//! never patched. Section labels come verbatim from the configured
//! templates; bullet lines carry a literal bullet prefix.

use serde::Serialize;

use crate::config::{ExperimentSpec, PathSpec, SummarySections, WhyEvidence};
use crate::domain::confidence::Confidence;
use crate::domain::decision_log::DecisionLog;
use crate::domain::foundation::{Signal, SignalVector, CORE_SIGNALS};
use crate::domain::translation::TranslationResult;

/// Bullet prefix for every generated bullet line.
pub const BULLET: &str = "• ";

/// Bullet prepended when confidence sits in the lowest band.
pub const MIXED_SIGNAL_BULLET: &str =
    "Your answers are still mixed, which is normal. The next step is creating evidence, not forcing certainty.";

/// Bullet rendered when no why-evidence phrase applies.
pub const STILL_CLARIFYING_BULLET: &str =
    "Your answers suggest you're still clarifying what kind of progress you want next.";

/// Placeholder rendered when the decision log is empty.
pub const NO_EVIDENCE_BULLET: &str = "(No evidence captured yet.)";

/// Line rendered in the experiments section when nothing is selected.
pub const NO_EXPERIMENTS_BULLET: &str = "(No experiments selected.)";

/// The two generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summaries {
    pub respondent: String,
    pub supervisor: String,
}

/// Why-evidence bullets: core signals by descending value.
///
/// Non-positive signals are skipped, output is capped, and the lowest
/// confidence tier prepends the fixed mixed-signal bullet before
/// re-truncating. An otherwise empty list renders the fixed clarifying
/// bullet instead.
pub fn why_bullets(
    signals: &SignalVector,
    confidence: &Confidence,
    lowest_band: &str,
    why: &WhyEvidence,
) -> Vec<String> {
    let max = why.max_bullets();
    let mut ranked: Vec<(Signal, i32)> =
        CORE_SIGNALS.iter().map(|&s| (s, signals.get(s))).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut bullets: Vec<String> = Vec::new();
    for (signal, value) in ranked {
        if value <= 0 || bullets.len() >= max {
            continue;
        }
        if let Some(phrase) = why.templates.get(&signal) {
            bullets.push(phrase.clone());
        }
    }

    if confidence.band == lowest_band {
        bullets.insert(0, MIXED_SIGNAL_BULLET.to_string());
        bullets.truncate(max);
    } else if bullets.is_empty() {
        bullets.push(STILL_CLARIFYING_BULLET.to_string());
    }
    bullets
}

/// The last `max` decision-log entries as evidence bullets, chronological.
pub fn evidence_bullets(log: &DecisionLog, max: usize) -> Vec<String> {
    let picks = log.last_chronological(max);
    if picks.is_empty() {
        return vec![NO_EVIDENCE_BULLET.to_string()];
    }
    picks
        .iter()
        .map(|e| format!("{} → “{}”", e.prompt, e.answer_label))
        .collect()
}

/// Everything the generator reads. All references: generation never mutates.
pub struct SummaryInputs<'a> {
    pub path: Option<&'a PathSpec>,
    pub signals: &'a SignalVector,
    pub confidence: &'a Confidence,
    pub lowest_band: &'a str,
    pub decision_log: &'a DecisionLog,
    pub why: &'a WhyEvidence,
    pub sections: &'a SummarySections,
    pub experiments: &'a [ExperimentSpec],
    pub focus_statement: &'a str,
    pub open_question: &'a str,
    pub translation: &'a TranslationResult,
}

fn path_line(sections: &SummarySections, path: Option<&PathSpec>) -> String {
    match path {
        Some(p) if !p.short.is_empty() => {
            format!("{}: {} — {}", sections.recommended_path, p.label, p.short)
        }
        Some(p) => format!("{}: {}", sections.recommended_path, p.label),
        None => format!("{}: (not yet decided)", sections.recommended_path),
    }
}

fn push_section(out: &mut Vec<String>, label: &str, body: &str) {
    out.push(String::new());
    out.push(label.to_string());
    out.push(body.to_string());
}

fn push_bullets(out: &mut Vec<String>, label: &str, bullets: &[String]) {
    out.push(String::new());
    out.push(label.to_string());
    for bullet in bullets {
        out.push(format!("{}{}", BULLET, bullet));
    }
}

/// Renders both documents.
pub fn generate(inputs: &SummaryInputs<'_>) -> Summaries {
    let why = why_bullets(
        inputs.signals,
        inputs.confidence,
        inputs.lowest_band,
        inputs.why,
    );
    let evidence = evidence_bullets(inputs.decision_log, inputs.sections.evidence_max);
    let experiment_bullets: Vec<String> = if inputs.experiments.is_empty() {
        vec![NO_EXPERIMENTS_BULLET.to_string()]
    } else {
        inputs
            .experiments
            .iter()
            .map(|e| {
                if e.timeframe.is_empty() {
                    e.label.clone()
                } else {
                    format!("{} ({})", e.label, e.timeframe)
                }
            })
            .collect()
    };

    let mut respondent: Vec<String> = Vec::new();
    respondent.push(inputs.sections.respondent_heading.clone());
    respondent.push(String::new());
    respondent.push(path_line(inputs.sections, inputs.path));
    push_bullets(&mut respondent, &inputs.sections.why, &why);
    push_bullets(&mut respondent, &inputs.sections.evidence, &evidence);
    push_section(&mut respondent, &inputs.sections.focus, inputs.focus_statement);
    push_bullets(&mut respondent, &inputs.sections.experiments, &experiment_bullets);
    push_section(
        &mut respondent,
        &inputs.sections.open_question,
        inputs.open_question,
    );

    let translation = inputs.translation;
    let mut supervisor: Vec<String> = Vec::new();
    supervisor.push(inputs.sections.supervisor_heading.clone());
    supervisor.push(String::new());
    supervisor.push(path_line(inputs.sections, inputs.path));
    push_section(
        &mut supervisor,
        &inputs.sections.translation,
        &translation.translation,
    );
    push_bullets(
        &mut supervisor,
        &inputs.sections.coaching_focus,
        &translation.coaching_focus,
    );
    push_bullets(&mut supervisor, &inputs.sections.watchouts, &translation.watchouts);
    push_section(&mut supervisor, &inputs.sections.leader_ask, &translation.leader_ask);
    push_section(
        &mut supervisor,
        &inputs.sections.pressure_test,
        &translation.pressure_test,
    );
    push_bullets(
        &mut supervisor,
        &inputs.sections.success_criteria,
        &translation.success_criteria,
    );
    push_section(
        &mut supervisor,
        &inputs.sections.checkpoint,
        &format!("Check in after {} days.", translation.checkpoint_days),
    );

    Summaries {
        respondent: respondent.join("\n"),
        supervisor: supervisor.join("\n"),
    }
}
