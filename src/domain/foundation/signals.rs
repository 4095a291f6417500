//! Signal vocabulary and the running signal vector.
//!
//! Signals come in two kinds: eight named indicators that accumulate
//! additively across answers, and three scalar "scale" observations
//! (ambiguity, change, readiness) where the latest answering option wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of accumulating signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Signal {
    Depth,
    Scope,
    Breadth,
    Recalibration,
    Execution,
    DecisionMaking,
    People,
    Learning,
}

/// All signals in canonical order.
pub const ALL_SIGNALS: &[Signal] = &[
    Signal::Depth,
    Signal::Scope,
    Signal::Breadth,
    Signal::Recalibration,
    Signal::Execution,
    Signal::DecisionMaking,
    Signal::People,
    Signal::Learning,
];

/// The four core signals read by routing and why-evidence generation.
pub const CORE_SIGNALS: &[Signal] = &[
    Signal::Depth,
    Signal::Scope,
    Signal::Breadth,
    Signal::Recalibration,
];

impl Signal {
    /// The key this signal uses in the configuration document.
    pub fn key(&self) -> &'static str {
        match self {
            Signal::Depth => "depth",
            Signal::Scope => "scope",
            Signal::Breadth => "breadth",
            Signal::Recalibration => "recalibration",
            Signal::Execution => "execution",
            Signal::DecisionMaking => "decisionMaking",
            Signal::People => "people",
            Signal::Learning => "learning",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Signal payload carried by an answer option.
///
/// The eight named deltas accumulate; the three scales overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSignals {
    #[serde(default)]
    pub depth: Option<i32>,
    #[serde(default)]
    pub scope: Option<i32>,
    #[serde(default)]
    pub breadth: Option<i32>,
    #[serde(default)]
    pub recalibration: Option<i32>,
    #[serde(default)]
    pub execution: Option<i32>,
    #[serde(default)]
    pub decision_making: Option<i32>,
    #[serde(default)]
    pub people: Option<i32>,
    #[serde(default)]
    pub learning: Option<i32>,
    #[serde(default)]
    pub ambiguity: Option<i32>,
    #[serde(default)]
    pub change: Option<i32>,
    #[serde(default)]
    pub readiness: Option<i32>,
}

impl OptionSignals {
    /// Additive delta for a signal, zero when absent.
    pub fn delta(&self, signal: Signal) -> i32 {
        let value = match signal {
            Signal::Depth => self.depth,
            Signal::Scope => self.scope,
            Signal::Breadth => self.breadth,
            Signal::Recalibration => self.recalibration,
            Signal::Execution => self.execution,
            Signal::DecisionMaking => self.decision_making,
            Signal::People => self.people,
            Signal::Learning => self.learning,
        };
        value.unwrap_or(0)
    }
}

/// Running totals for the eight signals plus the three scale observations.
///
/// Mutated only by full recompute from the answer log; never patched
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalVector {
    pub depth: i32,
    pub scope: i32,
    pub breadth: i32,
    pub recalibration: i32,
    pub execution: i32,
    pub decision_making: i32,
    pub people: i32,
    pub learning: i32,
    pub ambiguity: Option<i32>,
    pub change: Option<i32>,
    pub readiness: Option<i32>,
}

impl SignalVector {
    /// Current total for a signal.
    pub fn get(&self, signal: Signal) -> i32 {
        match signal {
            Signal::Depth => self.depth,
            Signal::Scope => self.scope,
            Signal::Breadth => self.breadth,
            Signal::Recalibration => self.recalibration,
            Signal::Execution => self.execution,
            Signal::DecisionMaking => self.decision_making,
            Signal::People => self.people,
            Signal::Learning => self.learning,
        }
    }

    /// Adds a delta onto a signal total. Never clamped.
    pub fn add(&mut self, signal: Signal, delta: i32) {
        let slot = match signal {
            Signal::Depth => &mut self.depth,
            Signal::Scope => &mut self.scope,
            Signal::Breadth => &mut self.breadth,
            Signal::Recalibration => &mut self.recalibration,
            Signal::Execution => &mut self.execution,
            Signal::DecisionMaking => &mut self.decision_making,
            Signal::People => &mut self.people,
            Signal::Learning => &mut self.learning,
        };
        *slot += delta;
    }

    /// Applies an option's payload: deltas accumulate, scales overwrite.
    pub fn apply(&mut self, payload: &OptionSignals) {
        for &signal in ALL_SIGNALS {
            let delta = payload.delta(signal);
            if delta != 0 {
                self.add(signal, delta);
            }
        }
        if let Some(value) = payload.ambiguity {
            self.ambiguity = Some(value);
        }
        if let Some(value) = payload.change {
            self.change = Some(value);
        }
        if let Some(value) = payload.readiness {
            self.readiness = Some(value);
        }
    }

    /// The highest-valued core signal; first-seen wins ties.
    pub fn dominant_core(&self) -> Signal {
        let mut best = CORE_SIGNALS[0];
        for &signal in CORE_SIGNALS {
            if self.get(signal) > self.get(best) {
                best = signal;
            }
        }
        best
    }
}
