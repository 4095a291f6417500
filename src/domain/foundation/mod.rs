//! Shared domain primitives (signal vocabulary, phases).

mod phase;
mod signals;

pub use phase::Phase;
pub use signals::{OptionSignals, Signal, SignalVector, ALL_SIGNALS, CORE_SIGNALS};
