//! Domain layer: the pure engines behind the questionnaire.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (signal vocabulary, phases)
//! - `decision_log` - Ordered record of applied answers
//! - `scoring` - Signal/score accumulator and full recompute
//! - `confidence` - Band classification over the score gap
//! - `routing` - Ordered override rules and the score-ranked fallback
//! - `intent` - Path intent and per-path version records
//! - `experiments` - Default selection and bounded manual toggling
//! - `focus` - Focus statement template rendering
//! - `translation` - Supervisor-facing intent translation
//! - `summary` - Composition of the two text documents

pub mod confidence;
pub mod decision_log;
pub mod experiments;
pub mod focus;
pub mod foundation;
pub mod intent;
pub mod routing;
pub mod scoring;
pub mod summary;
pub mod translation;
