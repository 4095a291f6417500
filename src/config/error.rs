//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the questionnaire configuration.
///
/// Any of these is fatal: the session never starts against a partially
/// valid document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration integrity check failed: {0}")]
    Integrity(#[from] IntegrityError),
}

/// Referential and structural problems detected after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("Duplicate path id '{0}'")]
    DuplicatePathId(String),

    #[error("Duplicate question id '{question_id}' in {context}")]
    DuplicateQuestionId { context: String, question_id: String },

    #[error("Duplicate option id '{option_id}' in question '{question_id}'")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },

    #[error("Unknown path id '{path_id}' referenced by {context}")]
    UnknownPath { context: String, path_id: String },

    #[error("Version field '{field}' is not declared for path '{path_id}' ({context})")]
    UndeclaredVersionField {
        path_id: String,
        field: String,
        context: String,
    },

    #[error("Focus template for path '{path_id}' uses unknown slot '{{{slot}}}'")]
    UnknownTemplateSlot { path_id: String, slot: String },

    #[error("Refinement option '{option_id}' in question '{question_id}' carries path score deltas")]
    ScoresInRefinement {
        question_id: String,
        option_id: String,
    },

    #[error("Confidence band list is empty")]
    NoConfidenceBands,

    #[error("Question '{0}' has a selection cap of zero")]
    ZeroSelectionCap(String),

    #[error("defaultPickCount {default} exceeds maxPickCount {max}")]
    PickCountsInverted { default: usize, max: usize },
}
