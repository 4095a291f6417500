//! Career Compass - guided career-direction questionnaire engine.
//!
//! Turns an externally supplied configuration document plus an ordered log of
//! multiple-choice answers into ranked path scores, a confidence band, a
//! routed primary/secondary path, per-path version records, an experiment
//! plan, and two rendered text summaries (one for the respondent, one for
//! their supervisor).
//!
//! The crate performs no I/O. Rendering, clipboard/share actions, and the
//! fetch of the configuration document are external collaborators: they hand
//! the document to [`config::QuestionnaireConfig`], drive a
//! [`session::Session`] through its entry points, and read computed state
//! back after every mutation.

pub mod config;
pub mod domain;
pub mod session;

pub use config::{ConfigError, QuestionnaireConfig};
pub use session::Session;
