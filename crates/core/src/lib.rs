//! LLM extraction-accuracy checking against the RISC-V Unified Database.
//!
//! This crate implements the comparison core of `udbcheck` with the following:
//! 1. **Loaders:** UDB ground-truth YAML and LLM output JSON, each normalized
//!    into a common parameter list.
//! 2. **Comparator:** Name-set partition (identified, missed, hallucinated),
//!    a type cross-check for misclassifications, and precision/recall/F1.
//! 3. **Reporter:** Markdown accuracy-report rendering and file output.
//!
//! The pipeline is linear and single-shot: load both documents, compare once,
//! write one report. Every failure is fatal (see [`error::Error`]); there is
//! no retry or partial-output path.

/// Parameter-set comparison and accuracy metrics.
pub mod compare;
/// Failure modes (I/O, parse, missing-field), all fatal.
pub mod error;
/// Document loaders for the ground-truth and model-output formats.
pub mod loader;
/// Common parameter records shared by both loaders.
pub mod param;
/// Markdown report rendering and output.
pub mod report;

/// Comparison outcome; produced by [`compare::compare`], consumed by the reporter.
pub use crate::compare::Comparison;
/// Crate-wide error and result types.
pub use crate::error::{Error, Result};
/// Common parameter record and its type classification.
pub use crate::param::{ParamType, Parameter};
