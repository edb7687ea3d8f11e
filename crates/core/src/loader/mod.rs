//! Document loaders for the two comparison sources.
//!
//! Each loader parses one structured document into the common parameter list:
//! 1. **Ground Truth:** A RISC-V Unified Database CSR description in YAML,
//!    whose `fields` mapping enumerates the architectural fields.
//! 2. **Model Output:** An LLM extraction result in JSON, whose `parameters`
//!    sequence lists what the model claims to have found.
//!
//! The two formats normalize differently (bit-range synthesis in particular),
//! so each loader owns its raw document shape and validation rules. Both
//! produce plain [`Parameter`](crate::param::Parameter) lists that the
//! comparator treats identically.

/// Model-output (JSON) loader.
pub mod llm;

/// Ground-truth (UDB YAML) loader.
pub mod udb;
