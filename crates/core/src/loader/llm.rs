//! Model-output loader for LLM extraction results.
//!
//! This module parses an extraction document (JSON) into the common parameter
//! list. It performs:
//! 1. **Entry Walk:** Every element of the top-level `parameters` sequence
//!    becomes one [`Parameter`]. A document without the key yields an empty
//!    list, meaning the model extracted nothing.
//! 2. **Validation:** `name` and `type` are required per entry; a missing key
//!    is reported with the entry's position rather than as an opaque parse
//!    failure.
//! 3. **Bit-Range Synthesis:** The two per-ISA ranges always combine into an
//!    `RV32:…, RV64:…` string, with `N/A` standing in for a missing side.
//!    This intentionally differs from the ground-truth loader, which prefers
//!    a single shared location.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::param::{DEFAULT_CONFIDENCE, ParamType, Parameter, clip_description};

/// Top-level shape of an LLM extraction document.
///
/// Register-level keys the model may emit alongside `parameters` are
/// ignored.
#[derive(Debug, Deserialize)]
struct LlmDocument {
    /// Extracted parameter entries.
    #[serde(default)]
    parameters: Vec<LlmEntry>,
}

/// One element of the `parameters` sequence.
///
/// The required keys are modeled as options so their absence surfaces as
/// [`Error::MissingField`] carrying the entry index, instead of failing the
/// whole-document parse.
#[derive(Debug, Deserialize)]
struct LlmEntry {
    /// Field identifier. Required.
    name: Option<String>,
    /// Type classification. Required; an unrecognized spelling fails the
    /// document parse.
    #[serde(rename = "type")]
    kind: Option<ParamType>,
    /// RV32 bit range as extracted.
    bit_range_rv32: Option<String>,
    /// RV64 bit range as extracted.
    bit_range_rv64: Option<String>,
    /// Configuration predicate claimed by the model.
    config_dependency: Option<String>,
    /// Free-text explanation.
    description: Option<String>,
    /// Extraction confidence in percent.
    confidence: Option<u8>,
}

impl LlmEntry {
    /// Validates required keys and builds the common parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when `name` or `type` is absent from
    /// the entry at `index`.
    fn into_parameter(self, index: usize) -> Result<Parameter> {
        let name = self.name.ok_or_else(|| Error::MissingField {
            field: "name",
            index,
        })?;
        let kind = self.kind.ok_or_else(|| Error::MissingField {
            field: "type",
            index,
        })?;
        let rv32 = self.bit_range_rv32.as_deref().unwrap_or("N/A");
        let rv64 = self.bit_range_rv64.as_deref().unwrap_or("N/A");
        Ok(Parameter {
            name,
            bit_range: format!("RV32:{rv32}, RV64:{rv64}"),
            kind,
            config_dependency: self.config_dependency,
            description: clip_description(self.description.as_deref().unwrap_or("")),
            confidence: self.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        })
    }
}

/// Loads the extracted parameter list from an LLM output document.
///
/// # Arguments
///
/// * `path` - Path of the JSON document to read.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Json`] when
/// its contents are not valid JSON, and [`Error::MissingField`] when an
/// entry lacks a required key.
pub fn load(path: &Path) -> Result<Vec<Parameter>> {
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    let document: LlmDocument = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let parameters = document
        .parameters
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_parameter(index))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        path = %path.display(),
        count = parameters.len(),
        "loaded LLM output"
    );
    Ok(parameters)
}
