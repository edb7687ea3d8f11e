//! Ground-truth loader for RISC-V Unified Database CSR documents.
//!
//! This module parses a UDB register description (YAML) into the common
//! parameter list. It performs:
//! 1. **Field Walk:** Every entry of the top-level `fields` mapping becomes
//!    one [`Parameter`]. A document without `fields`, such as a length-only
//!    register stub, yields an empty list rather than an error.
//! 2. **Bit-Range Resolution:** An explicit `location` wins; otherwise a
//!    combined `RV32:…, RV64:…` string is synthesized from the per-ISA
//!    locations; a field with neither is reported as `unknown`.
//! 3. **Type Classification:** A field carrying a `definedBy` predicate is
//!    configuration-dependent; every other field is named. The database
//!    never marks reserved regions, so no ground-truth field is unnamed.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::param::{DEFAULT_CONFIDENCE, ParamType, Parameter, clip_description};

/// Top-level shape of a UDB CSR document.
///
/// Only the `fields` mapping is consumed. The register-level keys (name,
/// address, privilege mode, length) do not describe parameters and are
/// ignored.
#[derive(Debug, Deserialize)]
struct UdbDocument {
    /// Field name to field body. Absent in registers defined without fields.
    #[serde(default)]
    fields: BTreeMap<String, UdbField>,
}

/// One entry of the `fields` mapping.
#[derive(Debug, Deserialize)]
struct UdbField {
    /// Bit location shared by both base ISAs.
    location: Option<BitLocation>,
    /// RV32-specific bit location.
    location_rv32: Option<BitLocation>,
    /// RV64-specific bit location.
    location_rv64: Option<BitLocation>,
    /// Extension predicate. Its presence marks the field
    /// configuration-dependent.
    #[serde(rename = "definedBy")]
    defined_by: Option<serde_yaml::Value>,
    /// Free-text field description.
    description: Option<String>,
}

/// A bit-location scalar: a single bit index or a textual range.
///
/// UDB writes single-bit fields as bare integers (`location: 3`) and wider
/// fields as range strings (`location: 12-11`).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum BitLocation {
    /// Single bit index.
    Bit(u64),
    /// Textual range.
    Range(String),
}

impl fmt::Display for BitLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitLocation::Bit(bit) => write!(f, "{bit}"),
            BitLocation::Range(text) => f.write_str(text),
        }
    }
}

impl UdbField {
    /// Builds the common parameter record for the field named `name`.
    fn into_parameter(self, name: String) -> Parameter {
        let kind = if self.defined_by.is_some() {
            ParamType::ConfigDependent
        } else {
            ParamType::Named
        };
        Parameter {
            name,
            bit_range: self.bit_range(),
            kind,
            config_dependency: self.defined_by.as_ref().map(render_predicate),
            description: clip_description(self.description.as_deref().unwrap_or("").trim()),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Resolves the field's bit range.
    ///
    /// Preference order: the shared `location`, then a synthesized
    /// `RV32:…, RV64:…` pair when either per-ISA location exists, with a
    /// missing side rendered empty, then the literal `unknown`.
    fn bit_range(&self) -> String {
        if let Some(location) = &self.location {
            return location.to_string();
        }
        if self.location_rv32.is_none() && self.location_rv64.is_none() {
            return String::from("unknown");
        }
        let rv32 = self
            .location_rv32
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let rv64 = self
            .location_rv64
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        format!("RV32:{rv32}, RV64:{rv64}")
    }
}

/// Renders a `definedBy` predicate as display text.
///
/// Predicates are usually a bare extension name, but composite
/// `anyOf`/`allOf` trees occur in the database; those are flattened to a
/// single line of YAML.
fn render_predicate(predicate: &serde_yaml::Value) -> String {
    match predicate {
        serde_yaml::Value::String(name) => name.clone(),
        other => serde_yaml::to_string(other)
            .map_or_else(|_| String::from("?"), |text| text.trim().replace('\n', " ")),
    }
}

/// Loads the ground-truth parameter list from a UDB CSR document.
///
/// # Arguments
///
/// * `path` - Path of the YAML document to read.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Yaml`]
/// when its contents are not a structurally valid CSR document.
pub fn load(path: &Path) -> Result<Vec<Parameter>> {
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    let document: UdbDocument = serde_yaml::from_str(&text).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let parameters: Vec<Parameter> = document
        .fields
        .into_iter()
        .map(|(name, field)| field.into_parameter(name))
        .collect();
    tracing::debug!(
        path = %path.display(),
        count = parameters.len(),
        "loaded UDB ground truth"
    );
    Ok(parameters)
}
