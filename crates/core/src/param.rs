//! Common architectural-parameter records.
//!
//! This module defines the data model shared by both document loaders. It provides:
//! 1. **Parameter Records:** One immutable value per CSR field, from either source.
//! 2. **Type Classification:** The three-way split between named, unnamed, and
//!    configuration-dependent fields.
//! 3. **Normalization Helpers:** Description truncation and the default confidence
//!    assigned where a source carries none.

use std::fmt;

use serde::Deserialize;

/// Maximum number of characters retained from a field description.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Confidence assigned where a source does not state one.
///
/// Ground-truth records always carry this value; model records fall back to it
/// when the extraction omits a confidence figure.
pub const DEFAULT_CONFIDENCE: u8 = 100;

/// Classification of how a CSR field's meaning is determined.
///
/// Wire spellings follow the extraction output format (`NAMED`,
/// `UNNAMED`, `CONFIG_DEPENDENT`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamType {
    /// Architecturally named field with a fixed meaning.
    Named,
    /// Field present in the encoding but carrying no architectural name,
    /// such as reserved (`WPRI`) regions.
    Unnamed,
    /// Field whose presence or meaning depends on a configuration
    /// predicate, typically an implemented extension.
    ConfigDependent,
}

impl fmt::Display for ParamType {
    /// Formats the type with its wire spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Named => write!(f, "NAMED"),
            ParamType::Unnamed => write!(f, "UNNAMED"),
            ParamType::ConfigDependent => write!(f, "CONFIG_DEPENDENT"),
        }
    }
}

/// One architectural parameter (CSR field), as loaded from either source.
///
/// Parameters are immutable value records: a loader creates them once and
/// nothing mutates them afterwards. Two independent lists exist per run, the
/// ground truth and the model output, and records from the two lists are only
/// ever related by exact `name` equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Field identifier, unique within its source document. This is the
    /// match key between the two sources.
    pub name: String,
    /// Textual bit position, either a single spelling or a combined
    /// `RV32:…, RV64:…` form when the two base ISAs differ.
    pub bit_range: String,
    /// How the field's meaning is determined.
    pub kind: ParamType,
    /// Configuration predicate governing the field, populated when `kind`
    /// is [`ParamType::ConfigDependent`].
    pub config_dependency: Option<String>,
    /// Free-text explanation, truncated to [`DESCRIPTION_LIMIT`] characters.
    pub description: String,
    /// Extraction confidence in percent (0 to 100). Ground-truth records
    /// always hold [`DEFAULT_CONFIDENCE`].
    pub confidence: u8,
}

impl Parameter {
    /// Creates a parameter with the given identity and empty optional data.
    ///
    /// # Arguments
    ///
    /// * `name` - The field identifier used for matching.
    /// * `bit_range` - The textual bit position.
    /// * `kind` - The field's type classification.
    ///
    /// # Returns
    ///
    /// A parameter with no configuration dependency, an empty description,
    /// and the default confidence.
    pub fn new(name: impl Into<String>, bit_range: impl Into<String>, kind: ParamType) -> Self {
        Self {
            name: name.into(),
            bit_range: bit_range.into(),
            kind,
            config_dependency: None,
            description: String::new(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// Truncates a description to [`DESCRIPTION_LIMIT`] characters.
///
/// Counts characters rather than bytes so multi-byte text never splits
/// mid-codepoint.
pub(crate) fn clip_description(text: &str) -> String {
    text.chars().take(DESCRIPTION_LIMIT).collect()
}
