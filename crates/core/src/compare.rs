//! Parameter-set comparison and accuracy metrics.
//!
//! This module scores a model's extraction against the ground truth. It
//! performs:
//! 1. **Set Partition:** Splits the two name sets into correctly identified,
//!    missed, and hallucinated parameters by exact name match.
//! 2. **Type Cross-Check:** Flags correctly identified parameters whose two
//!    records disagree on the type classification. Misclassification never
//!    affects the name-set counts; a parameter with the right name and the
//!    wrong type still counts as identified.
//! 3. **Metrics:** Precision, recall, and F1 over the name sets, with every
//!    zero-denominator case defined as zero.

use std::collections::BTreeMap;

use crate::param::{ParamType, Parameter};

/// A correctly identified parameter whose type classification is wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Misclassification {
    /// The shared parameter name.
    pub name: String,
    /// Type recorded in the ground truth.
    pub udb_type: ParamType,
    /// Type claimed by the model.
    pub llm_type: ParamType,
    /// Confidence the model attached to its claim, in percent.
    pub confidence: u8,
}

/// Outcome of comparing one extraction against one ground-truth document.
///
/// The three name lists partition the union of both name sets: every
/// ground-truth name is either correctly identified or missed, and every
/// extracted name is either correctly identified or hallucinated. All lists
/// are sorted by name, so rendering the same comparison twice produces
/// byte-identical output.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Number of parameter records in the ground-truth document.
    pub total_udb: usize,
    /// Number of parameter records in the model output.
    pub total_llm: usize,
    /// Names present in both sources.
    pub correctly_identified: Vec<String>,
    /// Ground-truth names the model failed to extract.
    pub missed: Vec<String>,
    /// Extracted names that do not exist in the ground truth.
    pub hallucinations: Vec<String>,
    /// Correctly identified parameters with a wrong type classification.
    pub misclassified: Vec<Misclassification>,
    /// Fraction of extracted names that are real, zero when nothing was
    /// extracted.
    pub precision: f64,
    /// Fraction of ground-truth names that were extracted, zero for an
    /// empty ground truth.
    pub recall: f64,
    /// Harmonic mean of precision and recall, zero when both are zero.
    pub f1_score: f64,
}

/// Scores an extraction against the ground truth.
///
/// Matching is by exact name only. Within one source, records sharing a name
/// collapse to the last occurrence and a diagnostic is emitted; the totals
/// still count every record as listed.
///
/// # Arguments
///
/// * `udb` - Ground-truth parameters, as loaded from the database.
/// * `llm` - Extracted parameters, as loaded from the model output.
///
/// # Returns
///
/// The full comparison outcome, ready for rendering.
///
/// # Examples
///
/// ```
/// use udbcheck_core::compare::compare;
/// use udbcheck_core::param::{ParamType, Parameter};
///
/// let udb = vec![
///     Parameter::new("MPP", "12-11", ParamType::Named),
///     Parameter::new("SXL", "RV32:, RV64:35-34", ParamType::ConfigDependent),
/// ];
/// let llm = vec![Parameter::new("MPP", "RV32:12-11, RV64:12-11", ParamType::Named)];
///
/// let result = compare(&udb, &llm);
/// assert_eq!(result.correctly_identified, ["MPP"]);
/// assert_eq!(result.missed, ["SXL"]);
/// assert!((result.precision - 1.0).abs() < f64::EPSILON);
/// assert!((result.recall - 0.5).abs() < f64::EPSILON);
/// ```
pub fn compare(udb: &[Parameter], llm: &[Parameter]) -> Comparison {
    let udb_by_name: BTreeMap<&str, &Parameter> =
        udb.iter().map(|p| (p.name.as_str(), p)).collect();
    let llm_by_name: BTreeMap<&str, &Parameter> =
        llm.iter().map(|p| (p.name.as_str(), p)).collect();
    warn_on_collapsed("UDB", udb.len(), udb_by_name.len());
    warn_on_collapsed("LLM", llm.len(), llm_by_name.len());

    // BTreeMap keys iterate in ascending order, so every derived list is
    // already name-sorted.
    let correctly_identified: Vec<String> = udb_by_name
        .keys()
        .filter(|name| llm_by_name.contains_key(*name))
        .map(|name| (*name).to_string())
        .collect();
    let missed: Vec<String> = udb_by_name
        .keys()
        .filter(|name| !llm_by_name.contains_key(*name))
        .map(|name| (*name).to_string())
        .collect();
    let hallucinations: Vec<String> = llm_by_name
        .keys()
        .filter(|name| !udb_by_name.contains_key(*name))
        .map(|name| (*name).to_string())
        .collect();

    let misclassified: Vec<Misclassification> = correctly_identified
        .iter()
        .filter_map(|name| {
            let truth = udb_by_name.get(name.as_str())?;
            let claim = llm_by_name.get(name.as_str())?;
            (truth.kind != claim.kind).then(|| Misclassification {
                name: name.clone(),
                udb_type: truth.kind,
                llm_type: claim.kind,
                confidence: claim.confidence,
            })
        })
        .collect();

    let true_positives = correctly_identified.len();
    let precision = ratio(true_positives, true_positives + hallucinations.len());
    let recall = ratio(true_positives, true_positives + missed.len());
    let f1_score = f1(precision, recall);

    tracing::debug!(
        identified = true_positives,
        missed = missed.len(),
        hallucinated = hallucinations.len(),
        misclassified = misclassified.len(),
        "compared parameter sets"
    );

    Comparison {
        total_udb: udb.len(),
        total_llm: llm.len(),
        correctly_identified,
        missed,
        hallucinations,
        misclassified,
        precision,
        recall,
        f1_score,
    }
}

/// Emits a diagnostic when duplicate names collapsed within one source.
fn warn_on_collapsed(source: &str, listed: usize, unique: usize) {
    if listed > unique {
        tracing::warn!(
            source,
            collapsed = listed - unique,
            "duplicate parameter names collapsed to their last occurrence"
        );
    }
}

/// Hit count over a denominator, defined as zero for an empty denominator.
pub(crate) fn ratio(hits: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        hits as f64 / denominator as f64
    }
}

/// Harmonic mean of precision and recall, zero when both are zero.
fn f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}
