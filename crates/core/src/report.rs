//! Markdown accuracy-report rendering and output.
//!
//! This module turns a [`Comparison`] into the report document. It provides:
//! 1. **Rendering:** A fixed-structure markdown template, filled with the
//!    summary table, the three sorted name sections, the misclassification
//!    detail, and a short derived analysis.
//! 2. **Output:** Writing the rendered text to a destination path, creating
//!    missing parent directories on the way.
//!
//! Rendering is pure. The same comparison always renders to byte-identical
//! text, so regenerating a report never produces a spurious diff.

use std::fs;
use std::path::Path;

use crate::compare::{Comparison, Misclassification, ratio};
use crate::error::{Error, Result};

/// Renders the full markdown report for one comparison.
///
/// # Arguments
///
/// * `result` - The comparison outcome to render.
/// * `llm_name` - Human-readable name of the model under test.
///
/// # Returns
///
/// The complete report text, ending with a trailing newline.
pub fn render(result: &Comparison, llm_name: &str) -> String {
    let mut lines: Vec<String> = vec![
        String::from("# LLM Parameter Extraction Accuracy Report"),
        String::new(),
        format!("## LLM: {llm_name}"),
        String::new(),
        String::from("## Summary Statistics"),
        String::new(),
        String::from("| Metric | Value |"),
        String::from("|--------|-------|"),
        format!("| Total UDB Parameters | {} |", result.total_udb),
        format!("| Total LLM Parameters | {} |", result.total_llm),
        format!(
            "| Correctly Identified | {} |",
            result.correctly_identified.len()
        ),
        format!("| Missed | {} |", result.missed.len()),
        format!("| Hallucinations | {} |", result.hallucinations.len()),
        format!("| Misclassified | {} |", result.misclassified.len()),
        format!("| **Precision** | **{}** |", pct2(result.precision)),
        format!("| **Recall** | **{}** |", pct2(result.recall)),
        format!("| **F1 Score** | **{:.3}** |", result.f1_score),
        String::new(),
    ];

    push_section(
        &mut lines,
        "Correctly Identified Parameters",
        &result.correctly_identified,
    );
    push_section(&mut lines, "Missed Parameters", &result.missed);
    push_section(&mut lines, "Hallucinations", &result.hallucinations);
    push_misclassifications(&mut lines, &result.misclassified);
    push_analysis(&mut lines, result);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Renders the report and writes it to `path`.
///
/// Missing parent directories are created first, so a destination like
/// `analysis/reports/out.md` works against an empty tree.
///
/// # Arguments
///
/// * `result` - The comparison outcome to render.
/// * `llm_name` - Human-readable name of the model under test.
/// * `path` - Destination of the report document.
///
/// # Errors
///
/// Returns [`Error::Io`] when a parent directory or the report file itself
/// cannot be created or written.
pub fn write(result: &Comparison, llm_name: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
        }
    }
    fs::write(path, render(result, llm_name)).map_err(|source| Error::io(path, source))?;
    tracing::debug!(path = %path.display(), "report written");
    Ok(())
}

/// Appends one bulleted name section, `## {title} ({count})`.
///
/// An empty list leaves the section body as a single blank line, keeping
/// the section skeleton stable across inputs.
fn push_section(lines: &mut Vec<String>, title: &str, names: &[String]) {
    lines.push(format!("## {title} ({})", names.len()));
    lines.push(String::new());
    if names.is_empty() {
        lines.push(String::new());
    } else {
        for name in names {
            lines.push(format!("- {name}"));
        }
    }
    lines.push(String::new());
}

/// Appends the misclassification section with type and confidence detail.
fn push_misclassifications(lines: &mut Vec<String>, entries: &[Misclassification]) {
    lines.push(format!("## Misclassifications ({})", entries.len()));
    lines.push(String::new());
    if entries.is_empty() {
        lines.push(String::new());
    } else {
        for entry in entries {
            lines.push(format!(
                "- **{}**: UDB={}, LLM={} (confidence: {}%)",
                entry.name, entry.udb_type, entry.llm_type, entry.confidence
            ));
        }
    }
    lines.push(String::new());
}

/// Appends the fixed analysis section derived from the metrics.
fn push_analysis(lines: &mut Vec<String>, result: &Comparison) {
    // Share of the ground truth that was missed, zero for an empty truth.
    let missed_share = ratio(result.missed.len(), result.total_udb);

    lines.push(String::from("## Analysis"));
    lines.push(String::new());
    lines.push(String::from("### Strengths"));
    lines.push(format!(
        "- Precision of {} indicates low hallucination rate",
        pct1(result.precision)
    ));
    lines.push(format!(
        "- Recall of {} shows good coverage of actual parameters",
        pct1(result.recall)
    ));
    lines.push(String::new());
    lines.push(String::from("### Weaknesses"));
    lines.push(format!(
        "- Missed {} parameters ({} of total)",
        result.missed.len(),
        pct1(missed_share)
    ));
    lines.push(format!(
        "- {} hallucinated parameters need filtering",
        result.hallucinations.len()
    ));
    lines.push(String::new());
    lines.push(String::from("### Recommendations"));
    lines.push(String::from(
        "1. Add negative examples for hallucinated parameters",
    ));
    lines.push(String::from(
        "2. Provide UDB examples for missed parameters in few-shot learning",
    ));
    lines.push(String::from("3. Refine prompt to reduce misclassifications"));
    lines.push(String::new());
    lines.push(String::from("---"));
    lines.push(String::from("*Generated by udbcheck*"));
}

/// Renders a ratio as a percentage with two decimal places, like `87.50%`.
fn pct2(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Renders a ratio as a percentage with one decimal place, like `87.5%`.
fn pct1(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
