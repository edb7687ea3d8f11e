//! # UDB Ground-Truth Loader Tests
//!
//! This module contains unit tests for parsing UDB CSR documents, covering
//! bit-range resolution, `definedBy` classification, description
//! normalization, and the loader's error reporting.

use std::io::Write;

use tempfile::NamedTempFile;

use udbcheck_core::error::Error;
use udbcheck_core::loader::udb;
use udbcheck_core::param::{DEFAULT_CONFIDENCE, DESCRIPTION_LIMIT, ParamType, Parameter};

/// A cut-down mstatus document covering the location spellings the
/// database uses: shared single-bit, shared range, split RV32/RV64, and
/// RV64-only with a `definedBy` predicate.
const MSTATUS_YAML: &str = r#"$schema: csr_schema.json#
kind: csr
name: mstatus
long_name: Machine Status
address: 0x300
priv_mode: M
length: MXLEN
description: The mstatus register tracks and controls the hart's operating state.
definedBy: Sm
fields:
  MIE:
    location: 3
    description: Machine-mode interrupt enable.
  MPP:
    location: 12-11
    description: Machine-mode previous privilege level.
  SD:
    location_rv32: 31
    location_rv64: 63
    description: State dirty summary bit.
  SXL:
    location_rv64: 35-34
    definedBy: S
    description: Supervisor-mode base ISA width control.
"#;

/// Helper function to write a document to a temporary file.
fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Helper function to load parameters from an inline document.
fn load_inline(content: &str) -> Vec<Parameter> {
    let file = write_temp(content);
    udb::load(file.path()).unwrap()
}

#[test]
fn test_loads_every_field() {
    let params = load_inline(MSTATUS_YAML);
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["MIE", "MPP", "SD", "SXL"]);
}

#[test]
fn test_shared_location_spellings() {
    let params = load_inline(MSTATUS_YAML);
    // Single-bit locations are bare integers in the document.
    assert_eq!(params[0].bit_range, "3");
    // Multi-bit locations are range strings.
    assert_eq!(params[1].bit_range, "12-11");
}

#[test]
fn test_split_location_synthesis() {
    let params = load_inline(MSTATUS_YAML);
    assert_eq!(params[2].name, "SD");
    assert_eq!(params[2].bit_range, "RV32:31, RV64:63");
}

#[test]
fn test_rv64_only_location_leaves_rv32_empty() {
    let params = load_inline(MSTATUS_YAML);
    assert_eq!(params[3].name, "SXL");
    assert_eq!(params[3].bit_range, "RV32:, RV64:35-34");
}

#[test]
fn test_rv32_only_location_leaves_rv64_empty() {
    let params = load_inline(
        "fields:\n  CODE:\n    location_rv32: \"31:0\"\n    description: Trap cause code.\n",
    );
    assert_eq!(params[0].bit_range, "RV32:31:0, RV64:");
}

#[test]
fn test_field_without_location_is_unknown() {
    let params = load_inline("fields:\n  GHOST:\n    description: No location given.\n");
    assert_eq!(params[0].bit_range, "unknown");
}

#[test]
fn test_defined_by_marks_config_dependent() {
    let params = load_inline(MSTATUS_YAML);

    // SXL carries a definedBy predicate.
    assert_eq!(params[3].kind, ParamType::ConfigDependent);
    assert_eq!(params[3].config_dependency.as_deref(), Some("S"));

    // MIE does not.
    assert_eq!(params[0].kind, ParamType::Named);
    assert_eq!(params[0].config_dependency, None);
}

#[test]
fn test_composite_defined_by_flattens_to_one_line() {
    let params = load_inline(
        "fields:\n  TW:\n    location: 21\n    definedBy:\n      anyOf:\n      - S\n      - H\n",
    );
    assert_eq!(params[0].kind, ParamType::ConfigDependent);
    assert_eq!(params[0].config_dependency.as_deref(), Some("anyOf: - S - H"));
}

#[test]
fn test_description_is_trimmed() {
    let params = load_inline("fields:\n  MIE:\n    location: 3\n    description: \"  padded  \"\n");
    assert_eq!(params[0].description, "padded");
}

#[test]
fn test_description_is_clipped() {
    let long = "a".repeat(DESCRIPTION_LIMIT + 50);
    let document = format!("fields:\n  MIE:\n    location: 3\n    description: {long}\n");
    let params = load_inline(&document);
    assert_eq!(params[0].description.len(), DESCRIPTION_LIMIT);
}

#[test]
fn test_missing_description_is_empty() {
    let params = load_inline("fields:\n  MIE:\n    location: 3\n");
    assert_eq!(params[0].description, "");
}

#[test]
fn test_ground_truth_confidence_is_full() {
    let params = load_inline(MSTATUS_YAML);
    assert!(params.iter().all(|p| p.confidence == DEFAULT_CONFIDENCE));
}

#[test]
fn test_document_without_fields_is_empty() {
    let params = load_inline("kind: csr\nname: misa\nlength: 32\n");
    assert!(params.is_empty());
}

#[test]
fn test_empty_fields_mapping_is_empty() {
    let params = load_inline("fields: {}\n");
    assert!(params.is_empty());
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let file = write_temp("fields: [MIE, MPP\n");
    let err = udb::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Yaml { .. }));
}

#[test]
fn test_wrong_fields_shape_is_parse_error() {
    let file = write_temp("fields: 42\n");
    let err = udb::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Yaml { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = udb::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
