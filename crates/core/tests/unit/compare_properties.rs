//! # Comparator Properties
//!
//! Property-based tests exercising the comparator over arbitrary name sets:
//! partition laws, metric ranges, zero-denominator conventions, and the
//! independence of misclassification from the name partition.

use std::collections::BTreeSet;

use proptest::prelude::*;

use udbcheck_core::compare::compare;
use udbcheck_core::param::{ParamType, Parameter};

/// Builds one named parameter per entry of a name set.
fn params_from(names: &BTreeSet<String>) -> Vec<Parameter> {
    names
        .iter()
        .map(|name| Parameter::new(name.clone(), "0", ParamType::Named))
        .collect()
}

proptest! {
    /// Metrics always land in the unit interval and never go NaN.
    #[test]
    fn prop_metrics_in_unit_interval(
        udb_names in prop::collection::btree_set("[A-Z]{1,6}", 0..24),
        llm_names in prop::collection::btree_set("[A-Z]{1,6}", 0..24)
    ) {
        let result = compare(&params_from(&udb_names), &params_from(&llm_names));
        prop_assert!((0.0..=1.0).contains(&result.precision));
        prop_assert!((0.0..=1.0).contains(&result.recall));
        prop_assert!((0.0..=1.0).contains(&result.f1_score));
    }

    /// Every ground-truth name is identified or missed; every extracted
    /// name is identified or hallucinated.
    #[test]
    fn prop_partition_laws(
        udb_names in prop::collection::btree_set("[A-Z]{1,6}", 0..24),
        llm_names in prop::collection::btree_set("[A-Z]{1,6}", 0..24)
    ) {
        let result = compare(&params_from(&udb_names), &params_from(&llm_names));
        prop_assert_eq!(
            result.correctly_identified.len() + result.missed.len(),
            udb_names.len()
        );
        prop_assert_eq!(
            result.correctly_identified.len() + result.hallucinations.len(),
            llm_names.len()
        );
    }

    /// Zero denominators yield exact zeros rather than NaN.
    #[test]
    fn prop_zero_denominators_are_zero(
        names in prop::collection::btree_set("[A-Z]{1,6}", 1..24)
    ) {
        let params = params_from(&names);

        let no_extraction = compare(&params, &[]);
        prop_assert_eq!(no_extraction.precision, 0.0);
        prop_assert_eq!(no_extraction.recall, 0.0);
        prop_assert_eq!(no_extraction.f1_score, 0.0);

        let no_truth = compare(&[], &params);
        prop_assert_eq!(no_truth.precision, 0.0);
        prop_assert_eq!(no_truth.recall, 0.0);
        prop_assert_eq!(no_truth.f1_score, 0.0);
    }

    /// Comparing a list against itself scores perfectly.
    #[test]
    fn prop_self_comparison_is_perfect(
        names in prop::collection::btree_set("[A-Z]{1,6}", 1..24)
    ) {
        let params = params_from(&names);
        let result = compare(&params, &params);
        prop_assert_eq!(result.precision, 1.0);
        prop_assert_eq!(result.recall, 1.0);
        prop_assert_eq!(result.f1_score, 1.0);
        prop_assert!(result.missed.is_empty());
        prop_assert!(result.hallucinations.is_empty());
        prop_assert!(result.misclassified.is_empty());
    }

    /// Wrong types on every match never disturb the name partition.
    #[test]
    fn prop_misclassification_is_independent_of_partition(
        names in prop::collection::btree_set("[A-Z]{1,6}", 0..24)
    ) {
        let truth = params_from(&names);
        let claims: Vec<Parameter> = names
            .iter()
            .map(|name| Parameter::new(name.clone(), "0", ParamType::ConfigDependent))
            .collect();

        let result = compare(&truth, &claims);
        prop_assert_eq!(result.misclassified.len(), result.correctly_identified.len());
        prop_assert_eq!(result.correctly_identified.len(), names.len());
        prop_assert!(result.missed.is_empty());
        prop_assert!(result.hallucinations.is_empty());
    }
}
