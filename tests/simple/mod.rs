use lambda_gnomon::{
	common::Index,
	simple::{check, evaluate::Evaluate as _, syntax::InferableTerm},
};

use crate::common::SimpleHarness;

#[test]
fn constant_combinator_checks_against_its_annotation() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("B", "*");
	harness.define("k", "(\\x y -> x) :: A -> B -> A").unwrap();
	assert_eq!(harness.infer_printed("k").unwrap(), "A -> B -> A");
}

#[test]
fn applying_the_constant_combinator_projects_the_first_type() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("B", "*");
	harness.assume("a", "A");
	harness.assume("b", "B");
	harness.define("k", "(\\x y -> x) :: A -> B -> A").unwrap();
	assert_eq!(harness.infer_printed("k a").unwrap(), "B -> A");
	assert_eq!(harness.infer_printed("k a b").unwrap(), "A");
}

#[test]
fn annotations_against_unassumed_base_types_are_rejected() {
	let mut harness = SimpleHarness::new();
	let error = harness.infer("(\\x -> x) :: A -> A").unwrap_err();
	assert_eq!(harness.display_error(&error), "unknown identifier 'A'");
}

#[test]
fn a_base_type_name_is_not_a_term() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	let error = harness.infer("A").unwrap_err();
	assert_eq!(harness.display_error(&error), "unknown identifier 'A'");
}

#[test]
fn a_term_name_is_not_a_base_type() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("a", "A");
	let error = harness.infer("(\\x -> x) :: a -> a").unwrap_err();
	assert_eq!(harness.display_error(&error), "unknown identifier 'a'");
}

#[test]
fn non_function_application_is_illegal() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("a", "A");
	let error = harness.infer("a a").unwrap_err();
	assert!(harness.display_error(&error).contains("illegal application"));
}

#[test]
fn a_wrong_body_type_is_a_mismatch() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("B", "*");
	harness.assume("b", "B");
	let error = harness.infer("(\\x -> b) :: A -> A").unwrap_err();
	let display = harness.display_error(&error);
	assert!(display.contains("type mismatch"));
	assert!(display.contains("type inferred: B"));
	assert!(display.contains("type expected: A"));
}

#[test]
fn lambdas_check_only_against_arrows() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	let error = harness.infer("(\\x y -> x) :: A -> A").unwrap_err();
	assert!(harness.display_error(&error).contains("type mismatch"));
}

#[test]
fn stuck_spines_survive_normalization() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("f", "A -> A");
	harness.assume("a", "A");
	let normal = harness.normalize("f (f a)");
	assert_eq!(harness.print(&normal), "f (f a)");
}

#[test]
fn definitions_unfold_during_evaluation() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("a", "A");
	harness.define("id", "(\\x -> x) :: A -> A").unwrap();
	let normal = harness.normalize("id (id a)");
	assert_eq!(harness.print(&normal), "a");
}

// A term with a bound variable no binder accounts for is a checker bug, not a
// rejected program; it aborts instead of reporting a type error.
#[test]
#[should_panic(expected = "internal defect")]
fn leftover_bound_variable_in_inference_is_a_defect() {
	let harness = SimpleHarness::new();
	let term = InferableTerm::Bound(Index(0));
	let _ = check::infer(&harness.context, &term);
}

#[test]
#[should_panic(expected = "internal defect")]
fn evaluating_an_unbound_index_is_a_defect() {
	let harness = SimpleHarness::new();
	let term = InferableTerm::Bound(Index(0));
	let _ = term.evaluate(&harness.globals);
}
