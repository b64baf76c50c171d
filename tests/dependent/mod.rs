use lambda_gnomon::{
	common::Index,
	dependent::{
		check,
		conversion::Conversion as _,
		evaluate::Evaluate as _,
		pts::PureTypeSystem,
		syntax::{CheckableTerm, InferableTerm},
	},
};

use crate::common::DependentHarness;

#[test]
fn assumed_function_applies_to_assumed_argument() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("f", "b -> b").unwrap();
	harness.assume("x", "b").unwrap();
	assert_eq!(harness.infer_printed("f x").unwrap(), "b");
}

#[test]
fn polymorphic_identity_reports_its_classifier() {
	let mut harness = DependentHarness::new();
	harness.define("id", "(\\a x -> x) :: forall (a :: *) . a -> a").unwrap();
	assert_eq!(harness.infer_printed("id").unwrap(), "∀(x :: *) (y :: x).x");
}

#[test]
fn application_type_depends_on_the_argument() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.define("id", "(\\a x -> x) :: forall (a :: *) . a -> a").unwrap();
	assert_eq!(harness.infer_printed("id b").unwrap(), "∀x :: b.b");
	harness.assume("y", "b").unwrap();
	assert_eq!(harness.infer_printed("id b y").unwrap(), "b");
}

#[test]
fn non_function_application_is_illegal() {
	let mut harness = DependentHarness::new();
	harness.assume("y", "*").unwrap();
	let error = harness.infer("y y").unwrap_err();
	assert!(harness.display_error(&error).contains("illegal application"));
}

#[test]
fn mismatched_annotation_is_rejected() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("c", "*").unwrap();
	harness.assume("x", "b").unwrap();
	let error = harness.infer("x :: c").unwrap_err();
	assert!(harness.display_error(&error).contains("type mismatch"));
}

#[test]
fn unknown_identifier_is_reported_by_name() {
	let mut harness = DependentHarness::new();
	let error = harness.infer("missing").unwrap_err();
	assert_eq!(harness.display_error(&error), "unknown identifier 'missing'");
}

#[test]
fn failed_assume_leaves_the_context_untouched() {
	let mut harness = DependentHarness::new();
	harness.assume("broken", "missing").unwrap_err();
	let error = harness.infer("broken").unwrap_err();
	assert!(harness.display_error(&error).contains("unknown identifier 'broken'"));
}

#[test]
fn assume_checks_later_bindings_under_earlier_ones() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("f", "b -> b").unwrap();
	// The classifier of `f` mentions `b`, assumed just before it.
	assert_eq!(harness.infer_printed("f").unwrap(), "∀x :: b.b");
}

#[test]
fn sort_star_lives_in_its_axiom_sort() {
	let mut harness = DependentHarness::new();
	assert_eq!(harness.infer_printed("*").unwrap(), "?");
}

#[test]
fn unregistered_sort_has_no_axiom() {
	let mut harness = DependentHarness::new();
	let square = harness.label("?");
	let term = InferableTerm::Sort(square);
	let error =
		check::infer(&harness.pts, &harness.globals, &harness.context, &term).unwrap_err();
	assert!(harness.display_error(&error).contains("wrong sort"));
}

#[test]
fn lambda_against_a_non_pi_classifier_is_a_mismatch() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	let error = harness.infer("(\\x -> x) :: b").unwrap_err();
	assert!(harness.display_error(&error).contains("type mismatch"));
}

#[test]
fn lambda_classifiers_are_not_sorted() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("x", "b").unwrap();
	let error = harness.infer("x :: (\\y -> y)").unwrap_err();
	assert!(harness.display_error(&error).contains("type mismatch"));
}

// The simply typed table is the same engine under another configuration: the
// missing formation rule turns a dependent quantifier into a "no rule" error.
#[test]
fn simply_typed_table_rejects_polymorphic_quantification() {
	let mut harness = DependentHarness::with_system(PureTypeSystem::simply_typed);
	let error = harness.infer("forall (a :: *) . a -> a").unwrap_err();
	assert!(harness.display_error(&error).contains("no rule ["));
}

#[test]
fn simply_typed_table_still_forms_ground_arrows() {
	let mut harness = DependentHarness::with_system(PureTypeSystem::simply_typed);
	harness.assume("b", "*").unwrap();
	assert_eq!(harness.infer_printed("b -> b").unwrap(), "*");
}

#[test]
fn constructions_table_accepts_impredicative_quantification() {
	let mut harness = DependentHarness::new();
	assert_eq!(harness.infer_printed("forall (a :: *) . a -> a").unwrap(), "*");
}

#[test]
fn wildcard_sort_matches_registered_sorts_symmetrically() {
	let harness = DependentHarness::new();
	let star = harness.pts.star();
	let wildcard = harness.pts.wildcard();
	let star_term = CheckableTerm::from(InferableTerm::Sort(star));
	let wildcard_term = CheckableTerm::from(InferableTerm::Sort(wildcard));
	assert!(harness.pts.can_convert(&star_term, &wildcard_term));
	assert!(harness.pts.can_convert(&wildcard_term, &star_term));
}

#[test]
fn wildcard_sort_does_not_match_unregistered_labels() {
	let mut harness = DependentHarness::new();
	let unregistered = harness.label("owl");
	let wildcard = harness.pts.wildcard();
	let unregistered_term = CheckableTerm::from(InferableTerm::Sort(unregistered));
	let wildcard_term = CheckableTerm::from(InferableTerm::Sort(wildcard));
	assert!(!harness.pts.can_convert(&unregistered_term, &wildcard_term));
	assert!(!harness.pts.can_convert(&wildcard_term, &unregistered_term));
}

#[test]
fn stuck_spines_survive_normalization() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("f", "b -> b").unwrap();
	harness.assume("x", "b").unwrap();
	let normal = harness.normalize("f (f x)");
	assert_eq!(harness.print(&normal), "f (f x)");
}

#[test]
fn definitions_unfold_during_evaluation() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("x", "b").unwrap();
	harness.define("id", "(\\a y -> y) :: forall (a :: *) . a -> a").unwrap();
	let normal = harness.normalize("id b x");
	assert_eq!(harness.print(&normal), "x");
}

#[test]
#[should_panic(expected = "internal defect")]
fn leftover_bound_variable_in_inference_is_a_defect() {
	let harness = DependentHarness::new();
	let term = InferableTerm::Bound(Index(0));
	let _ = check::infer(&harness.pts, &harness.globals, &harness.context, &term);
}

#[test]
#[should_panic(expected = "internal defect")]
fn evaluating_an_unbound_index_is_a_defect() {
	let harness = DependentHarness::new();
	let term = InferableTerm::Bound(Index(0));
	let _ = term.evaluate(&harness.globals);
}
