use lambda_gnomon::{
	common::{Index, Name},
	dependent::{
		check as dependent_check,
		evaluate::Evaluate as _,
		quote::Quote as _,
		substitute::Substitute as _,
		syntax::{CheckableTerm, InferableTerm},
	},
	simple::{check as simple_check, substitute::Substitute as _},
};

use crate::common::{DependentHarness, SimpleHarness};

// Substitution commutes with binders: substituting under a lambda is the same
// as substituting into its body one index deeper.
#[test]
fn substitution_respects_binder_depth() {
	let mut harness = DependentHarness::new();
	// The last body mentions indices no parsed term could leave unbound, so
	// the replacement actually fires at every tested depth.
	let dangling = CheckableTerm::from(InferableTerm::Apply {
		scrutinee: Box::new(InferableTerm::Bound(Index(1))),
		argument: Box::new(CheckableTerm::from(InferableTerm::Bound(Index(3)))),
	});
	let bodies = [
		harness.checkable("\\x -> x y"),
		harness.checkable("y"),
		harness.checkable("forall (a :: *) . a -> y"),
		dangling,
	];
	let replacement = harness.inferable("z");
	for body in bodies {
		for index in 0..3 {
			let wrapped = CheckableTerm::Lambda(Box::new(body.clone()));
			assert_eq!(
				wrapped.substitute(&replacement, Index(index)),
				CheckableTerm::Lambda(Box::new(body.substitute(&replacement, Index(index + 1)))),
			);
		}
	}
}

#[test]
fn simple_substitution_respects_binder_depth() {
	let mut harness = SimpleHarness::new();
	let term = harness.inferable("f y");
	let body = lambda_gnomon::simple::syntax::CheckableTerm::from(term);
	let replacement = harness.inferable("z");
	for index in 0..3 {
		let wrapped = lambda_gnomon::simple::syntax::CheckableTerm::Lambda(Box::new(body.clone()));
		assert_eq!(
			wrapped.substitute(&replacement, Index(index)),
			lambda_gnomon::simple::syntax::CheckableTerm::Lambda(Box::new(
				body.substitute(&replacement, Index(index + 1))
			)),
		);
	}
}

// Substitution at depth zero eliminates the index it targets.
#[test]
fn opening_eliminates_the_targeted_index() {
	let mut harness = DependentHarness::new();
	let body = harness.checkable("\\x -> x");
	let CheckableTerm::Lambda(body) = body else { panic!("expected a lambda") };
	let replacement = harness.inferable("z");
	let opened = body.substitute(&replacement, Index(0));
	fn mentions_bound_zero(term: &CheckableTerm, depth: usize) -> bool {
		match term {
			CheckableTerm::Lambda(body) => mentions_bound_zero(body, depth + 1),
			CheckableTerm::Inferable(term) => mentions_inferable(term, depth),
		}
	}
	fn mentions_inferable(term: &InferableTerm, depth: usize) -> bool {
		match term {
			InferableTerm::Bound(Index(index)) => *index == depth,
			InferableTerm::Annotation { term, classifier } =>
				mentions_bound_zero(term, depth) || mentions_bound_zero(classifier, depth),
			InferableTerm::Pi { base, family } =>
				mentions_bound_zero(base, depth) || mentions_bound_zero(family, depth + 1),
			InferableTerm::Apply { scrutinee, argument } =>
				mentions_inferable(scrutinee, depth) || mentions_bound_zero(argument, depth),
			InferableTerm::Sort(_) | InferableTerm::Free(_) => false,
		}
	}
	assert!(!mentions_bound_zero(&opened, 0));
}

// Whatever infers also checks against the classifier it inferred.
#[test]
fn inference_agrees_with_checking() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("f", "b -> b").unwrap();
	harness.assume("x", "b").unwrap();
	let sources = [
		"x",
		"f x",
		"f (f x)",
		"(\\a y -> y) :: forall (a :: *) . a -> a",
		"forall (a :: *) . a -> a",
		"b -> b",
		"*",
	];
	for source in sources {
		let term = harness.inferable(source);
		let classifier =
			dependent_check::infer(&harness.pts, &harness.globals, &harness.context, &term)
				.expect(source);
		dependent_check::check(
			&harness.pts,
			&harness.globals,
			&harness.context,
			&CheckableTerm::from(term),
			&classifier,
		)
		.expect(source);
	}
}

#[test]
fn simple_inference_agrees_with_checking() {
	let mut harness = SimpleHarness::new();
	harness.assume("A", "*");
	harness.assume("B", "*");
	harness.assume("a", "A");
	harness.assume("g", "A -> B");
	let sources = ["a", "g a", "(\\x -> x) :: A -> A", "((\\x -> x) :: A -> A) a"];
	for source in sources {
		let term = harness.inferable(source);
		let classifier = simple_check::infer(&harness.context, &term).expect(source);
		simple_check::check(
			&harness.context,
			&lambda_gnomon::simple::syntax::CheckableTerm::from(term),
			&classifier,
		)
		.expect(source);
	}
}

// Normal forms are fixed points of evaluate-then-quote.
#[test]
fn normalization_is_idempotent() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	harness.assume("f", "b -> b").unwrap();
	harness.assume("x", "b").unwrap();
	harness.define("id", "(\\a y -> y) :: forall (a :: *) . a -> a").unwrap();
	let sources = ["x", "f x", "id b (f x)", "id (b -> b) f", "forall (a :: *) . a -> a"];
	for source in sources {
		let normal = harness.normalize(source);
		let again = normal.evaluate(&harness.globals).quote();
		assert_eq!(normal, again, "{source}");
	}
}

#[test]
fn quotation_synthesizes_no_residual_names() {
	let mut harness = DependentHarness::new();
	harness.assume("b", "*").unwrap();
	let normal = harness.normalize("(\\a y -> y) :: forall (a :: *) . a -> a");
	fn globals_only(term: &CheckableTerm) -> bool {
		match term {
			CheckableTerm::Lambda(body) => globals_only(body),
			CheckableTerm::Inferable(term) => inferable_globals_only(term),
		}
	}
	fn inferable_globals_only(term: &InferableTerm) -> bool {
		match term {
			InferableTerm::Free(Name::Global(_)) => true,
			InferableTerm::Free(_) => false,
			InferableTerm::Bound(_) | InferableTerm::Sort(_) => true,
			InferableTerm::Annotation { term, classifier } =>
				globals_only(term) && globals_only(classifier),
			InferableTerm::Pi { base, family } => globals_only(base) && globals_only(family),
			InferableTerm::Apply { scrutinee, argument } =>
				inferable_globals_only(scrutinee) && globals_only(argument),
		}
	}
	assert!(globals_only(&normal));
}
