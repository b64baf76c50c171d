use lasso::Spur;

use crate::{
	common::{defect, Depth, Name},
	simple::{
		substitute::open,
		syntax::{CheckableTerm, Classifier, InferableTerm, Kind, Type},
	},
};

#[derive(Clone, Debug)]
pub struct TypeError(pub TypeErrorKind);

#[derive(Clone, Debug)]
pub enum TypeErrorKind {
	UnknownIdentifier(Spur),
	IllegalApplication { scrutinee_type: Type },
	/// The synthesized and expected classifiers differ.
	Mismatch { inferred: Type, expected: Type },
	/// A lambda was checked against a classifier that is not an arrow.
	UnexpectedLambda { expected: Type },
}

/// The classifiers of every name in scope, locals included while a checking
/// call is in flight; later entries shadow earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Context(Vec<(Name, Classifier)>);

impl Context {
	pub fn new() -> Self { Self(Vec::new()) }

	pub fn lookup(&self, name: Name) -> Option<&Classifier> {
		self.0.iter().rev().find(|(bound, _)| *bound == name).map(|(_, classifier)| classifier)
	}

	pub fn bind(&mut self, name: Name, classifier: Classifier) { self.0.push((name, classifier)); }

	fn retract(&mut self) { self.0.pop(); }

	pub fn iter(&self) -> impl Iterator<Item = &(Name, Classifier)> { self.0.iter() }
}

/// Synthesizes the classifier of a term in the given scope.
pub fn infer(context: &Context, term: &InferableTerm) -> Result<Type, TypeError> {
	Checker { context: context.clone(), depth: Depth(0) }.infer(term)
}

/// Checks a term against a first-order classifier.
pub fn check(context: &Context, term: &CheckableTerm, expected: &Type) -> Result<(), TypeError> {
	Checker { context: context.clone(), depth: Depth(0) }.check(term, expected)
}

/// Binds a new global of the given classifier. Assumptions are taken at face
/// value in the simply typed calculus; nothing is checked.
pub fn assume(context: &mut Context, name: Spur, classifier: Classifier) {
	context.bind(Name::Global(name), classifier);
}

struct Checker {
	context: Context,
	depth: Depth,
}

impl Checker {
	fn infer(&mut self, term: &InferableTerm) -> Result<Type, TypeError> {
		use InferableTerm as Term;
		match term {
			Term::Annotation { term, classifier } => {
				self.well_kinded(classifier, Kind::Star)?;
				self.check(term, classifier)?;
				Ok(classifier.clone())
			}

			Term::Free(name) => match self.context.lookup(*name) {
				Some(Classifier::OfType(classifier)) => Ok(classifier.clone()),
				Some(Classifier::OfKind(_)) | None => self.unknown_identifier(*name),
			},

			// Every binder is opened by substitution before recursion reaches
			// its body, so no bound variable can be inferred.
			Term::Bound(_) => defect("bound variable reached inference"),

			Term::Apply { scrutinee, argument } => match self.infer(scrutinee)? {
				Type::Function { domain, codomain } => {
					self.check(argument, &domain)?;
					Ok(*codomain)
				}
				scrutinee_type =>
					Err(TypeError(TypeErrorKind::IllegalApplication { scrutinee_type })),
			},
		}
	}

	fn check(&mut self, term: &CheckableTerm, expected: &Type) -> Result<(), TypeError> {
		match (term, expected) {
			(CheckableTerm::Inferable(term), expected) => {
				let inferred = self.infer(term)?;
				if inferred == *expected {
					Ok(())
				} else {
					Err(TypeError(TypeErrorKind::Mismatch {
						inferred,
						expected: expected.clone(),
					}))
				}
			}
			(CheckableTerm::Lambda(body), Type::Function { domain, codomain }) => {
				let depth = self.depth;
				self.context.bind(Name::Local(depth), Classifier::OfType((**domain).clone()));
				self.depth = depth + 1;
				let result = self.check(&open(body, depth), codomain);
				self.depth = depth;
				self.context.retract();
				result
			}
			(_, expected) =>
				Err(TypeError(TypeErrorKind::UnexpectedLambda { expected: expected.clone() })),
		}
	}

	/// Validates that a first-order classifier is formed from base types of
	/// the given kind.
	fn well_kinded(&self, classifier: &Type, kind: Kind) -> Result<(), TypeError> {
		match classifier {
			Type::Free(name) => match self.context.lookup(*name) {
				Some(Classifier::OfKind(bound)) if *bound == kind => Ok(()),
				_ => self.unknown_identifier(*name),
			},
			Type::Function { domain, codomain } => {
				self.well_kinded(domain, kind)?;
				self.well_kinded(codomain, kind)
			}
		}
	}

	fn unknown_identifier<T>(&self, name: Name) -> Result<T, TypeError> {
		match name {
			Name::Global(identifier) =>
				Err(TypeError(TypeErrorKind::UnknownIdentifier(identifier))),
			_ => defect("local name escaped its checking call"),
		}
	}
}
