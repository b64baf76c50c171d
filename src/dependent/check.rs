use lasso::Spur;

use crate::{
	common::{defect, Depth, Name, SortLabel},
	dependent::{
		conversion::Conversion as _,
		evaluate::Evaluate as _,
		pts::PureTypeSystem,
		quote::Quote as _,
		semantics::{NameEnvironment, Value},
		substitute::open,
		syntax::{CheckableTerm, InferableTerm},
	},
};

#[derive(Clone, Debug)]
pub struct TypeError(pub TypeErrorKind);

#[derive(Clone, Debug)]
pub enum TypeErrorKind {
	UnknownIdentifier(Spur),
	/// A sort with no axiom classifying it.
	WrongSort(SortLabel),
	/// An annotation whose classifier does not itself live in a table sort.
	UnsortedClassifier { classifier: CheckableTerm },
	/// A pi-type between sorts with no registered formation rule. The sides
	/// are the quoted sorts, absent wherever a side had no sort at all.
	NoRule {
		pi: InferableTerm,
		base: Option<CheckableTerm>,
		family: Option<CheckableTerm>,
	},
	IllegalApplication { scrutinee_type: CheckableTerm },
	/// The synthesized and expected classifiers have distinct normal forms.
	Mismatch {
		expression: InferableTerm,
		inferred: CheckableTerm,
		expected: CheckableTerm,
	},
	/// A lambda was checked against a classifier that is not a pi-type.
	UnexpectedLambda { term: CheckableTerm, expected: CheckableTerm },
}

/// The classifiers of every name in scope, locals included while a checking
/// call is in flight; later entries shadow earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Context(Vec<(Name, Value)>);

impl Context {
	pub fn new() -> Self { Self(Vec::new()) }

	pub fn lookup(&self, name: Name) -> Option<&Value> {
		self.0.iter().rev().find(|(bound, _)| *bound == name).map(|(_, classifier)| classifier)
	}

	pub fn bind(&mut self, name: Name, classifier: Value) { self.0.push((name, classifier)); }

	fn retract(&mut self) { self.0.pop(); }

	pub fn iter(&self) -> impl Iterator<Item = &(Name, Value)> { self.0.iter() }
}

/// Synthesizes the classifier of a term in the given scope.
pub fn infer(
	pts: &PureTypeSystem,
	globals: &NameEnvironment,
	context: &Context,
	term: &InferableTerm,
) -> Result<Value, TypeError> {
	Checker { pts, globals, context: context.clone(), depth: Depth(0) }.infer(term)
}

/// Checks a term against an already-computed classifier value.
pub fn check(
	pts: &PureTypeSystem,
	globals: &NameEnvironment,
	context: &Context,
	term: &CheckableTerm,
	expected: &Value,
) -> Result<(), TypeError> {
	Checker { pts, globals, context: context.clone(), depth: Depth(0) }.check(term, expected)
}

/// Checks a classifier against the sort wildcard and binds a new global of
/// that classifier. On failure the context is left untouched.
pub fn assume(
	pts: &PureTypeSystem,
	globals: &NameEnvironment,
	context: &mut Context,
	name: Spur,
	classifier: &CheckableTerm,
) -> Result<(), TypeError> {
	let annotated = InferableTerm::Annotation {
		term: classifier.clone().into(),
		classifier: Box::new(InferableTerm::Sort(pts.wildcard()).into()),
	};
	infer(pts, globals, context, &annotated)?;
	context.bind(Name::Global(name), classifier.evaluate(globals));
	Ok(())
}

struct Checker<'a> {
	pts: &'a PureTypeSystem,
	globals: &'a NameEnvironment,
	context: Context,
	depth: Depth,
}

impl Checker<'_> {
	fn infer(&mut self, term: &InferableTerm) -> Result<Value, TypeError> {
		use InferableTerm as Term;
		match term {
			Term::Annotation { term, classifier } => {
				match self.classifier_sort(classifier)? {
					Some(Value::Sort(label))
						if self.pts.is_wildcard(label) || self.pts.is_sort(label) => {}
					_ =>
						return Err(TypeError(TypeErrorKind::UnsortedClassifier {
							classifier: (**classifier).clone(),
						})),
				}
				let classifier = classifier.evaluate(self.globals);
				self.check(term, &classifier)?;
				Ok(classifier)
			}

			Term::Sort(sort) => match self.pts.axiom(*sort) {
				Some(axiom) => Ok(Value::Sort(axiom)),
				None => Err(TypeError(TypeErrorKind::WrongSort(*sort))),
			},

			Term::Pi { base, family } => {
				let base_sort = self.classifier_sort(base)?;
				let base_value = base.evaluate(self.globals);
				let family_sort = self.bind_local(base_value, |checker, depth| {
					let family = open(family, depth);
					checker.classifier_sort(&family)
				})?;
				let formed = match (&base_sort, &family_sort) {
					(Some(Value::Sort(base)), Some(Value::Sort(family))) =>
						self.pts.rule(*base, *family),
					_ => None,
				};
				match formed {
					Some(sort) => Ok(Value::Sort(sort)),
					None => Err(TypeError(TypeErrorKind::NoRule {
						pi: term.clone(),
						base: base_sort.as_ref().map(Value::quote),
						family: family_sort.as_ref().map(Value::quote),
					})),
				}
			}

			Term::Free(name) => match self.context.lookup(*name) {
				Some(classifier) => Ok(classifier.clone()),
				None => match name {
					Name::Global(identifier) =>
						Err(TypeError(TypeErrorKind::UnknownIdentifier(*identifier))),
					_ => defect("local name escaped its checking call"),
				},
			},

			// Every binder is opened by substitution before recursion reaches
			// its body, so no bound variable can be inferred.
			Term::Bound(_) => defect("bound variable reached inference"),

			Term::Apply { scrutinee, argument } => match self.infer(scrutinee)? {
				Value::Pi { base, family } => {
					self.check(argument, &base)?;
					Ok(family.apply(argument.evaluate(self.globals)))
				}
				scrutinee_type => Err(TypeError(TypeErrorKind::IllegalApplication {
					scrutinee_type: scrutinee_type.quote(),
				})),
			},
		}
	}

	fn check(&mut self, term: &CheckableTerm, expected: &Value) -> Result<(), TypeError> {
		match (term, expected) {
			(CheckableTerm::Inferable(term), expected) => {
				let inferred = self.infer(term)?;
				let inferred = inferred.quote();
				let expected = expected.quote();
				if self.pts.can_convert(&expected, &inferred) {
					Ok(())
				} else {
					Err(TypeError(TypeErrorKind::Mismatch {
						expression: (**term).clone(),
						inferred,
						expected,
					}))
				}
			}
			(CheckableTerm::Lambda(body), Value::Pi { base, family }) =>
				self.bind_local((**base).clone(), |checker, depth| {
					let body = open(body, depth);
					let expected = family.apply(Value::variable(Name::Local(depth)));
					checker.check(&body, &expected)
				}),
			(term, expected) => Err(TypeError(TypeErrorKind::UnexpectedLambda {
				term: term.clone(),
				expected: expected.quote(),
			})),
		}
	}

	/// The sort classifying a classifier term, when it has one at all; a
	/// lambda classifier has none.
	fn classifier_sort(&mut self, classifier: &CheckableTerm) -> Result<Option<Value>, TypeError> {
		match classifier {
			CheckableTerm::Inferable(term) => self.infer(term).map(Some),
			CheckableTerm::Lambda(_) => Ok(None),
		}
	}

	/// Runs an action under one opened binder: the local name for the current
	/// depth is bound to the given classifier and the depth is advanced.
	fn bind_local<T>(
		&mut self,
		classifier: Value,
		action: impl FnOnce(&mut Self, Depth) -> T,
	) -> T {
		let depth = self.depth;
		self.context.bind(Name::Local(depth), classifier);
		self.depth = depth + 1;
		let result = action(self, depth);
		self.depth = depth;
		self.context.retract();
		result
	}
}
