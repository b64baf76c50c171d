use crate::{
	common::defect,
	dependent::{
		semantics::{Closure, Environment, NameEnvironment, Neutral, Value},
		syntax::{CheckableTerm, InferableTerm},
	},
};

pub trait Evaluate {
	/// Transforms a term with no locally bound variables into a value.
	fn evaluate(&self, globals: &NameEnvironment) -> Value { self.evaluate_in(globals, &Environment::new()) }

	fn evaluate_in(&self, globals: &NameEnvironment, environment: &Environment) -> Value;
}

impl Evaluate for InferableTerm {
	fn evaluate_in(&self, globals: &NameEnvironment, environment: &Environment) -> Value {
		use InferableTerm as Term;
		match self {
			// The classifier plays no computational role.
			Term::Annotation { term, .. } => term.evaluate_in(globals, environment),
			Term::Sort(sort) => Value::Sort(*sort),
			Term::Pi { base, family } => Value::Pi {
				base: base.evaluate_in(globals, environment).into(),
				family: Closure::new(globals.clone(), environment.clone(), (**family).clone()),
			},
			Term::Bound(index) => environment.lookup(*index),
			// An assumed name without a definition stays stuck.
			Term::Free(name) =>
				globals.lookup(*name).cloned().unwrap_or_else(|| Value::variable(*name)),
			Term::Apply { scrutinee, argument } => scrutinee
				.evaluate_in(globals, environment)
				.apply_to(argument.evaluate_in(globals, environment)),
		}
	}
}

impl Evaluate for CheckableTerm {
	fn evaluate_in(&self, globals: &NameEnvironment, environment: &Environment) -> Value {
		match self {
			Self::Inferable(term) => term.evaluate_in(globals, environment),
			Self::Lambda(body) =>
				Value::Lambda(Closure::new(globals.clone(), environment.clone(), (**body).clone())),
		}
	}
}

impl Value {
	/// Applies a function value; applying a stuck value extends its spine.
	pub fn apply_to(self, argument: Value) -> Value {
		match self {
			Value::Lambda(closure) => closure.apply(argument),
			Value::Neutral(neutral) =>
				Value::Neutral(Neutral::Apply { scrutinee: neutral.into(), argument: argument.into() }),
			_ => defect("applied a value that is not a function"),
		}
	}
}

impl Closure {
	/// Extends the captured environment with the argument and evaluates the body.
	pub fn apply(&self, argument: Value) -> Value {
		self.body.evaluate_in(&self.globals, &self.environment.extend(argument))
	}
}
