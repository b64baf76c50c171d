use std::rc::Rc;

use crate::{
	common::{defect, Index, Name, SortLabel},
	dependent::syntax::CheckableTerm,
};

#[derive(Clone, Debug)]
pub enum Value {
	Lambda(Closure),
	Sort(SortLabel),
	Pi { base: Rc<Value>, family: Closure },
	Neutral(Neutral),
}

impl Value {
	/// Wraps a free variable as a stuck value.
	pub fn variable(name: Name) -> Self { Self::Neutral(Neutral::Variable(name)) }
}

/// A computation stuck on an assumed or undefined name.
#[derive(Clone, Debug)]
pub enum Neutral {
	Variable(Name),
	Apply { scrutinee: Rc<Neutral>, argument: Rc<Value> },
}

/// A suspended binder body: the defining environments are captured and the
/// body is re-evaluated once an argument arrives.
#[derive(Clone, Debug)]
pub struct Closure {
	pub globals: NameEnvironment,
	pub environment: Environment,
	pub body: CheckableTerm,
}

impl Closure {
	pub fn new(globals: NameEnvironment, environment: Environment, body: CheckableTerm) -> Self {
		Self { globals, environment, body }
	}
}

/// The local environment: one value per enclosing binder, innermost last.
#[derive(Clone, Debug, Default)]
pub struct Environment(pub(crate) Vec<Value>);

impl Environment {
	pub fn new() -> Self { Self(Vec::new()) }

	pub fn lookup(&self, Index(index): Index) -> Value {
		let position = (self.0.len().checked_sub(index + 1))
			.unwrap_or_else(|| defect("evaluator read past the local environment"));
		self.0[position].clone()
	}

	#[must_use]
	pub fn extend(&self, value: Value) -> Self {
		let mut environment = self.clone();
		environment.0.push(value);
		environment
	}
}

/// Values of the globals defined so far; later definitions shadow earlier ones.
#[derive(Clone, Debug, Default)]
pub struct NameEnvironment(pub(crate) Vec<(Name, Value)>);

impl NameEnvironment {
	pub fn new() -> Self { Self(Vec::new()) }

	pub fn lookup(&self, name: Name) -> Option<&Value> {
		self.0.iter().rev().find(|(defined, _)| *defined == name).map(|(_, value)| value)
	}

	pub fn define(&mut self, name: Name, value: Value) { self.0.push((name, value)); }
}
