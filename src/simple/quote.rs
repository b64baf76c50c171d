use crate::{
	common::{Level, Name},
	simple::{
		semantics::{Closure, Neutral, Value},
		syntax::{CheckableTerm, InferableTerm},
	},
};

pub trait Quote {
	type Term;

	/// Reads a value back into normal-form syntax.
	fn quote(&self) -> Self::Term { self.quote_in(Level(0)) }

	fn quote_in(&self, level: Level) -> Self::Term;
}

impl Quote for Value {
	type Term = CheckableTerm;
	fn quote_in(&self, level: Level) -> Self::Term {
		match self {
			Value::Lambda(closure) => CheckableTerm::Lambda(closure.quote_in(level).into()),
			Value::Neutral(neutral) => CheckableTerm::Inferable(neutral.quote_in(level).into()),
		}
	}
}

impl Quote for Closure {
	type Term = CheckableTerm;
	/// Applies the closure to a fresh quotation variable and reads back the result.
	fn quote_in(&self, level: Level) -> Self::Term {
		self.apply(Value::variable(Name::Quote(level))).quote_in(level + 1)
	}
}

impl Quote for Neutral {
	type Term = InferableTerm;
	fn quote_in(&self, level: Level) -> Self::Term {
		match self {
			Neutral::Variable(name) => match name {
				// The level-to-index conversion at the heart of readback.
				Name::Quote(quoted) => InferableTerm::Bound(level.index_of(*quoted)),
				name => InferableTerm::Free(*name),
			},
			Neutral::Apply { scrutinee, argument } => InferableTerm::Apply {
				scrutinee: scrutinee.quote_in(level).into(),
				argument: argument.quote_in(level).into(),
			},
		}
	}
}
