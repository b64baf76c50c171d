use crate::common::{Index, Name};

/// A first-order classifier: a named base type or an arrow between two.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Type {
	Free(Name),
	Function { domain: Box<Type>, codomain: Box<Type> },
}

/// The single kind classifying base types.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
	Star,
}

/// What the context records about a name.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Classifier {
	OfKind(Kind),
	OfType(Type),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InferableTerm {
	Annotation { term: Box<CheckableTerm>, classifier: Type },
	Bound(Index),
	Free(Name),
	Apply { scrutinee: Box<InferableTerm>, argument: Box<CheckableTerm> },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CheckableTerm {
	Inferable(Box<InferableTerm>),
	Lambda(Box<CheckableTerm>),
}

impl From<InferableTerm> for CheckableTerm {
	fn from(term: InferableTerm) -> Self { Self::Inferable(term.into()) }
}
