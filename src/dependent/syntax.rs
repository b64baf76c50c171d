use crate::common::{Index, Name, SortLabel};

/// A term whose classifier can be synthesized.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InferableTerm {
	Annotation {
		term: Box<CheckableTerm>,
		classifier: Box<CheckableTerm>,
	},
	Sort(SortLabel),
	Pi {
		base: Box<CheckableTerm>,
		family: Box<CheckableTerm>,
	},
	Bound(Index),
	Free(Name),
	Apply {
		scrutinee: Box<InferableTerm>,
		argument: Box<CheckableTerm>,
	},
}

/// A term that can only be checked against a given classifier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CheckableTerm {
	Inferable(Box<InferableTerm>),
	Lambda(Box<CheckableTerm>),
}

impl From<InferableTerm> for CheckableTerm {
	fn from(term: InferableTerm) -> Self { Self::Inferable(term.into()) }
}
