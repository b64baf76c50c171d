use crate::{
	common::{Depth, Index, Name},
	simple::syntax::{CheckableTerm, InferableTerm},
};

pub trait Substitute {
	/// Replaces each occurrence of the bound variable at `index` with
	/// `replacement`, adjusting the index under every binder passed.
	#[must_use]
	fn substitute(&self, replacement: &InferableTerm, index: Index) -> Self;
}

impl Substitute for InferableTerm {
	fn substitute(&self, replacement: &InferableTerm, index: Index) -> Self {
		use InferableTerm as Term;
		match self {
			// First-order classifiers bind nothing, so they pass through.
			Term::Annotation { term, classifier } => Term::Annotation {
				term: term.substitute(replacement, index).into(),
				classifier: classifier.clone(),
			},
			Term::Bound(bound) =>
				if *bound == index {
					replacement.clone()
				} else {
					Term::Bound(*bound)
				},
			Term::Free(name) => Term::Free(*name),
			Term::Apply { scrutinee, argument } => Term::Apply {
				scrutinee: scrutinee.substitute(replacement, index).into(),
				argument: argument.substitute(replacement, index).into(),
			},
		}
	}
}

impl Substitute for CheckableTerm {
	fn substitute(&self, replacement: &InferableTerm, index: Index) -> Self {
		match self {
			Self::Inferable(term) => Self::Inferable(term.substitute(replacement, index).into()),
			Self::Lambda(body) => Self::Lambda(body.substitute(replacement, index + 1).into()),
		}
	}
}

/// Opens a binder body, replacing its innermost bound variable with the local
/// name for the given depth.
pub fn open(body: &CheckableTerm, depth: Depth) -> CheckableTerm {
	body.substitute(&InferableTerm::Free(Name::Local(depth)), Index(0))
}
