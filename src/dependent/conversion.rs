use crate::dependent::{
	pts::PureTypeSystem,
	syntax::{CheckableTerm, InferableTerm},
};

pub trait Conversion<T> {
	/// Decides whether two normal forms denote the same type. Structural,
	/// except that the wildcard sort matches any registered sort.
	fn can_convert(&self, left: &T, right: &T) -> bool;
}

impl Conversion<CheckableTerm> for PureTypeSystem {
	fn can_convert(&self, left: &CheckableTerm, right: &CheckableTerm) -> bool {
		use CheckableTerm as Term;
		match (left, right) {
			(Term::Inferable(left), Term::Inferable(right)) => self.can_convert(&**left, &**right),
			(Term::Lambda(left), Term::Lambda(right)) => self.can_convert(&**left, &**right),
			_ => false,
		}
	}
}

impl Conversion<InferableTerm> for PureTypeSystem {
	fn can_convert(&self, left: &InferableTerm, right: &InferableTerm) -> bool {
		use InferableTerm as Term;
		match (left, right) {
			(
				Term::Annotation { term: left_term, classifier: left_classifier },
				Term::Annotation { term: right_term, classifier: right_classifier },
			) =>
				self.can_convert(&**left_term, &**right_term)
					&& self.can_convert(&**left_classifier, &**right_classifier),
			(Term::Sort(left), Term::Sort(right)) =>
				left == right
					|| (self.is_wildcard(*left) && self.is_sort(*right))
					|| (self.is_wildcard(*right) && self.is_sort(*left)),
			(
				Term::Pi { base: left_base, family: left_family },
				Term::Pi { base: right_base, family: right_family },
			) =>
				self.can_convert(&**left_base, &**right_base)
					&& self.can_convert(&**left_family, &**right_family),
			(Term::Bound(left), Term::Bound(right)) => left == right,
			(Term::Free(left), Term::Free(right)) => left == right,
			(
				Term::Apply { scrutinee: left_scrutinee, argument: left_argument },
				Term::Apply { scrutinee: right_scrutinee, argument: right_argument },
			) =>
				self.can_convert(&**left_scrutinee, &**right_scrutinee)
					&& self.can_convert(&**left_argument, &**right_argument),
			_ => false,
		}
	}
}
