use lasso::Spur;

use crate::common::Statement;

/// A parsed expression: names are still textual, binders still carry them.
#[derive(Clone, Debug)]
pub struct Expression {
	pub range: (usize, usize),
	pub preterm: Preterm,
}

#[derive(Clone, Debug)]
pub enum Preterm {
	Variable(Spur),
	Universe,
	Lambda { parameters: Vec<Spur>, body: Box<Expression> },
	Pi { binders: Vec<(Spur, Expression)>, family: Box<Expression> },
	Arrow { base: Box<Expression>, family: Box<Expression> },
	Annotation { term: Box<Expression>, classifier: Box<Expression> },
	Apply { scrutinee: Box<Expression>, argument: Box<Expression> },
}

impl Preterm {
	pub fn at(self, range: (usize, usize)) -> Expression { Expression { range, preterm: self } }
}

pub type ParsedStatement = Statement<Expression, Expression>;

#[derive(Clone, Debug)]
pub struct ResolutionError {
	pub range: (usize, usize),
	pub kind: ResolutionErrorKind,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolutionErrorKind {
	/// A lambda stands where a type must be synthesized for it; annotate it.
	UnannotatedLambda,
	/// The simply typed calculus admits only identifiers and arrows here.
	ExpectedFirstOrderType,
	/// The simply typed calculus has no universe or quantifier terms.
	ExpectedSimpleTerm,
}

impl ResolutionErrorKind {
	pub fn at(self, range: (usize, usize)) -> ResolutionError { ResolutionError { range, kind: self } }
}
