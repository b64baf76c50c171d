use lasso::Spur;

use crate::{
	common::{Index, Name},
	presyntax::{Expression, Preterm, ResolutionError, ResolutionErrorKind},
	simple::syntax::{CheckableTerm, Classifier, InferableTerm, Kind, Type},
};

/// Lowers parsed expressions to the simply typed core: binder names become de
/// Bruijn indices and classifier expressions become first-order type trees.
#[derive(Default)]
pub struct Resolver {
	scope: Vec<Spur>,
}

impl Resolver {
	pub fn new() -> Self { Self { scope: Vec::new() } }

	pub fn inferable(&mut self, expression: &Expression) -> Result<InferableTerm, ResolutionError> {
		Ok(match &expression.preterm {
			Preterm::Variable(name) =>
				match self.scope.iter().rev().position(|bound| bound == name) {
					Some(index) => InferableTerm::Bound(Index(index)),
					None => InferableTerm::Free(Name::Global(*name)),
				},
			Preterm::Universe | Preterm::Pi { .. } | Preterm::Arrow { .. } =>
				return Err(ResolutionErrorKind::ExpectedSimpleTerm.at(expression.range)),
			Preterm::Lambda { .. } =>
				return Err(ResolutionErrorKind::UnannotatedLambda.at(expression.range)),
			Preterm::Annotation { term, classifier } => InferableTerm::Annotation {
				term: self.checkable(term)?.into(),
				classifier: self.first_order(classifier)?,
			},
			Preterm::Apply { scrutinee, argument } => InferableTerm::Apply {
				scrutinee: self.inferable(scrutinee)?.into(),
				argument: self.checkable(argument)?.into(),
			},
		})
	}

	pub fn checkable(&mut self, expression: &Expression) -> Result<CheckableTerm, ResolutionError> {
		match &expression.preterm {
			Preterm::Lambda { parameters, body } => {
				for parameter in parameters {
					self.scope.push(*parameter);
				}
				let body = self.checkable(body);
				for _ in parameters {
					self.scope.pop();
				}
				let mut term = body?;
				for _ in parameters {
					term = CheckableTerm::Lambda(term.into());
				}
				Ok(term)
			}
			_ => self.inferable(expression).map(Into::into),
		}
	}

	/// Classifiers are a separate first-order syntax: identifiers name base
	/// types regardless of any term binders in scope.
	pub fn first_order(&self, expression: &Expression) -> Result<Type, ResolutionError> {
		match &expression.preterm {
			Preterm::Variable(name) => Ok(Type::Free(Name::Global(*name))),
			Preterm::Arrow { base, family } => Ok(Type::Function {
				domain: self.first_order(base)?.into(),
				codomain: self.first_order(family)?.into(),
			}),
			_ => Err(ResolutionErrorKind::ExpectedFirstOrderType.at(expression.range)),
		}
	}

	/// What an assume binding introduces: `*` makes a base type, anything else
	/// must be a first-order type.
	pub fn classifier(&self, expression: &Expression) -> Result<Classifier, ResolutionError> {
		match &expression.preterm {
			Preterm::Universe => Ok(Classifier::OfKind(Kind::Star)),
			_ => self.first_order(expression).map(Classifier::OfType),
		}
	}
}
