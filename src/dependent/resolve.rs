use lasso::Spur;

use crate::{
	common::{Index, Name, SortLabel},
	dependent::syntax::{CheckableTerm, InferableTerm},
	presyntax::{Expression, Preterm, ResolutionError, ResolutionErrorKind},
};

/// Lowers parsed expressions to core terms: binder names become de Bruijn
/// indices and everything else becomes a free global.
pub struct Resolver {
	universe: SortLabel,
	scope: Vec<Option<Spur>>,
}

impl Resolver {
	pub fn new(universe: SortLabel) -> Self { Self { universe, scope: Vec::new() } }

	pub fn inferable(&mut self, expression: &Expression) -> Result<InferableTerm, ResolutionError> {
		Ok(match &expression.preterm {
			Preterm::Variable(name) =>
				match self.scope.iter().rev().position(|bound| *bound == Some(*name)) {
					Some(index) => InferableTerm::Bound(Index(index)),
					None => InferableTerm::Free(Name::Global(*name)),
				},
			Preterm::Universe => InferableTerm::Sort(self.universe),
			Preterm::Lambda { .. } =>
				return Err(ResolutionErrorKind::UnannotatedLambda.at(expression.range)),
			Preterm::Pi { binders, family } => self.pi(binders, family)?,
			Preterm::Arrow { base, family } => {
				let base = self.checkable(base)?;
				self.scope.push(None);
				let family = self.checkable(family);
				self.scope.pop();
				InferableTerm::Pi { base: base.into(), family: family?.into() }
			}
			Preterm::Annotation { term, classifier } => InferableTerm::Annotation {
				term: self.checkable(term)?.into(),
				classifier: self.checkable(classifier)?.into(),
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
					self.scope.push(Some(*parameter));
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

	// Quantifier binders scope over the classifiers of the binders after them.
	fn pi(
		&mut self,
		binders: &[(Spur, Expression)],
		family: &Expression,
	) -> Result<InferableTerm, ResolutionError> {
		let [(name, classifier), rest @ ..] = binders else {
			return self.inferable(family);
		};
		let base = self.checkable(classifier)?;
		self.scope.push(Some(*name));
		let family = if rest.is_empty() {
			self.checkable(family)
		} else {
			self.pi(rest, family).map(Into::into)
		};
		self.scope.pop();
		Ok(InferableTerm::Pi { base: base.into(), family: family?.into() })
	}
}
