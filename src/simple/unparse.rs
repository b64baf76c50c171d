use std::fmt::Write;

use lasso::Rodeo;

use crate::{
	common::{display_name, Index, Name},
	simple::{
		check::{TypeError, TypeErrorKind},
		syntax::{CheckableTerm, Classifier, InferableTerm, Kind, Type},
	},
};

pub fn print_inferable(term: &InferableTerm, interner: &Rodeo) -> String {
	let mut out = String::new();
	write_inferable(term, &mut out, interner, 0, 0).unwrap();
	out
}

pub fn print_checkable(term: &CheckableTerm, interner: &Rodeo) -> String {
	let mut out = String::new();
	write_checkable(term, &mut out, interner, 0, 0).unwrap();
	out
}

pub fn print_type(classifier: &Type, interner: &Rodeo) -> String {
	let mut out = String::new();
	write_type(classifier, &mut out, interner, 0).unwrap();
	out
}

pub fn print_classifier(classifier: &Classifier, interner: &Rodeo) -> String {
	match classifier {
		Classifier::OfKind(Kind::Star) => "*".to_owned(),
		Classifier::OfType(classifier) => print_type(classifier, interner),
	}
}

fn write_name(name: Name, f: &mut impl Write, interner: &Rodeo) -> std::fmt::Result {
	match name {
		Name::Global(identifier) => write!(f, "{}", interner.resolve(&identifier)),
		Name::Local(depth) => write!(f, "Local({})", depth.0),
		Name::Quote(level) => write!(f, "Quote({})", level.0),
	}
}

fn write_type(classifier: &Type, f: &mut impl Write, interner: &Rodeo, precedence: u8) -> std::fmt::Result {
	match classifier {
		Type::Free(name) => write_name(*name, f, interner),
		Type::Function { domain, codomain } => {
			if precedence > 0 {
				write!(f, "(")?;
			}
			write_type(domain, f, interner, 1)?;
			write!(f, " -> ")?;
			write_type(codomain, f, interner, 0)?;
			if precedence > 0 {
				write!(f, ")")?;
			}
			Ok(())
		}
	}
}

fn write_inferable(
	term: &InferableTerm,
	f: &mut impl Write,
	interner: &Rodeo,
	precedence: u8,
	binders: usize,
) -> std::fmt::Result {
	use InferableTerm as Term;
	match term {
		Term::Annotation { term, classifier } => {
			if precedence > 0 {
				write!(f, "(")?;
			}
			write_checkable(term, f, interner, 2, binders)?;
			write!(f, " :: ")?;
			write_type(classifier, f, interner, 0)?;
			if precedence > 0 {
				write!(f, ")")?;
			}
			Ok(())
		}
		Term::Bound(Index(index)) =>
			write!(f, "{}", display_name(binders.saturating_sub(index + 1))),
		Term::Free(name) => write_name(*name, f, interner),
		Term::Apply { scrutinee, argument } => {
			if precedence > 2 {
				write!(f, "(")?;
			}
			write_inferable(scrutinee, f, interner, 2, binders)?;
			write!(f, " ")?;
			write_checkable(argument, f, interner, 3, binders)?;
			if precedence > 2 {
				write!(f, ")")?;
			}
			Ok(())
		}
	}
}

fn write_checkable(
	term: &CheckableTerm,
	f: &mut impl Write,
	interner: &Rodeo,
	precedence: u8,
	binders: usize,
) -> std::fmt::Result {
	match term {
		CheckableTerm::Inferable(term) => write_inferable(term, f, interner, precedence, binders),
		CheckableTerm::Lambda(body) => {
			if precedence > 0 {
				write!(f, "(")?;
			}
			write!(f, "\\{} -> ", display_name(binders))?;
			write_checkable(body, f, interner, 0, binders + 1)?;
			if precedence > 0 {
				write!(f, ")")?;
			}
			Ok(())
		}
	}
}

/// Renders a type error the way the session reports it.
pub fn display_type_error(TypeError(kind): &TypeError, interner: &Rodeo) -> String {
	match kind {
		TypeErrorKind::UnknownIdentifier(identifier) =>
			format!("unknown identifier '{}'", interner.resolve(identifier)),
		TypeErrorKind::IllegalApplication { scrutinee_type } =>
			format!("illegal application {}", print_type(scrutinee_type, interner)),
		TypeErrorKind::Mismatch { inferred, expected } => format!(
			"type mismatch:\ntype inferred: {}\ntype expected: {}",
			print_type(inferred, interner),
			print_type(expected, interner),
		),
		TypeErrorKind::UnexpectedLambda { expected } =>
			format!("lambda type mismatch {}", print_type(expected, interner)),
	}
}
