use std::fmt::Write;

use lasso::Rodeo;

use crate::{
	common::{display_name, Index, Name, SortLabel},
	dependent::{
		check::{TypeError, TypeErrorKind},
		syntax::{CheckableTerm, InferableTerm},
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

fn write_name(name: Name, f: &mut impl Write, interner: &Rodeo) -> std::fmt::Result {
	match name {
		Name::Global(identifier) => write!(f, "{}", interner.resolve(&identifier)),
		Name::Local(depth) => write!(f, "Local({})", depth.0),
		Name::Quote(level) => write!(f, "Quote({})", level.0),
	}
}

fn write_sort(SortLabel(label): SortLabel, f: &mut impl Write, interner: &Rodeo) -> std::fmt::Result {
	write!(f, "{}", interner.resolve(&label))
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
			if precedence > 1 {
				write!(f, "(")?;
			}
			write_checkable(term, f, interner, 2, binders)?;
			write!(f, " :: ")?;
			write_checkable(classifier, f, interner, 0, binders)?;
			if precedence > 1 {
				write!(f, ")")?;
			}
			Ok(())
		}
		Term::Sort(sort) => write_sort(*sort, f, interner),
		Term::Pi { base, family } => {
			if precedence > 0 {
				write!(f, "(")?;
			}
			// Collect the whole quantifier chain so it prints as one forall.
			let mut bases: Vec<&CheckableTerm> = vec![&**base];
			let mut body: &CheckableTerm = &**family;
			loop {
				match body {
					CheckableTerm::Inferable(inner) => match &**inner {
						Term::Pi { base, family } => {
							bases.push(&**base);
							body = &**family;
						}
						_ => break,
					},
					_ => break,
				}
			}
			if let [base] = bases.as_slice() {
				write!(f, "∀{} :: ", display_name(binders))?;
				write_checkable(base, f, interner, 0, binders)?;
				write!(f, ".")?;
				write_checkable(body, f, interner, 0, binders + 1)?;
			} else {
				write!(f, "∀")?;
				for (position, base) in bases.iter().enumerate() {
					if position > 0 {
						write!(f, " ")?;
					}
					write!(f, "({} :: ", display_name(binders + position))?;
					write_checkable(base, f, interner, 0, binders + position)?;
					write!(f, ")")?;
				}
				write!(f, ".")?;
				write_checkable(body, f, interner, 0, binders + bases.len())?;
			}
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
			write!(f, "λ{} → ", display_name(binders))?;
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
		TypeErrorKind::WrongSort(sort) => {
			let mut message = String::from("wrong sort '");
			write_sort(*sort, &mut message, interner).unwrap();
			message.push('\'');
			message
		}
		TypeErrorKind::UnsortedClassifier { classifier } => format!(
			"{} type mismatch: not classified by a sort",
			print_checkable(classifier, interner)
		),
		TypeErrorKind::NoRule { pi, base, family } => {
			let side = |sort: &Option<CheckableTerm>| match sort {
				Some(sort) => print_checkable(sort, interner),
				None => "null".to_owned(),
			};
			format!("{} no rule [{}, {}]", print_inferable(pi, interner), side(base), side(family))
		}
		TypeErrorKind::IllegalApplication { scrutinee_type } =>
			format!("illegal application {}", print_checkable(scrutinee_type, interner)),
		TypeErrorKind::Mismatch { expression, inferred, expected } => format!(
			"type mismatch:\ntype inferred: {}\ntype expected: {}\nfor expression: {}",
			print_checkable(inferred, interner),
			print_checkable(expected, interner),
			print_inferable(expression, interner),
		),
		TypeErrorKind::UnexpectedLambda { term, expected } => format!(
			"{} type mismatch {}",
			print_checkable(term, interner),
			print_checkable(expected, interner),
		),
	}
}
