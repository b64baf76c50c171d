use lasso::{Rodeo, Spur};

use crate::{
	common::{Binding, Name, Statement},
	dependent::{
		check::{self, Context},
		evaluate::Evaluate as _,
		pts::PureTypeSystem,
		quote::Quote as _,
		resolve::Resolver,
		semantics::NameEnvironment,
		unparse::{display_type_error, print_checkable},
	},
	parse,
	presyntax::{Expression, ParsedStatement},
	report::{report_lex_error, report_parse_error, report_resolution_error},
	session::Interpreter,
	source::{lex, LexedSource},
};

/// Session state for the dependently typed calculus, parametrized by the sort
/// table it checks under.
pub struct DependentInterpreter {
	interner: Rodeo,
	pts: PureTypeSystem,
	globals: NameEnvironment,
	context: Context,
	output_target: String,
}

impl DependentInterpreter {
	pub fn new() -> Self { Self::with_system(PureTypeSystem::constructions) }

	pub fn with_system(system: impl FnOnce(&mut Rodeo) -> PureTypeSystem) -> Self {
		let mut interner = Rodeo::new();
		let pts = system(&mut interner);
		Self {
			interner,
			pts,
			globals: NameEnvironment::new(),
			context: Context::new(),
			output_target: String::new(),
		}
	}

	fn process(&mut self, source: &LexedSource, statement: ParsedStatement) {
		match statement {
			Statement::Assume(bindings) =>
				for binding in bindings {
					self.assume(source, binding);
				},
			Statement::Let { name, term } => self.check_evaluate(source, Some(name), &term),
			Statement::Eval(term) => self.check_evaluate(source, None, &term),
			Statement::PutStrLn(text) => println!("{text}"),
			Statement::Out(path) => self.output_target = path,
		}
	}

	fn assume(&mut self, source: &LexedSource, binding: Binding<Expression>) {
		let classifier = match Resolver::new(self.pts.star()).checkable(&binding.classifier) {
			Ok(classifier) => classifier,
			Err(error) => return report_resolution_error(source, &error),
		};
		if let Err(error) =
			check::assume(&self.pts, &self.globals, &mut self.context, binding.name, &classifier)
		{
			println!("type error: {}", display_type_error(&error, &self.interner));
		}
	}

	fn check_evaluate(&mut self, source: &LexedSource, name: Option<Spur>, expression: &Expression) {
		let term = match Resolver::new(self.pts.star()).inferable(expression) {
			Ok(term) => term,
			Err(error) => return report_resolution_error(source, &error),
		};
		let classifier = match check::infer(&self.pts, &self.globals, &self.context, &term) {
			Ok(classifier) => classifier,
			Err(error) =>
				return println!("type error: {}", display_type_error(&error, &self.interner)),
		};
		let value = term.evaluate(&self.globals);
		let classifier_form = print_checkable(&classifier.quote(), &self.interner);
		let line = match name {
			Some(name) => format!("{} :: {}", self.interner.resolve(&name), classifier_form),
			None => format!("{} :: {}", print_checkable(&value.quote(), &self.interner), classifier_form),
		};
		println!("{line}");
		self.emit(&line);
		if let Some(name) = name {
			self.globals.define(Name::Global(name), value);
			self.context.bind(Name::Global(name), classifier);
		}
	}

	// A nonempty output target redirects one result line to a file.
	fn emit(&mut self, line: &str) {
		if self.output_target.is_empty() {
			return;
		}
		let path = std::mem::take(&mut self.output_target);
		if let Err(error) = std::fs::write(&path, format!("{line}\n")) {
			println!("cannot write {path}: {error}");
		}
	}
}

impl Default for DependentInterpreter {
	fn default() -> Self { Self::new() }
}

impl Interpreter for DependentInterpreter {
	fn name(&self) -> &'static str { "lambda-Pi" }

	fn prompt(&self) -> &'static str { "LP> " }

	fn interpret(&mut self, source: &str) {
		let lexed = match lex(source) {
			Ok(lexed) => lexed,
			Err(error) => return report_lex_error(source, error),
		};
		let statement = match parse::parse_statement(&lexed, &mut self.interner) {
			Ok(statement) => statement,
			Err(error) => return report_parse_error(&lexed, &error),
		};
		self.process(&lexed, statement);
	}

	fn interpret_program(&mut self, source: &str) {
		let lexed = match lex(source) {
			Ok(lexed) => lexed,
			Err(error) => return report_lex_error(source, error),
		};
		let statements = match parse::parse_statements(&lexed, &mut self.interner) {
			Ok(statements) => statements,
			Err(error) => return report_parse_error(&lexed, &error),
		};
		for statement in statements {
			self.process(&lexed, statement);
		}
	}

	fn print_type_of(&mut self, source: &str) {
		let lexed = match lex(source) {
			Ok(lexed) => lexed,
			Err(error) => return report_lex_error(source, error),
		};
		let expression = match parse::parse_expression(&lexed, &mut self.interner) {
			Ok(expression) => expression,
			Err(error) => return report_parse_error(&lexed, &error),
		};
		let term = match Resolver::new(self.pts.star()).inferable(&expression) {
			Ok(term) => term,
			Err(error) => return report_resolution_error(&lexed, &error),
		};
		match check::infer(&self.pts, &self.globals, &self.context, &term) {
			Ok(classifier) =>
				println!("{}", print_checkable(&classifier.quote(), &self.interner)),
			Err(error) => println!("type error: {}", display_type_error(&error, &self.interner)),
		}
	}

	fn browse(&self) -> Vec<String> {
		self.context
			.iter()
			.filter_map(|(name, classifier)| match name {
				Name::Global(identifier) => Some(format!(
					"{} :: {}",
					self.interner.resolve(identifier),
					print_checkable(&classifier.quote(), &self.interner)
				)),
				_ => None,
			})
			.collect()
	}
}
