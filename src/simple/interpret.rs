use lasso::{Rodeo, Spur};

use crate::{
	common::{Binding, Name, Statement},
	parse,
	presyntax::{Expression, ParsedStatement},
	report::{report_lex_error, report_parse_error, report_resolution_error},
	session::Interpreter,
	simple::{
		check::{self, Context},
		evaluate::Evaluate as _,
		quote::Quote as _,
		resolve::Resolver,
		semantics::NameEnvironment,
		syntax::Classifier,
		unparse::{display_type_error, print_checkable, print_classifier, print_type},
	},
	source::{lex, LexedSource},
};

/// Session state for the simply typed calculus.
pub struct SimpleInterpreter {
	interner: Rodeo,
	globals: NameEnvironment,
	context: Context,
	output_target: String,
}

impl SimpleInterpreter {
	pub fn new() -> Self {
		Self {
			interner: Rodeo::new(),
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
		match Resolver::new().classifier(&binding.classifier) {
			Ok(classifier) => check::assume(&mut self.context, binding.name, classifier),
			Err(error) => report_resolution_error(source, &error),
		}
	}

	fn check_evaluate(&mut self, source: &LexedSource, name: Option<Spur>, expression: &Expression) {
		let term = match Resolver::new().inferable(expression) {
			Ok(term) => term,
			Err(error) => return report_resolution_error(source, &error),
		};
		let classifier = match check::infer(&self.context, &term) {
			Ok(classifier) => classifier,
			Err(error) =>
				return println!("type error: {}", display_type_error(&error, &self.interner)),
		};
		let value = term.evaluate(&self.globals);
		let classifier_form = print_type(&classifier, &self.interner);
		let line = match name {
			Some(name) => format!("{} :: {}", self.interner.resolve(&name), classifier_form),
			None => format!("{} :: {}", print_checkable(&value.quote(), &self.interner), classifier_form),
		};
		println!("{line}");
		self.emit(&line);
		if let Some(name) = name {
			self.globals.define(Name::Global(name), value);
			self.context.bind(Name::Global(name), Classifier::OfType(classifier));
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

impl Default for SimpleInterpreter {
	fn default() -> Self { Self::new() }
}

impl Interpreter for SimpleInterpreter {
	fn name(&self) -> &'static str { "the simply typed lambda calculus" }

	fn prompt(&self) -> &'static str { "ST> " }

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
		let term = match Resolver::new().inferable(&expression) {
			Ok(term) => term,
			Err(error) => return report_resolution_error(&lexed, &error),
		};
		match check::infer(&self.context, &term) {
			Ok(classifier) => println!("{}", print_type(&classifier, &self.interner)),
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
					print_classifier(classifier, &self.interner)
				)),
				_ => None,
			})
			.collect()
	}
}
