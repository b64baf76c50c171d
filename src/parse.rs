use lasso::{Rodeo, Spur};
use peg::error::ParseError;

use crate::{
	common::{Binding, Statement},
	presyntax::{Expression, ParsedStatement, Preterm},
	source::{Keyword, LexedSource, Token},
};

/// Parses a whole program: a sequence of statements.
pub fn parse_statements(
	source: &LexedSource,
	interner: &mut Rodeo,
) -> Result<Vec<ParsedStatement>, ParseError<usize>> {
	let mut parser = Parser { source: source.source, interner, ranges: &source.ranges };
	surface::statements(&source.tokens, &mut parser)
}

/// Parses a single interactive statement.
pub fn parse_statement(source: &LexedSource, interner: &mut Rodeo) -> Result<ParsedStatement, ParseError<usize>> {
	let mut parser = Parser { source: source.source, interner, ranges: &source.ranges };
	surface::statement(&source.tokens, &mut parser)
}

/// Parses a single expression, as consumed by the `:type` command.
pub fn parse_expression(source: &LexedSource, interner: &mut Rodeo) -> Result<Expression, ParseError<usize>> {
	let mut parser = Parser { source: source.source, interner, ranges: &source.ranges };
	surface::expression(&source.tokens, &mut parser)
}

/// Parses a single expression, bare lambdas included.
pub fn parse_checkable_expression(
	source: &LexedSource,
	interner: &mut Rodeo,
) -> Result<Expression, ParseError<usize>> {
	let mut parser = Parser { source: source.source, interner, ranges: &source.ranges };
	surface::checkable_expression(&source.tokens, &mut parser)
}

pub struct Parser<'s, 'i> {
	source: &'s str,
	interner: &'i mut Rodeo,
	ranges: &'s [(usize, usize)],
}

impl<'s, 'i> Parser<'s, 'i> {
	fn identifier(&mut self, token_index: usize) -> Spur {
		let range = self.ranges[token_index];
		let span = &self.source[range.0..range.1];
		self.interner.get_or_intern(span)
	}

	fn text(&self, token_index: usize) -> String {
		let range = self.ranges[token_index];
		self.source[range.0 + 1..range.1 - 1].to_owned()
	}
}

peg::parser! {
	grammar surface(parser: &mut Parser) for [Token] {
		rule _ = [Token::Whitespace]*

		rule identifier() -> Spur
			= pos:position!() [Token::Identifier] {parser.identifier(pos)}

		rule text() -> String
			= pos:position!() [Token::Text] {parser.text(pos)}

		rule atom() -> Expression
			= init:position!() preterm:(
				  [Token::Ast] {Preterm::Universe}
				/ identifier:identifier() {Preterm::Variable(identifier)}
			) fini:position!() {preterm.at((init, fini))}
			/ [Token::ParenL] _ term:checkable() _ [Token::ParenR] {term}

		// Application spines associate to the left.
		rule spine() -> Expression
			= scrutinee:atom() arguments:(_ argument:atom() {argument})* {
				arguments.into_iter().fold(scrutinee, |scrutinee, argument| {
					let range = (scrutinee.range.0, argument.range.1);
					Preterm::Apply { scrutinee: scrutinee.into(), argument: argument.into() }.at(range)
				})
			}

		rule annotated() -> Expression
			= term:spine() classifier:(_ [Token::TwoColon] _ classifier:checkable() {classifier})? {
				match classifier {
					Some(classifier) => {
						let range = (term.range.0, classifier.range.1);
						Preterm::Annotation { term: term.into(), classifier: classifier.into() }.at(range)
					}
					None => term,
				}
			}

		rule binder() -> (Spur, Expression)
			= name:identifier() _ [Token::TwoColon] _ classifier:checkable() {(name, classifier)}

		rule binders() -> Vec<(Spur, Expression)>
			= binders:([Token::ParenL] _ binder:binder() _ [Token::ParenR] {binder}) ++ _ {binders}
			/ binder:binder() {vec![binder]}

		rule inferable() -> Expression
			= init:position!() [Token::Forall] _ binders:binders() _ [Token::Period] _ family:checkable() fini:position!()
				{Preterm::Pi { binders, family: family.into() }.at((init, fini))}
			/ base:annotated() family:(_ [Token::Arrow] _ family:checkable() {family})? {
				match family {
					Some(family) => {
						let range = (base.range.0, family.range.1);
						Preterm::Arrow { base: base.into(), family: family.into() }.at(range)
					}
					None => base,
				}
			}

		rule lambda() -> Expression
			= init:position!() [Token::Lambda] _ parameters:(identifier() ++ _) _ [Token::Arrow] _ body:checkable() fini:position!()
				{Preterm::Lambda { parameters, body: body.into() }.at((init, fini))}

		rule checkable() -> Expression
			= lambda()
			/ inferable()

		rule statement_body() -> ParsedStatement
			= [Token::Keyword(Keyword::Let)] _ name:identifier() _ [Token::Equal] _ term:inferable()
				{Statement::Let { name, term }}
			/ [Token::Keyword(Keyword::Assume)] _ binders:binders()
				{Statement::Assume(binders.into_iter().map(|(name, classifier)| Binding { name, classifier }).collect())}
			/ [Token::Keyword(Keyword::PutStrLn)] _ text:text() {Statement::PutStrLn(text)}
			/ [Token::Keyword(Keyword::Out)] text:(_ text:text() {text})? {Statement::Out(text.unwrap_or_default())}
			/ term:inferable() {Statement::Eval(term)}

		pub rule statement() -> ParsedStatement
			= _ statement:statement_body() _ {statement}

		pub rule statements() -> Vec<ParsedStatement>
			= statements:(statement())* _ {statements}

		pub rule expression() -> Expression
			= _ expression:inferable() _ {expression}

		pub rule checkable_expression() -> Expression
			= _ expression:checkable() _ {expression}
	}
}
