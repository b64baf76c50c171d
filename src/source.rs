use std::str::Chars;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Token {
	Whitespace,
	Keyword(Keyword),
	Identifier,
	Text,
	Lambda,
	Forall,
	Arrow,
	TwoColon,
	Equal,
	Ast,
	Period,
	ParenL,
	ParenR,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Keyword {
	Let,
	Assume,
	PutStrLn,
	Out,
}

pub struct LexError(pub usize, pub LexErrorKind);

pub enum LexErrorKind {
	UnrecognizedLexemePrefix,
	UnexpectedCharacter(&'static [char]),
	UnexpectedEnd(&'static [char]),
}

struct Scanner<'s> {
	len: usize,
	chars: Chars<'s>,
}

impl<'s> Scanner<'s> {
	pub fn new(source: &'s str) -> Self { Self { len: source.len(), chars: source.chars() } }

	pub fn position(&self) -> usize { self.len - self.chars.as_str().len() }

	pub fn previous_position(&self) -> usize { self.position() - 1 }

	pub fn next(&mut self) -> Option<(char, usize)> {
		let position = self.position();
		Some((self.chars.next()?, position))
	}

	pub fn pop(&mut self) -> Option<char> { self.chars.next() }

	pub fn peek(&mut self) -> Option<char> { self.chars.clone().next() }
}

pub struct LexedSource<'s> {
	pub source: &'s str,
	pub tokens: Box<[Token]>,
	pub ranges: Box<[(usize, usize)]>,
}

impl<'s> LexedSource<'s> {
	fn keyword_or_identifier(string: &str) -> Token {
		use self::Keyword::*;
		match string {
			"let" => Token::Keyword(Let),
			"assume" => Token::Keyword(Assume),
			"putStrLn" => Token::Keyword(PutStrLn),
			"out" => Token::Keyword(Out),
			"forall" => Token::Forall,
			_ => Token::Identifier,
		}
	}

	pub fn new(source: &'s str) -> Result<Self, LexError> {
		use LexErrorKind::*;
		use Token::*;
		let mut scanner = Scanner::new(source);
		let mut tokens = Vec::new();
		let mut ranges = Vec::new();
		while let Some((initial, start)) = scanner.next() {
			let token = match initial {
				' ' | '\n' | '\r' | '\t' => {
					while let Some(' ' | '\n' | '\r' | '\t') = scanner.peek() {
						scanner.pop();
					}
					Whitespace
				}
				'\\' | 'λ' => Lambda,
				'∀' => Forall,
				'→' => Arrow,
				'*' | '∗' => Ast,
				'.' => Period,
				'=' => Equal,
				'(' => ParenL,
				')' => ParenR,
				':' => {
					const EXPECTED: [char; 1] = [':'];
					match scanner.pop() {
						Some(':') => TwoColon,
						Some(_) => return Err(LexError(scanner.previous_position(), UnexpectedCharacter(&EXPECTED))),
						None => return Err(LexError(scanner.position(), UnexpectedEnd(&EXPECTED))),
					}
				}
				'-' => {
					const EXPECTED: [char; 2] = ['>', '-'];
					match scanner.pop() {
						Some('>') => Arrow,
						Some('-') => {
							while let Some(c) = scanner.peek() {
								scanner.pop();
								if c == '\n' {
									break;
								}
							}
							Whitespace
						}
						Some(_) => return Err(LexError(scanner.previous_position(), UnexpectedCharacter(&EXPECTED))),
						None => return Err(LexError(scanner.position(), UnexpectedEnd(&EXPECTED))),
					}
				}
				'"' => {
					const EXPECTED: [char; 1] = ['"'];
					loop {
						match scanner.pop() {
							Some('"') => break Text,
							Some(_) => continue,
							None => return Err(LexError(scanner.position(), UnexpectedEnd(&EXPECTED))),
						}
					}
				}
				c if c.is_alphabetic() || c == '_' => {
					while let Some(c) = scanner.peek() {
						if c.is_alphanumeric() || c == '_' || c == '\'' {
							scanner.pop();
						} else {
							break;
						}
					}
					Self::keyword_or_identifier(&source[start..scanner.position()])
				}
				_ => return Err(LexError(start, UnrecognizedLexemePrefix)),
			};
			tokens.push(token);
			ranges.push((start, scanner.position()));
		}

		debug_assert!(tokens.len() == ranges.len());
		Ok(Self { source, tokens: tokens.into_boxed_slice(), ranges: ranges.into_boxed_slice() })
	}
}

pub fn lex(source: &str) -> Result<LexedSource, LexError> { LexedSource::new(source) }
