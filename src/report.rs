use peg::error::ParseError;

use crate::{
	presyntax::{ResolutionError, ResolutionErrorKind},
	source::{LexError, LexErrorKind, LexedSource},
};

pub fn report_lex_error(source: &str, error: LexError) {
	let LexError(location, _) = error;
	report_line_error(source, (location, location + 1), &format_lex_error(source, error));
}

pub fn report_parse_error(source: &LexedSource, error: &ParseError<usize>) {
	report_line_error(
		source.source,
		byte_range(source, error.location),
		&format!("parse error: expected one of: {:?}", error.expected.tokens().collect::<Vec<_>>()),
	);
}

pub fn report_resolution_error(source: &LexedSource, error: &ResolutionError) {
	let message = match error.kind {
		ResolutionErrorKind::UnannotatedLambda =>
			"a lambda stands where a type must be synthesized; annotate it",
		ResolutionErrorKind::ExpectedFirstOrderType =>
			"expected a first-order type: an identifier or an arrow",
		ResolutionErrorKind::ExpectedSimpleTerm =>
			"the simply typed calculus has no universe or quantifier terms",
	};
	report_line_error(source.source, byte_range(source, error.range.0), message);
}

// The byte range of a token, or a caret past the end for the EOF position.
fn byte_range(source: &LexedSource, token_index: usize) -> (usize, usize) {
	source
		.ranges
		.get(token_index)
		.copied()
		.unwrap_or((source.source.len(), source.source.len() + 1))
}

pub fn report_line_error(source: &str, range: (usize, usize), error_string: &str) {
	const TAB_REPLACEMENT: &str = "   ";

	let mut lines = source.split_inclusive('\n');
	let mut line_number: usize = 0;
	let mut bytes_left = range.0;
	let (line, bytes_left, width) = loop {
		if let Some(line) = lines.next() {
			line_number += 1;
			if line.len() <= bytes_left {
				bytes_left -= line.len();
			} else {
				break (line, bytes_left, (range.1 - range.0).max(1));
			}
		} else {
			let (i, last) = source.split('\n').enumerate().last().unwrap_or((0, ""));
			line_number = i + 1;
			break (last, last.len(), 1);
		}
	};

	println!("[{}:{}] error: {}", line_number, bytes_left, error_string);

	let visual_line = line.replace('\t', TAB_REPLACEMENT).trim_end().to_owned();
	let visual_offset: usize =
		unicode_width::UnicodeWidthStr::width(line[0..bytes_left].replace('\t', TAB_REPLACEMENT).as_str());

	let displayed_line_number = line_number.to_string();
	let dummy_line_number = " ".repeat(displayed_line_number.len());
	println!("{} |", dummy_line_number);
	println!("{} | {}", displayed_line_number, visual_line);
	println!("{} | {}{}", dummy_line_number, " ".repeat(visual_offset), "^".repeat(width));
}

fn format_lex_error(source: &str, LexError(location, kind): LexError) -> String {
	fn char_list_string(chars: &[char]) -> String {
		use std::fmt::Write;
		let mut string = String::new();
		for (i, c) in chars.iter().enumerate() {
			if i > 0 {
				write!(string, ", ").unwrap();
			}
			write!(string, "`{}`", c).unwrap();
		}
		string
	}

	match kind {
		LexErrorKind::UnrecognizedLexemePrefix => format!(
			"lex error: unrecognized lexeme prefix `{}`",
			source[location..].chars().next().map(String::from).unwrap_or_default()
		),
		LexErrorKind::UnexpectedCharacter(expected) => format!(
			"lex error: expected one of {}; found `{}`",
			char_list_string(expected),
			source[location..].chars().next().map(String::from).unwrap_or_default().escape_default()
		),
		LexErrorKind::UnexpectedEnd(expected) =>
			format!("lex error: expected one of {}; found end of input", char_list_string(expected)),
	}
}
