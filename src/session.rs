use std::io::{BufRead, Write as _};

/// What one interpreter must provide for the session loop to drive it. The
/// two calculi implement this over their own state.
pub trait Interpreter {
	fn name(&self) -> &'static str;

	fn prompt(&self) -> &'static str;

	/// Parses and processes one interactive statement.
	fn interpret(&mut self, source: &str);

	/// Parses and processes a whole program.
	fn interpret_program(&mut self, source: &str);

	/// Parses an expression and prints its classifier.
	fn print_type_of(&mut self, source: &str);

	/// One line per global in scope, oldest first.
	fn browse(&self) -> Vec<String>;
}

enum Command {
	TypeOf(String),
	Browse,
	Load(String),
	Interactive(String),
	Quit,
	Help,
	Noop,
}

struct CommandSpec {
	names: &'static [&'static str],
	arguments: Option<&'static str>,
	summary: &'static str,
	build: fn(String) -> Command,
}

const COMMANDS: &[CommandSpec] = &[
	CommandSpec {
		names: &[":type"],
		arguments: Some("<expr>"),
		summary: "print type of expression",
		build: Command::TypeOf,
	},
	CommandSpec {
		names: &[":browse"],
		arguments: None,
		summary: "browse names in scope",
		build: |_| Command::Browse,
	},
	CommandSpec {
		names: &[":load"],
		arguments: Some("<file>"),
		summary: "load program from file",
		build: Command::Load,
	},
	CommandSpec { names: &[":quit"], arguments: None, summary: "exit interpreter", build: |_| Command::Quit },
	CommandSpec {
		names: &[":help", ":?"],
		arguments: None,
		summary: "display this list of commands",
		build: |_| Command::Help,
	},
];

/// The interactive loop: one statement or command per line.
pub fn read_eval_print(interpreter: &mut impl Interpreter) {
	println!("Interpreter for {}.\nType :? for help.", interpreter.name());
	let stdin = std::io::stdin();
	prompt(interpreter);
	for line in stdin.lock().lines() {
		let Ok(line) = line else { return };
		let line = line.trim();
		if !line.is_empty() && !handle_command(interpreter, interpret_command(line)) {
			return;
		}
		prompt(interpreter);
	}
}

pub fn load_file(interpreter: &mut impl Interpreter, path: &str) {
	match std::fs::read_to_string(path) {
		Ok(text) => interpreter.interpret_program(&text),
		Err(error) => println!("cannot load {path}: {error}"),
	}
}

fn prompt(interpreter: &impl Interpreter) {
	print!("{}", interpreter.prompt());
	let _ = std::io::stdout().flush();
}

// Returns false when the session should end.
fn handle_command(interpreter: &mut impl Interpreter, command: Command) -> bool {
	match command {
		Command::TypeOf(expression) => interpreter.print_type_of(&expression),
		Command::Browse =>
			for line in interpreter.browse() {
				println!("{line}");
			},
		Command::Load(path) => load_file(interpreter, &path),
		Command::Interactive(source) => interpreter.interpret(&source),
		Command::Quit => return false,
		Command::Help => println!("{}", help()),
		Command::Noop => {}
	}
	true
}

fn interpret_command(line: &str) -> Command {
	if let Some(rest) = line.strip_prefix(':') {
		let (command, arguments) = match rest.split_once(char::is_whitespace) {
			Some((command, arguments)) => (command, arguments.trim()),
			None => (rest, ""),
		};
		let pattern = format!(":{command}");
		let matches: Vec<&CommandSpec> = COMMANDS
			.iter()
			.filter(|spec| spec.names.iter().any(|name| name.starts_with(pattern.as_str())))
			.collect();
		match matches.as_slice() {
			[] => {
				println!("Unknown command :{command}. Type :? for help.");
				Command::Noop
			}
			[spec] => (spec.build)(arguments.to_owned()),
			_ => {
				println!(
					"Ambiguous command, could be {}.",
					matches.iter().map(|spec| spec.names[0]).collect::<Vec<_>>().join(", ")
				);
				Command::Noop
			}
		}
	} else {
		Command::Interactive(line.to_owned())
	}
}

fn help() -> String {
	use std::fmt::Write;
	let mut text = String::from(
		"List of commands: Any command may be abbreviated to :c where \
		 c is the first character in the full name.\n\n\
		 <expr>                   evaluate expression\n\
		 let <var> = <expr>       define variable\n\
		 assume <var> :: <expr>   assume variable\n\n",
	);
	for spec in COMMANDS {
		let call = format!("{} {}", spec.names.join(", "), spec.arguments.unwrap_or(""));
		writeln!(text, "{}{} {}", call, " ".repeat(24usize.saturating_sub(call.len())), spec.summary)
			.unwrap();
	}
	text
}
