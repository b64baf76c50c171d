use bpaf::{construct, long, short, Parser};
use lambda_gnomon::{
	dependent::interpret::DependentInterpreter,
	session::{load_file, read_eval_print, Interpreter},
	simple::interpret::SimpleInterpreter,
};

#[derive(Clone)]
enum InputOption {
	Direct(String),
	FilePath(String),
	Interactive,
}

struct Options {
	simple: bool,
	input: InputOption,
}

fn main() {
	let options: Options = construct!(Options {
		simple(long("simple").help("Use the simply typed calculus instead of lambda-Pi").switch()),
		input(construct!([
			c(short('c')
				.argument::<String>("\"statements\"")
				.help("Read statements from argument")
				.map(InputOption::Direct)),
			f(short('f').argument::<String>("PATH").help("Load statements from file").map(InputOption::FilePath)),
			i(bpaf::pure(InputOption::Interactive)),
		]))
	})
	.to_options()
	.run();

	if options.simple {
		run(SimpleInterpreter::new(), options.input);
	} else {
		run(DependentInterpreter::new(), options.input);
	}
}

fn run(mut interpreter: impl Interpreter, input: InputOption) {
	match input {
		InputOption::Direct(source) => interpreter.interpret_program(&source),
		InputOption::FilePath(path) => load_file(&mut interpreter, &path),
		InputOption::Interactive => read_eval_print(&mut interpreter),
	}
}
