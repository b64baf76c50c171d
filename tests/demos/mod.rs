use std::{ffi::OsStr, fs};

use lambda_gnomon::{
	dependent::interpret::DependentInterpreter,
	session::Interpreter as _,
	simple::interpret::SimpleInterpreter,
};

const DEPENDENT_EXTENSION: &str = "lp";
const SIMPLE_EXTENSION: &str = "st";

/// Ensures every demo program runs through its interpreter front to back.
#[test]
fn run_dependent_demos() {
	for path in fs::read_dir("demos")
		.unwrap()
		.flatten()
		.map(|entry| entry.path())
		.filter(|path| path.extension() == Some(OsStr::new(DEPENDENT_EXTENSION)))
	{
		let path_str = path.as_os_str().to_str().unwrap().to_owned();
		let source = fs::read_to_string(path).expect(&path_str);
		let mut interpreter = DependentInterpreter::new();
		interpreter.interpret_program(&source);
	}
}

#[test]
fn run_simple_demos() {
	for path in fs::read_dir("demos")
		.unwrap()
		.flatten()
		.map(|entry| entry.path())
		.filter(|path| path.extension() == Some(OsStr::new(SIMPLE_EXTENSION)))
	{
		let path_str = path.as_os_str().to_str().unwrap().to_owned();
		let source = fs::read_to_string(path).expect(&path_str);
		let mut interpreter = SimpleInterpreter::new();
		interpreter.interpret_program(&source);
	}
}

// The church numeral demo drives the whole pipeline; its last line is pinned
// here through the bare contract instead of captured output.
#[test]
fn church_addition_normalizes() {
	let mut harness = crate::common::DependentHarness::new();
	harness.define("nat", "forall (a :: *) . (a -> a) -> a -> a").unwrap();
	harness.define("zero", "(\\a f x -> x) :: nat").unwrap();
	harness.define("succ", "(\\n a f x -> f (n a f x)) :: nat -> nat").unwrap();
	harness
		.define("add", "(\\m n a f x -> m a f (n a f x)) :: nat -> nat -> nat")
		.unwrap();
	harness.define("one", "succ zero").unwrap();
	harness.define("two", "succ one").unwrap();
	let normal = harness.normalize("add one two");
	let expected = harness.normalize("succ (succ (succ zero))");
	assert_eq!(normal, expected);
}
