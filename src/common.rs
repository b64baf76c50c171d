use lasso::Spur;

// de Bruijn index: zero is the innermost binder at the point of use.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Index(pub usize);

impl std::ops::Add<usize> for Index {
	type Output = Self;
	fn add(self, rhs: usize) -> Self::Output {
		let Self(index) = self;
		Self(index + rhs)
	}
}

// Binder-opening counter: zero is the outermost binder opened by a checking call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Depth(pub(crate) usize);

impl std::ops::Add<usize> for Depth {
	type Output = Self;
	fn add(self, rhs: usize) -> Self::Output {
		let Self(depth) = self;
		Self(depth + rhs)
	}
}

// de Bruijn level: counts binders outward from the root, synthesized while quoting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Level(pub(crate) usize);

impl Level {
	/// Converts a level synthesized under `self` binders back into an index.
	pub(crate) fn index_of(self, Level(level): Level) -> Index {
		let Self(binders) = self;
		Index(binders.checked_sub(level + 1).unwrap_or_else(|| defect("quoted level escapes its binders")))
	}
}

impl std::ops::Add<usize> for Level {
	type Output = Self;
	fn add(self, rhs: usize) -> Self::Output {
		let Self(level) = self;
		Self(level + rhs)
	}
}

/// A variable name. Only globals outlive the call that introduced them: locals
/// exist while a binder is open inside one checking call, and quotation names
/// exist while a value is being read back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Name {
	Global(Spur),
	Local(Depth),
	Quote(Level),
}

/// A sort of the pure type system; the empty label is the "any sort" wildcard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SortLabel(pub Spur);

#[derive(Clone, Debug)]
pub enum Statement<T, A> {
	Let { name: Spur, term: T },
	Assume(Vec<Binding<A>>),
	Eval(T),
	PutStrLn(String),
	Out(String),
}

#[derive(Clone, Debug)]
pub struct Binding<A> {
	pub name: Spur,
	pub classifier: A,
}

const DISPLAY_NAMES: &[u8; 26] = b"xyzabcdefghijklmnopqrstuvw";

/// Synthesizes a display name for the binder at the given nesting position.
pub fn display_name(position: usize) -> String {
	let initial = DISPLAY_NAMES[position % 26] as char;
	match position / 26 {
		0 => initial.to_string(),
		suffix => format!("{initial}{suffix}"),
	}
}

/// Aborts on a violation of the binder-opening discipline. Never reachable from
/// a rejected user program.
#[track_caller]
pub(crate) fn defect(message: &str) -> ! { panic!("internal defect: {message}") }
