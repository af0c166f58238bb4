use crate::init::error::{InitError, Result};
use crate::init::range::Range;
use crate::init::token::{Arg, Token, TokenStream};
use crate::init::value::Value;

/// Positional argument list forwarded to one field's constructor.
///
/// Carries the matched marker name for error context; the arguments keep
/// their stream order and ownership categories.
#[derive(Debug)]
pub struct ArgList<'a> {
	name: Box<str>,
	args: Vec<Arg<'a>>,
}

impl<'a> ArgList<'a> {
	/// Build a list from a field name and pre-extracted arguments.
	pub fn new(name: impl Into<Box<str>>, args: Vec<Arg<'a>>) -> Self {
		Self { name: name.into(), args }
	}

	/// Field name the arguments were matched to.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of arguments.
	pub fn len(&self) -> usize {
		self.args.len()
	}

	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}

	/// View payloads in order, regardless of ownership category.
	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.args.iter().map(Arg::value)
	}

	/// Consume into the raw argument vector.
	pub fn into_args(self) -> Vec<Arg<'a>> {
		self.args
	}

	/// Consume into exactly `N` arguments, or fail with the actual arity.
	pub fn into_array<const N: usize>(self) -> Result<[Arg<'a>; N]> {
		let Self { name, args } = self;
		let got = args.len();
		<[Arg<'a>; N]>::try_from(args).map_err(|_| InitError::CtorArity {
			field: name,
			expected: N,
			got,
		})
	}
}

/// Extract the argument tokens of `range` from a consumed stream.
///
/// Yields `stream[begin+1 .. end)` with the marker itself dropped and every
/// ownership category preserved. A not-found range extracts to an empty,
/// unnamed list.
pub fn extract<'a>(stream: TokenStream<'a>, range: Range) -> ArgList<'a> {
	if !range.found {
		return ArgList::new("", Vec::new());
	}

	let mut tokens = stream.into_tokens();
	let name = match tokens.get(range.begin) {
		Some(Token::Marker(name)) => name.clone(),
		_ => "".into(),
	};

	let start = (range.begin + 1).min(tokens.len());
	let end = range.end.clamp(start, tokens.len());
	let args = tokens
		.drain(start..end)
		.filter_map(|token| match token {
			Token::Value(arg) => Some(arg),
			Token::Marker(_) => None,
		})
		.collect();

	ArgList::new(name, args)
}
