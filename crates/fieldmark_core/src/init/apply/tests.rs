use crate::init::apply::{InitOptions, initialize_all};
use crate::init::error::InitError;
use crate::init::registry::Registry;
use crate::init::token::{Token, TokenStream};

#[derive(Debug, Default, PartialEq)]
struct Pair {
	x: i64,
	y: String,
}

fn pair_registry() -> Registry<Pair> {
	Registry::builder()
		.field("x", |pair: &mut Pair| &mut pair.x)
		.field("y", |pair: &mut Pair| &mut pair.y)
		.finish()
		.expect("registry builds")
}

fn init_pair(stream: TokenStream<'_>) -> Pair {
	let mut pair = Pair::default();
	initialize_all(&pair_registry(), &mut pair, stream, &InitOptions::default()).expect("initialization succeeds");
	pair
}

#[test]
fn marked_fields_take_their_argument_spans() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(5), Token::marker("y"), Token::owned("str")]);
	assert_eq!(init_pair(stream), Pair { x: 5, y: "str".to_owned() });
}

#[test]
fn marker_order_does_not_change_the_result() {
	let stream = TokenStream::from(vec![Token::marker("y"), Token::owned("str"), Token::marker("x"), Token::owned(5)]);
	assert_eq!(init_pair(stream), Pair { x: 5, y: "str".to_owned() });
}

#[test]
fn pair_constructor_consumes_the_whole_range() {
	#[derive(Debug, Default, PartialEq)]
	struct Wide {
		x: (i64, i64),
		y: String,
	}

	let registry = Registry::builder()
		.field("x", |wide: &mut Wide| &mut wide.x)
		.field("y", |wide: &mut Wide| &mut wide.y)
		.finish()
		.expect("registry builds");

	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(5), Token::owned(6)]);
	let mut wide = Wide::default();
	initialize_all(&registry, &mut wide, stream, &InitOptions::default()).expect("initialization succeeds");

	assert_eq!(wide, Wide { x: (5, 6), y: String::new() });
}

#[test]
fn empty_stream_defaults_every_field() {
	let pair = init_pair(TokenStream::new());
	assert_eq!(pair, Pair::default());
}

#[test]
fn repeated_marker_matches_first_and_drops_the_tail() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(1), Token::marker("x"), Token::owned(2)]);
	let pair = init_pair(stream);
	assert_eq!(pair.x, 1);
	assert_eq!(pair.y, String::new());
}

#[test]
fn empty_registry_never_inspects_the_stream() {
	struct Bare;
	let registry = Registry::<Bare>::builder().finish().expect("registry builds");

	// a stream that would fail every check if it were looked at
	let stream = TokenStream::from(vec![Token::marker("nope"), Token::owned(1), Token::marker("nope")]);
	let mut bare = Bare;
	initialize_all(&registry, &mut bare, stream, &InitOptions::strict()).expect("no-op succeeds");
}

#[test]
fn fields_are_applied_in_declaration_order() {
	use crate::init::args::ArgList;
	use crate::init::error::Result;
	use crate::init::field::FieldSlot;

	#[derive(Default)]
	struct Trace {
		applied: Vec<&'static str>,
	}

	struct LogSlot(&'static str);

	impl FieldSlot<Trace> for LogSlot {
		fn construct(&self, object: &mut Trace, _args: ArgList<'_>) -> Result<()> {
			object.applied.push(self.0);
			Ok(())
		}

		fn has_default(&self) -> bool {
			true
		}

		fn construct_default(&self, object: &mut Trace) {
			object.applied.push(self.0);
		}
	}

	let registry = Registry::builder()
		.slot("a", Box::new(LogSlot("a")))
		.slot("b", Box::new(LogSlot("b")))
		.slot("c", Box::new(LogSlot("c")))
		.finish()
		.expect("registry builds");

	// markers deliberately reversed relative to declaration order
	let stream = TokenStream::from(vec![
		Token::marker("c"),
		Token::owned(3),
		Token::marker("b"),
		Token::owned(2),
		Token::marker("a"),
		Token::owned(1),
	]);

	let mut trace = Trace::default();
	initialize_all(&registry, &mut trace, stream, &InitOptions::default()).expect("initialization succeeds");
	assert_eq!(trace.applied, vec!["a", "b", "c"]);
}

#[test]
fn missing_default_is_a_hard_error() {
	#[derive(Default)]
	struct Strict {
		x: i64,
	}

	let registry = Registry::builder()
		.required("x", |strict: &mut Strict| &mut strict.x)
		.finish()
		.expect("registry builds");

	let mut strict = Strict::default();
	let err = initialize_all(&registry, &mut strict, TokenStream::new(), &InitOptions::default()).unwrap_err();
	let InitError::MissingDefault { field } = err else {
		panic!("expected missing default error");
	};
	assert_eq!(&*field, "x");
}

#[test]
fn constructor_mismatch_propagates() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned("not a number")]);
	let mut pair = Pair::default();
	let err = initialize_all(&pair_registry(), &mut pair, stream, &InitOptions::default()).unwrap_err();
	assert!(matches!(err, InitError::CtorKind { .. }));
}

#[test]
fn strict_mode_rejects_unknown_markers() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(1), Token::marker("q"), Token::owned(2)]);
	let mut pair = Pair::default();
	let err = initialize_all(&pair_registry(), &mut pair, stream, &InitOptions::strict()).unwrap_err();

	let InitError::UnknownMarker { name, at } = err else {
		panic!("expected unknown marker error");
	};
	assert_eq!(&*name, "q");
	assert_eq!(at, 2);
}

#[test]
fn strict_mode_rejects_duplicate_markers() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(1), Token::marker("x"), Token::owned(2)]);
	let mut pair = Pair::default();
	let err = initialize_all(&pair_registry(), &mut pair, stream, &InitOptions::strict()).unwrap_err();

	let InitError::DuplicateMarker { name, first, second } = err else {
		panic!("expected duplicate marker error");
	};
	assert_eq!(&*name, "x");
	assert_eq!(first, 0);
	assert_eq!(second, 2);
}

#[test]
fn default_options_tolerate_repeated_markers() {
	let stream = TokenStream::from(vec![Token::marker("x"), Token::owned(1), Token::marker("x"), Token::owned(2)]);
	let mut pair = Pair::default();
	initialize_all(&pair_registry(), &mut pair, stream, &InitOptions::default()).expect("lenient by default");
	assert_eq!(pair.x, 1);
}
