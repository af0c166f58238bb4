#![allow(missing_docs)]

use std::sync::LazyLock;

use fieldmark::init::{ArgList, FromArgs, InitError, InitOptions, Registry, Result, Token, TokenStream, initialize_all};

#[derive(Debug, Default, PartialEq)]
struct Extent {
	width: i64,
	height: i64,
}

static EXTENT_FIELDS: LazyLock<Registry<Extent>> = LazyLock::new(|| {
	Registry::builder()
		.field("width", |extent: &mut Extent| &mut extent.width)
		.field("height", |extent: &mut Extent| &mut extent.height)
		.finish()
		.expect("extent registry builds")
});

// Composite field type: positional (width, height) arguments are replayed
// through the type's own registry, one nesting level deeper.
impl FromArgs for Extent {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let [width, height] = args.into_array::<2>()?;

		let mut stream = TokenStream::new();
		stream.push_marker("width");
		stream.push(Token::Value(width));
		stream.push_marker("height");
		stream.push(Token::Value(height));

		let mut extent = Extent::default();
		initialize_all(&EXTENT_FIELDS, &mut extent, stream, &InitOptions::default())?;
		Ok(extent)
	}
}

#[derive(Debug, Default, PartialEq)]
struct Window {
	title: String,
	extent: Extent,
}

static WINDOW_FIELDS: LazyLock<Registry<Window>> = LazyLock::new(|| {
	Registry::builder()
		.field("title", |window: &mut Window| &mut window.title)
		.field("extent", |window: &mut Window| &mut window.extent)
		.finish()
		.expect("window registry builds")
});

#[test]
fn composite_field_initializes_through_its_own_registry() {
	let mut stream = TokenStream::new();
	stream.push_marker("extent");
	stream.push_owned(800);
	stream.push_owned(600);
	stream.push_marker("title");
	stream.push_owned("viewport");

	let mut window = Window::default();
	initialize_all(&WINDOW_FIELDS, &mut window, stream, &InitOptions::default()).expect("initialization succeeds");

	assert_eq!(
		window,
		Window {
			title: "viewport".to_owned(),
			extent: Extent { width: 800, height: 600 },
		}
	);
}

#[test]
fn unmarked_composite_field_defaults_its_own_fields() {
	let stream = TokenStream::from(vec![Token::marker("title"), Token::owned("bare")]);
	let mut window = Window::default();
	initialize_all(&WINDOW_FIELDS, &mut window, stream, &InitOptions::default()).expect("initialization succeeds");

	assert_eq!(window.extent, Extent::default());
}

#[test]
fn nested_errors_name_the_inner_field() {
	let mut stream = TokenStream::new();
	stream.push_marker("extent");
	stream.push_owned(800);
	stream.push_owned("six hundred");

	let mut window = Window::default();
	let err = initialize_all(&WINDOW_FIELDS, &mut window, stream, &InitOptions::default()).unwrap_err();

	let InitError::CtorKind { field, .. } = err else {
		panic!("expected kind mismatch");
	};
	assert_eq!(&*field, "height");
}

#[test]
fn composite_arity_is_checked_against_the_outer_range() {
	let mut stream = TokenStream::new();
	stream.push_marker("extent");
	stream.push_owned(800);

	let mut window = Window::default();
	let err = initialize_all(&WINDOW_FIELDS, &mut window, stream, &InitOptions::default()).unwrap_err();
	assert!(matches!(err, InitError::CtorArity { expected: 2, got: 1, .. }));
}
