use fieldmark::init::Value;

use crate::cmd::print::{PrintOptions, render_value};

#[test]
fn scalars_render_plainly() {
	let options = PrintOptions::default();
	assert_eq!(render_value(&Value::Null, 0, options), "null");
	assert_eq!(render_value(&Value::Bool(true), 0, options), "true");
	assert_eq!(render_value(&Value::I64(-3), 0, options), "-3");
	assert_eq!(render_value(&Value::Str("s".into()), 0, options), "\"s\"");
	assert_eq!(render_value(&Value::Bytes(vec![1, 2, 3]), 0, options), "bytes[3]");
}

#[test]
fn long_strings_are_truncated() {
	let options = PrintOptions {
		max_string_len: 4,
		..PrintOptions::default()
	};
	assert_eq!(render_value(&Value::Str("abcdefgh".into()), 0, options), "\"abcd...\"");
}

#[test]
fn long_lists_report_the_overflow() {
	let options = PrintOptions {
		max_list_items: 2,
		..PrintOptions::default()
	};
	let list = Value::List(vec![Value::I64(1), Value::I64(2), Value::I64(3), Value::I64(4)]);
	assert_eq!(render_value(&list, 0, options), "[1, 2, ... 2 more]");
}

#[test]
fn deep_nesting_is_elided() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let nested = Value::List(vec![Value::List(vec![Value::I64(1)])]);
	assert_eq!(render_value(&nested, 0, options), "[[... 1 items]]");
}
