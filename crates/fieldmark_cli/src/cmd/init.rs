use std::path::PathBuf;

use fieldmark::init::{InitOptions, Result};
use serde::Serialize;

use crate::cmd::input::{self, value_to_json};
use crate::cmd::print::{PrintOptions, print_record};
use crate::cmd::resolve::render_json;

#[derive(Serialize)]
struct InitJson {
	path: String,
	strict: bool,
	fields: Vec<FieldJson>,
}

#[derive(Serialize)]
struct FieldJson {
	name: String,
	value: serde_json::Value,
}

/// Instantiate the document's schema against its stream and print the record.
pub fn run(path: PathBuf, strict: bool, json: bool) -> Result<()> {
	let doc = input::load(&path)?;
	let schema = doc.schema()?;
	let stream = doc.stream()?;

	let options = if strict { InitOptions::strict() } else { InitOptions::default() };
	let record = schema.instantiate(stream, &options)?;

	if json {
		let payload = InitJson {
			path: path.display().to_string(),
			strict,
			fields: record
				.fields()
				.iter()
				.map(|field| FieldJson {
					name: field.name.to_string(),
					value: value_to_json(&field.value),
				})
				.collect(),
		};
		println!("{}", render_json(&payload)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("strict: {strict}");
	print_record(&record, PrintOptions::default());

	Ok(())
}
