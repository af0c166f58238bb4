use std::path::PathBuf;

use fieldmark::init::{Result, resolve};
use serde::Serialize;

use crate::cmd::input;

#[derive(Serialize)]
struct ResolveJson {
	path: String,
	name: String,
	found: bool,
	begin: usize,
	end: usize,
	args: usize,
}

/// Resolve one field name against the document's stream.
pub fn run(path: PathBuf, name: String, json: bool) -> Result<()> {
	let doc = input::load(&path)?;
	let stream = doc.stream()?;
	let range = resolve(&name, &stream);

	if json {
		let payload = ResolveJson {
			path: path.display().to_string(),
			name,
			found: range.found,
			begin: range.begin,
			end: range.end,
			args: range.arg_count(),
		};
		println!("{}", render_json(&payload)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("name: {name}");
	println!("stream_len: {}", stream.len());
	println!("found: {}", range.found);
	println!("begin: {}", range.begin);
	println!("end: {}", range.end);
	println!("args: {}", range.arg_count());

	Ok(())
}

pub(crate) fn render_json<T: Serialize>(payload: &T) -> Result<String> {
	serde_json::to_string_pretty(payload).map_err(|err| fieldmark::init::InitError::InvalidInput { detail: err.to_string() })
}
