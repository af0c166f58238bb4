use fieldmark::init::{Record, Value};

/// Output truncation limits for rendered values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum recursive render depth for nested lists.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_list_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one record in `name = value` lines.
pub fn print_record(record: &Record, options: PrintOptions) {
	println!("fields: {}", record.fields().len());
	for field in record.fields() {
		println!("  {} = {}", field.name, render_value(&field.value, 0, options));
	}
}

/// Render a value as a single display line.
pub fn render_value(value: &Value, depth: u32, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::Str(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Bytes(v) => format!("bytes[{}]", v.len()),
		Value::List(items) => {
			if depth >= options.max_print_depth {
				return format!("[... {} items]", items.len());
			}
			let mut parts: Vec<String> = items.iter().take(options.max_list_items).map(|item| render_value(item, depth + 1, options)).collect();
			if items.len() > options.max_list_items {
				parts.push(format!("... {} more", items.len() - options.max_list_items));
			}
			format!("[{}]", parts.join(", "))
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
