use std::path::Path;

use fieldmark::init::{InitError, Result, Schema, SchemaField, TokenStream, Value};
use serde::Deserialize;

/// Schema + stream document consumed by every subcommand.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
	/// Field declarations in declaration order.
	#[serde(default)]
	pub schema: Vec<FieldSpec>,
	/// Token stream in stream order.
	#[serde(default)]
	pub stream: Vec<TokenSpec>,
}

/// One schema field declaration as written in the document.
#[derive(Debug, Deserialize)]
pub struct FieldSpec {
	pub name: String,
	#[serde(default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub default: Option<serde_json::Value>,
	#[serde(default)]
	pub variadic: bool,
}

/// One stream token as written in the document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenSpec {
	/// `{"marker": "name"}`
	Marker {
		marker: String,
	},
	/// `{"value": ...}`
	Value {
		value: serde_json::Value,
	},
}

/// Read and parse an input document.
pub fn load(path: &Path) -> Result<InputDoc> {
	let text = std::fs::read_to_string(path)?;
	serde_json::from_str(&text).map_err(|err| InitError::InvalidInput { detail: err.to_string() })
}

impl InputDoc {
	/// Build the core schema from the document declarations.
	pub fn schema(&self) -> Result<Schema> {
		let mut fields = Vec::with_capacity(self.schema.len());
		for spec in &self.schema {
			fields.push(SchemaField {
				name: spec.name.clone().into_boxed_str(),
				kind: spec.kind.as_deref().map(str::parse).transpose()?,
				default: spec.default.as_ref().map(json_to_value).transpose()?,
				variadic: spec.variadic,
			});
		}
		Ok(Schema::new(fields))
	}

	/// Build the core token stream from the document tokens.
	///
	/// Document values are always owned temporaries; the borrowed category
	/// only exists for in-process callers.
	pub fn stream(&self) -> Result<TokenStream<'static>> {
		let mut stream = TokenStream::new();
		for token in &self.stream {
			match token {
				TokenSpec::Marker { marker } => stream.push_marker(marker.as_str()),
				TokenSpec::Value { value } => stream.push_owned(json_to_value(value)?),
			}
		}
		Ok(stream)
	}
}

/// Map a JSON payload onto the core value model.
pub fn json_to_value(json: &serde_json::Value) -> Result<Value> {
	match json {
		serde_json::Value::Null => Ok(Value::Null),
		serde_json::Value::Bool(v) => Ok(Value::Bool(*v)),
		serde_json::Value::Number(number) => {
			if let Some(v) = number.as_i64() {
				Ok(Value::I64(v))
			} else if let Some(v) = number.as_u64() {
				Ok(Value::U64(v))
			} else if let Some(v) = number.as_f64() {
				Ok(Value::F64(v))
			} else {
				Err(InitError::InvalidInput {
					detail: format!("unrepresentable number: {number}"),
				})
			}
		}
		serde_json::Value::String(v) => Ok(Value::Str(v.clone().into_boxed_str())),
		serde_json::Value::Array(items) => {
			let mut out = Vec::with_capacity(items.len());
			for item in items {
				out.push(json_to_value(item)?);
			}
			Ok(Value::List(out))
		}
		serde_json::Value::Object(_) => Err(InitError::InvalidInput {
			detail: "objects are not valid argument values".to_owned(),
		}),
	}
}

/// Render a core value as JSON.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::I64(v) => serde_json::Value::from(*v),
		Value::U64(v) => serde_json::Value::from(*v),
		Value::F64(v) => serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number),
		Value::Str(v) => serde_json::Value::String(v.to_string()),
		Value::Bytes(v) => serde_json::Value::Array(v.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
		Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
	}
}
