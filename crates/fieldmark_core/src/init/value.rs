use std::fmt;
use std::str::FromStr;

use crate::init::error::InitError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	I64(i64),
	U64(u64),
	F64(f64),
	Str(Box<str>),
	Bytes(Vec<u8>),
	List(Vec<Value>),
}

/// Discriminant of a [`Value`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	Null,
	Bool,
	I64,
	U64,
	F64,
	Str,
	Bytes,
	List,
}

impl Value {
	/// Return the kind discriminant of this payload.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::I64(_) => ValueKind::I64,
			Value::U64(_) => ValueKind::U64,
			Value::F64(_) => ValueKind::F64,
			Value::Str(_) => ValueKind::Str,
			Value::Bytes(_) => ValueKind::Bytes,
			Value::List(_) => ValueKind::List,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Signed view, accepting unsigned payloads that fit.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::I64(v) => Some(*v),
			Value::U64(v) => i64::try_from(*v).ok(),
			_ => None,
		}
	}

	/// Unsigned view, accepting non-negative signed payloads.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Value::U64(v) => Some(*v),
			Value::I64(v) => u64::try_from(*v).ok(),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::F64(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Str(v) => Some(v),
			_ => None,
		}
	}
}

impl ValueKind {
	/// Stable lowercase label, also accepted by [`FromStr`].
	pub fn as_str(&self) -> &'static str {
		match self {
			ValueKind::Null => "null",
			ValueKind::Bool => "bool",
			ValueKind::I64 => "i64",
			ValueKind::U64 => "u64",
			ValueKind::F64 => "f64",
			ValueKind::Str => "str",
			ValueKind::Bytes => "bytes",
			ValueKind::List => "list",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ValueKind {
	type Err = InitError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"null" => Ok(ValueKind::Null),
			"bool" => Ok(ValueKind::Bool),
			"i64" => Ok(ValueKind::I64),
			"u64" => Ok(ValueKind::U64),
			"f64" => Ok(ValueKind::F64),
			"str" => Ok(ValueKind::Str),
			"bytes" => Ok(ValueKind::Bytes),
			"list" => Ok(ValueKind::List),
			other => Err(InitError::InvalidKindName { kind: other.to_owned() }),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::I64(i64::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::I64(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::U64(u64::from(v))
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::U64(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::F64(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Str(v.into())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Str(v.into_boxed_str())
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Value::Bytes(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::List(v)
	}
}
