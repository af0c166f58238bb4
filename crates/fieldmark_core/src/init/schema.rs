use crate::init::apply::{InitOptions, initialize_all};
use crate::init::args::ArgList;
use crate::init::error::{InitError, Result};
use crate::init::field::FieldSlot;
use crate::init::registry::Registry;
use crate::init::token::TokenStream;
use crate::init::value::{Value, ValueKind};

/// One field declaration of a runtime-typed schema.
#[derive(Debug, Clone)]
pub struct SchemaField {
	/// Field name matched against stream markers.
	pub name: Box<str>,
	/// Required payload kind; `None` accepts any kind.
	pub kind: Option<ValueKind>,
	/// Zero-argument construction value; `None` makes the field required.
	pub default: Option<Value>,
	/// Collect the whole argument range into a list instead of one value.
	pub variadic: bool,
}

impl SchemaField {
	/// Declare a field accepting any payload kind, defaulting to null.
	pub fn any(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			kind: None,
			default: Some(Value::Null),
			variadic: false,
		}
	}

	/// Declare a kinded field with a default value.
	pub fn with_default(name: impl Into<Box<str>>, kind: ValueKind, default: Value) -> Self {
		Self {
			name: name.into(),
			kind: Some(kind),
			default: Some(default),
			variadic: false,
		}
	}

	/// Declare a kinded field that must be marked in every stream.
	pub fn required(name: impl Into<Box<str>>, kind: ValueKind) -> Self {
		Self {
			name: name.into(),
			kind: Some(kind),
			default: None,
			variadic: false,
		}
	}
}

/// Ordered runtime-typed field declarations.
///
/// A schema is the dynamic counterpart of a typed registry: it compiles to
/// a [`Registry`] over [`Record`] and gives callers without compile-time
/// types, the CLI included, the same initialization mechanism.
#[derive(Debug, Clone)]
pub struct Schema {
	fields: Vec<SchemaField>,
}

/// One named value of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Current payload.
	pub value: Value,
}

/// Runtime-typed object instantiated from a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	fields: Vec<FieldValue>,
}

impl Record {
	/// Fields in declaration order.
	pub fn fields(&self) -> &[FieldValue] {
		&self.fields
	}

	/// Payload by field name, if declared.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}

	fn set(&mut self, index: usize, value: Value) {
		self.fields[index].value = value;
	}
}

impl Schema {
	/// Build a schema from declarations in declaration order.
	pub fn new(fields: Vec<SchemaField>) -> Self {
		Self { fields }
	}

	/// Declarations in declaration order.
	pub fn fields(&self) -> &[SchemaField] {
		&self.fields
	}

	/// Compile the schema into a record registry.
	///
	/// Validates the declarations ahead of first use: duplicate names and
	/// defaults contradicting the declared kind are rejected here.
	pub fn registry(&self) -> Result<Registry<Record>> {
		let mut builder = Registry::builder();
		for (index, field) in self.fields.iter().enumerate() {
			check_default(field)?;
			builder = builder.slot(
				field.name.clone(),
				Box::new(SchemaSlot {
					index,
					kind: field.kind,
					default: field.default.clone(),
					variadic: field.variadic,
				}),
			);
		}
		builder.finish()
	}

	/// Record with every field present and null.
	pub fn blank_record(&self) -> Record {
		Record {
			fields: self
				.fields
				.iter()
				.map(|field| FieldValue {
					name: field.name.clone(),
					value: Value::Null,
				})
				.collect(),
		}
	}

	/// Compile and initialize a record from `stream` in one call.
	pub fn instantiate(&self, stream: TokenStream<'_>, options: &InitOptions) -> Result<Record> {
		let registry = self.registry()?;
		let mut record = self.blank_record();
		initialize_all(&registry, &mut record, stream, options)?;
		Ok(record)
	}
}

struct SchemaSlot {
	index: usize,
	kind: Option<ValueKind>,
	default: Option<Value>,
	variadic: bool,
}

impl FieldSlot<Record> for SchemaSlot {
	fn construct(&self, record: &mut Record, args: ArgList<'_>) -> Result<()> {
		let name: Box<str> = args.name().into();

		let value = if self.variadic {
			let mut items = Vec::with_capacity(args.len());
			for arg in args.into_args() {
				items.push(coerce(&name, arg.into_value(), self.kind)?);
			}
			Value::List(items)
		} else {
			let [arg] = args.into_array::<1>()?;
			coerce(&name, arg.into_value(), self.kind)?
		};

		record.set(self.index, value);
		Ok(())
	}

	fn has_default(&self) -> bool {
		self.default.is_some()
	}

	fn construct_default(&self, record: &mut Record) {
		if let Some(default) = &self.default {
			record.set(self.index, default.clone());
		}
	}
}

/// Check a supplied payload against the declared kind.
///
/// Integer payloads cross between `i64` and `u64` when the conversion is
/// lossless; everything else must match exactly.
fn coerce(field: &str, value: Value, kind: Option<ValueKind>) -> Result<Value> {
	let Some(kind) = kind else {
		return Ok(value);
	};
	if value.kind() == kind {
		return Ok(value);
	}

	match (kind, &value) {
		(ValueKind::I64, Value::U64(_)) => {
			if let Some(v) = value.as_i64() {
				return Ok(Value::I64(v));
			}
		}
		(ValueKind::U64, Value::I64(_)) => {
			if let Some(v) = value.as_u64() {
				return Ok(Value::U64(v));
			}
		}
		_ => {}
	}

	Err(InitError::CtorKind {
		field: field.into(),
		expected: kind,
		got: value.kind(),
	})
}

fn check_default(field: &SchemaField) -> Result<()> {
	let (Some(kind), Some(default)) = (field.kind, &field.default) else {
		return Ok(());
	};

	let consistent = if field.variadic {
		match default {
			Value::List(items) => items.iter().all(|item| coerce(&field.name, item.clone(), Some(kind)).is_ok()),
			_ => false,
		}
	} else {
		coerce(&field.name, default.clone(), Some(kind)).is_ok()
	};

	if consistent {
		Ok(())
	} else {
		Err(InitError::SchemaDefaultKind {
			field: field.name.clone(),
			declared: kind,
			got: default.kind(),
		})
	}
}
