use thiserror::Error;

use crate::init::value::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InitError>;

/// Errors produced while building registries and initializing objects.
#[derive(Debug, Error)]
pub enum InitError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Two registered fields share one name.
	#[error("duplicate field {name}: first={first}, second={second}")]
	DuplicateField {
		/// Name claimed by both fields.
		name: Box<str>,
		/// Declaration index of the first field.
		first: usize,
		/// Declaration index of the second field.
		second: usize,
	},
	/// Field has no marker match and no zero-argument construction path.
	#[error("no default constructor for field {field}")]
	MissingDefault {
		/// Field that could not be default-constructed.
		field: Box<str>,
	},
	/// Matched argument count fits no constructor of the field type.
	#[error("constructor arity mismatch for field {field}: expected {expected}, got {got}")]
	CtorArity {
		/// Field being constructed.
		field: Box<str>,
		/// Argument count the constructor requires.
		expected: usize,
		/// Argument count the range supplied.
		got: usize,
	},
	/// Matched argument kind fits no constructor of the field type.
	#[error("constructor kind mismatch for field {field}: expected {expected}, got {got}")]
	CtorKind {
		/// Field being constructed.
		field: Box<str>,
		/// Value kind the constructor requires.
		expected: ValueKind,
		/// Value kind the range supplied.
		got: ValueKind,
	},
	/// Integer argument does not fit the constructor's target type.
	#[error("constructor value out of range for field {field}: {got} does not fit {target}")]
	CtorIntRange {
		/// Field being constructed.
		field: Box<str>,
		/// Supplied integer value.
		got: i128,
		/// Target integer type name.
		target: &'static str,
	},
	/// Marker names no registered field (strict mode only).
	#[error("unknown marker {name} at {at}")]
	UnknownMarker {
		/// Marker name with no matching field.
		name: Box<str>,
		/// Stream index of the marker.
		at: usize,
	},
	/// Marker repeats a name already matched earlier (strict mode only).
	#[error("duplicate marker {name}: first={first}, second={second}")]
	DuplicateMarker {
		/// Repeated marker name.
		name: Box<str>,
		/// Stream index of the first occurrence.
		first: usize,
		/// Stream index of the repeated occurrence.
		second: usize,
	},
	/// Schema default value contradicts the declared field kind.
	#[error("schema default for field {field} has kind {got}, declared {declared}")]
	SchemaDefaultKind {
		/// Field whose default is inconsistent.
		field: Box<str>,
		/// Declared field kind.
		declared: ValueKind,
		/// Kind of the supplied default.
		got: ValueKind,
	},
	/// Value kind name was not recognized.
	#[error("unknown value kind name: {kind}")]
	InvalidKindName {
		/// User-provided kind string.
		kind: String,
	},
	/// Surface input document was malformed.
	#[error("invalid input: {detail}")]
	InvalidInput {
		/// Parse failure detail.
		detail: String,
	},
}
