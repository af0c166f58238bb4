use crate::init::args::ArgList;
use crate::init::error::{InitError, Result};
use crate::init::token::Arg;
use crate::init::value::{Value, ValueKind};

/// Construction from exactly one argument token.
///
/// Implemented for scalar-like types; composite types implement
/// [`FromArgs`] directly instead.
pub trait FromArg: Sized {
	/// Build a value from one argument, reporting errors against `field`.
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self>;
}

/// Construction from a whole matched argument list.
pub trait FromArgs: Sized {
	/// Build a value from the positional arguments of one range.
	fn from_args(args: ArgList<'_>) -> Result<Self>;
}

fn kind_mismatch(field: &str, expected: ValueKind, got: ValueKind) -> InitError {
	InitError::CtorKind {
		field: field.into(),
		expected,
		got,
	}
}

/// Widen either integer payload kind, rejecting everything else.
fn int_value(field: &str, value: &Value, expected: ValueKind) -> Result<i128> {
	match value {
		Value::I64(v) => Ok(i128::from(*v)),
		Value::U64(v) => Ok(i128::from(*v)),
		other => Err(kind_mismatch(field, expected, other.kind())),
	}
}

fn narrow<T: TryFrom<i128>>(field: &str, wide: i128, target: &'static str) -> Result<T> {
	T::try_from(wide).map_err(|_| InitError::CtorIntRange {
		field: field.into(),
		got: wide,
		target,
	})
}

fn one(args: ArgList<'_>) -> Result<(Box<str>, Arg<'_>)> {
	let name: Box<str> = args.name().into();
	let [arg] = args.into_array::<1>()?;
	Ok((name, arg))
}

impl FromArg for Value {
	fn from_arg(_field: &str, arg: Arg<'_>) -> Result<Self> {
		Ok(arg.into_value())
	}
}

impl FromArg for bool {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		match arg.value() {
			Value::Bool(v) => Ok(*v),
			other => Err(kind_mismatch(field, ValueKind::Bool, other.kind())),
		}
	}
}

impl FromArg for i64 {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		let wide = int_value(field, arg.value(), ValueKind::I64)?;
		narrow(field, wide, "i64")
	}
}

impl FromArg for i32 {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		let wide = int_value(field, arg.value(), ValueKind::I64)?;
		narrow(field, wide, "i32")
	}
}

impl FromArg for u64 {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		let wide = int_value(field, arg.value(), ValueKind::U64)?;
		narrow(field, wide, "u64")
	}
}

impl FromArg for u32 {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		let wide = int_value(field, arg.value(), ValueKind::U64)?;
		narrow(field, wide, "u32")
	}
}

impl FromArg for f64 {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		match arg.value() {
			Value::F64(v) => Ok(*v),
			other => Err(kind_mismatch(field, ValueKind::F64, other.kind())),
		}
	}
}

impl FromArg for String {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		match arg.into_value() {
			Value::Str(v) => Ok(v.into()),
			other => Err(kind_mismatch(field, ValueKind::Str, other.kind())),
		}
	}
}

impl FromArg for Box<str> {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		match arg.into_value() {
			Value::Str(v) => Ok(v),
			other => Err(kind_mismatch(field, ValueKind::Str, other.kind())),
		}
	}
}

impl FromArg for Vec<u8> {
	fn from_arg(field: &str, arg: Arg<'_>) -> Result<Self> {
		match arg.into_value() {
			Value::Bytes(v) => Ok(v),
			other => Err(kind_mismatch(field, ValueKind::Bytes, other.kind())),
		}
	}
}

impl FromArgs for Value {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for bool {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for i64 {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for i32 {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for u64 {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for u32 {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for f64 {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for String {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for Box<str> {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

impl FromArgs for Vec<u8> {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let (name, arg) = one(args)?;
		Self::from_arg(&name, arg)
	}
}

/// Variadic constructor: consumes every argument of the range.
impl FromArgs for Vec<Value> {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		Ok(args.into_args().into_iter().map(Arg::into_value).collect())
	}
}

impl<A: FromArg> FromArgs for (A,) {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let name: Box<str> = args.name().into();
		let [a] = args.into_array::<1>()?;
		Ok((A::from_arg(&name, a)?,))
	}
}

impl<A: FromArg, B: FromArg> FromArgs for (A, B) {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let name: Box<str> = args.name().into();
		let [a, b] = args.into_array::<2>()?;
		Ok((A::from_arg(&name, a)?, B::from_arg(&name, b)?))
	}
}

impl<A: FromArg, B: FromArg, C: FromArg> FromArgs for (A, B, C) {
	fn from_args(args: ArgList<'_>) -> Result<Self> {
		let name: Box<str> = args.name().into();
		let [a, b, c] = args.into_array::<3>()?;
		Ok((A::from_arg(&name, a)?, B::from_arg(&name, b)?, C::from_arg(&name, c)?))
	}
}
