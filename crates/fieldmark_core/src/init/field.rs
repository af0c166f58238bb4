use crate::init::args::ArgList;
use crate::init::construct::FromArgs;
use crate::init::error::Result;

/// Per-field construction dispatch.
///
/// A slot knows how to build exactly one field of `O`, either from a
/// matched argument list or, when it has one, via its zero-argument path.
pub trait FieldSlot<O>: Send + Sync {
	/// Construct the field from the extracted arguments.
	fn construct(&self, object: &mut O, args: ArgList<'_>) -> Result<()>;

	/// Whether a zero-argument construction path exists.
	fn has_default(&self) -> bool;

	/// Construct the field by its zero-argument path.
	///
	/// Only invoked when [`FieldSlot::has_default`] is true; a slot without
	/// a default path leaves the object untouched.
	fn construct_default(&self, object: &mut O);
}

/// Slot for a statically typed field reached through an accessor.
pub struct TypedSlot<O, F> {
	accessor: Box<dyn Fn(&mut O) -> &mut F + Send + Sync>,
	default: Option<fn() -> F>,
}

impl<O, F: FromArgs> TypedSlot<O, F> {
	/// Build a slot from a field accessor and an optional default constructor.
	pub fn new(accessor: impl Fn(&mut O) -> &mut F + Send + Sync + 'static, default: Option<fn() -> F>) -> Self {
		Self {
			accessor: Box::new(accessor),
			default,
		}
	}
}

impl<O, F: FromArgs> FieldSlot<O> for TypedSlot<O, F> {
	fn construct(&self, object: &mut O, args: ArgList<'_>) -> Result<()> {
		let value = F::from_args(args)?;
		*(self.accessor)(object) = value;
		Ok(())
	}

	fn has_default(&self) -> bool {
		self.default.is_some()
	}

	fn construct_default(&self, object: &mut O) {
		if let Some(ctor) = self.default {
			*(self.accessor)(object) = ctor();
		}
	}
}

/// Static metadata binding a field's name, declaration order, and slot.
pub struct FieldDescriptor<O> {
	name: Box<str>,
	index: usize,
	slot: Box<dyn FieldSlot<O>>,
}

impl<O> FieldDescriptor<O> {
	pub(crate) fn new(name: Box<str>, index: usize, slot: Box<dyn FieldSlot<O>>) -> Self {
		Self { name, index, slot }
	}

	/// Field name matched against stream markers.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Ordinal position in declaration order.
	pub fn index(&self) -> usize {
		self.index
	}

	pub(crate) fn slot(&self) -> &dyn FieldSlot<O> {
		&*self.slot
	}
}

impl<O> std::fmt::Debug for FieldDescriptor<O> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("index", &self.index)
			.field("has_default", &self.slot.has_default())
			.finish()
	}
}
