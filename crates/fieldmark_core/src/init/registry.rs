use crate::init::construct::FromArgs;
use crate::init::error::{InitError, Result};
use crate::init::field::{FieldDescriptor, FieldSlot, TypedSlot};

/// Ordered field registry for one target type.
///
/// Descriptors are fixed at build time and applied in declaration order;
/// indices are contiguous from zero.
pub struct Registry<O> {
	fields: Vec<FieldDescriptor<O>>,
}

impl<O> Registry<O> {
	/// Start building a registry.
	pub fn builder() -> RegistryBuilder<O> {
		RegistryBuilder { fields: Vec::new() }
	}

	/// Number of registered fields.
	pub fn count(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Descriptors in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor<O>] {
		&self.fields
	}

	/// Descriptor at declaration index, if in range.
	pub fn get(&self, index: usize) -> Option<&FieldDescriptor<O>> {
		self.fields.get(index)
	}

	/// Descriptor by field name, if registered.
	pub fn find(&self, name: &str) -> Option<&FieldDescriptor<O>> {
		self.fields.iter().find(|field| field.name() == name)
	}
}

impl<O> std::fmt::Debug for Registry<O> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry").field("fields", &self.fields).finish()
	}
}

/// Builder collecting field descriptors in declaration order.
pub struct RegistryBuilder<O> {
	fields: Vec<FieldDescriptor<O>>,
}

impl<O: 'static> RegistryBuilder<O> {
	/// Register a field with a zero-argument default path.
	pub fn field<F>(self, name: impl Into<Box<str>>, accessor: impl Fn(&mut O) -> &mut F + Send + Sync + 'static) -> Self
	where
		F: FromArgs + Default + 'static,
	{
		self.slot(name, Box::new(TypedSlot::new(accessor, Some(F::default))))
	}

	/// Register a field that must be marked in every stream.
	pub fn required<F>(self, name: impl Into<Box<str>>, accessor: impl Fn(&mut O) -> &mut F + Send + Sync + 'static) -> Self
	where
		F: FromArgs + 'static,
	{
		self.slot(name, Box::new(TypedSlot::new(accessor, None)))
	}

	/// Register a field with a caller-provided slot.
	pub fn slot(mut self, name: impl Into<Box<str>>, slot: Box<dyn FieldSlot<O>>) -> Self {
		let index = self.fields.len();
		self.fields.push(FieldDescriptor::new(name.into(), index, slot));
		self
	}

	/// Validate and freeze the registry.
	pub fn finish(self) -> Result<Registry<O>> {
		for (second, field) in self.fields.iter().enumerate() {
			if let Some(first) = self.fields[..second].iter().position(|other| other.name() == field.name()) {
				return Err(InitError::DuplicateField {
					name: field.name().into(),
					first,
					second,
				});
			}
		}

		Ok(Registry { fields: self.fields })
	}
}
