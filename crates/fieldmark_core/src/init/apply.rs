use crate::init::args::ArgList;
use crate::init::audit::{AuditIssue, audit_stream};
use crate::init::error::{InitError, Result};
use crate::init::field::FieldDescriptor;
use crate::init::range::{Range, resolve_markers};
use crate::init::registry::Registry;
use crate::init::token::{Token, TokenStream};

/// Behavior switches for one initialization call.
///
/// Defaults reproduce the first-match semantics exactly: repeated or
/// unregistered markers are silently treated as range boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
	/// Fail when a marker names no registered field.
	pub deny_unknown_markers: bool,
	/// Fail when one field name is marked more than once.
	pub deny_duplicate_markers: bool,
}

impl InitOptions {
	/// Preset that rejects every marker anomaly.
	pub fn strict() -> Self {
		Self {
			deny_unknown_markers: true,
			deny_duplicate_markers: true,
		}
	}
}

/// Initialize every registered field of `object` from `stream`.
///
/// Fields are applied in strictly ascending declaration order, independent
/// of marker order. Each field is constructed from its resolved argument
/// range, or by its zero-argument path when its name is not marked. A
/// registry with zero fields is an unconditional no-op: the stream is never
/// inspected and no constructor runs.
pub fn initialize_all<O>(registry: &Registry<O>, object: &mut O, stream: TokenStream<'_>, options: &InitOptions) -> Result<()> {
	if registry.is_empty() {
		return Ok(());
	}

	if options.deny_unknown_markers || options.deny_duplicate_markers {
		check_markers(registry, &stream, options)?;
	}

	let mut slots: Vec<Option<Token<'_>>> = stream.into_tokens().into_iter().map(Some).collect();
	for descriptor in registry.fields() {
		initialize_field(descriptor, object, &mut slots)?;
	}

	Ok(())
}

/// Resolve, extract, and construct one field.
fn initialize_field<O>(descriptor: &FieldDescriptor<O>, object: &mut O, slots: &mut [Option<Token<'_>>]) -> Result<()> {
	let range = resolve_slots(slots, descriptor.name());

	if range.found {
		let args = take_range(slots, range, descriptor.name());
		return descriptor.slot().construct(object, args);
	}

	if descriptor.slot().has_default() {
		descriptor.slot().construct_default(object);
		return Ok(());
	}

	Err(InitError::MissingDefault {
		field: descriptor.name().into(),
	})
}

fn check_markers<O>(registry: &Registry<O>, stream: &TokenStream<'_>, options: &InitOptions) -> Result<()> {
	for issue in audit_stream(registry, stream) {
		match issue {
			AuditIssue::UnknownMarker { name, at } if options.deny_unknown_markers => {
				return Err(InitError::UnknownMarker { name, at });
			}
			AuditIssue::DuplicateMarker { name, first, at } if options.deny_duplicate_markers => {
				return Err(InitError::DuplicateMarker {
					name,
					first,
					second: at,
				});
			}
			_ => {}
		}
	}
	Ok(())
}

/// Marker positions survive extraction, so ranges stay valid across fields.
fn resolve_slots(slots: &[Option<Token<'_>>], name: &str) -> Range {
	resolve_markers(
		slots.len(),
		|index| slots.get(index).and_then(|slot| slot.as_ref()).and_then(Token::marker_name),
		name,
	)
}

/// Move the values of `range` out of their slots, once each.
fn take_range<'a>(slots: &mut [Option<Token<'a>>], range: Range, name: &str) -> ArgList<'a> {
	let mut args = Vec::with_capacity(range.arg_count());
	for slot in &mut slots[range.begin + 1..range.end] {
		if let Some(Token::Value(arg)) = slot.take_if(|token| matches!(token, Token::Value(_))) {
			args.push(arg);
		}
	}
	ArgList::new(name, args)
}

#[cfg(test)]
mod tests;
