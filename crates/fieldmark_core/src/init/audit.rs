use crate::init::range::resolve;
use crate::init::registry::Registry;
use crate::init::token::{Token, TokenStream};

/// One diagnostic finding from [`audit_stream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditIssue {
	/// Marker names no registered field.
	UnknownMarker {
		/// Unmatched marker name.
		name: Box<str>,
		/// Stream index of the marker.
		at: usize,
	},
	/// Marker repeats a name that already matched earlier in the stream.
	DuplicateMarker {
		/// Repeated marker name.
		name: Box<str>,
		/// Stream index of the first occurrence.
		first: usize,
		/// Stream index of this occurrence.
		at: usize,
	},
	/// Value token that no field's range will consume.
	UnboundValue {
		/// Stream index of the orphaned value.
		at: usize,
	},
}

/// Report marker and value binding anomalies without changing behavior.
///
/// Initialization itself never raises these: by default a repeated marker
/// only terminates the earlier range and orphaned values vanish silently.
/// The report lists marker issues in stream order, then unbound values in
/// stream order.
pub fn audit_stream<O>(registry: &Registry<O>, stream: &TokenStream<'_>) -> Vec<AuditIssue> {
	let mut issues = Vec::new();
	let mut seen: Vec<(&str, usize)> = Vec::new();

	for (at, token) in stream.iter().enumerate() {
		let Some(name) = token.marker_name() else {
			continue;
		};
		if registry.find(name).is_none() {
			issues.push(AuditIssue::UnknownMarker { name: name.into(), at });
			continue;
		}
		match seen.iter().find(|(other, _)| *other == name) {
			Some((_, first)) => issues.push(AuditIssue::DuplicateMarker {
				name: name.into(),
				first: *first,
				at,
			}),
			None => seen.push((name, at)),
		}
	}

	let mut bound = vec![false; stream.len()];
	for descriptor in registry.fields() {
		let range = resolve(descriptor.name(), stream);
		if range.found {
			for flag in &mut bound[range.begin + 1..range.end] {
				*flag = true;
			}
		}
	}

	for (at, token) in stream.iter().enumerate() {
		if matches!(token, Token::Value(_)) && !bound[at] {
			issues.push(AuditIssue::UnboundValue { at });
		}
	}

	issues
}
