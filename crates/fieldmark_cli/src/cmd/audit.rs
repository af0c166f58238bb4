use std::path::PathBuf;

use fieldmark::init::{AuditIssue, Result, audit_stream};
use serde::Serialize;

use crate::cmd::input;
use crate::cmd::resolve::render_json;

#[derive(Serialize)]
struct AuditJson {
	path: String,
	issues: Vec<IssueJson>,
}

#[derive(Serialize)]
struct IssueJson {
	kind: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	at: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	first: Option<usize>,
}

/// Report marker and value binding anomalies for the document.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let doc = input::load(&path)?;
	let schema = doc.schema()?;
	let stream = doc.stream()?;
	let registry = schema.registry()?;
	let issues = audit_stream(&registry, &stream);

	if json {
		let payload = AuditJson {
			path: path.display().to_string(),
			issues: issues.iter().map(issue_json).collect(),
		};
		println!("{}", render_json(&payload)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("issues: {}", issues.len());
	for issue in &issues {
		match issue {
			AuditIssue::UnknownMarker { name, at } => println!("  unknown marker \"{name}\" at {at}"),
			AuditIssue::DuplicateMarker { name, first, at } => println!("  duplicate marker \"{name}\" at {at}, first at {first}"),
			AuditIssue::UnboundValue { at } => println!("  unbound value at {at}"),
		}
	}

	Ok(())
}

fn issue_json(issue: &AuditIssue) -> IssueJson {
	match issue {
		AuditIssue::UnknownMarker { name, at } => IssueJson {
			kind: "unknown_marker",
			name: Some(name.to_string()),
			at: *at,
			first: None,
		},
		AuditIssue::DuplicateMarker { name, first, at } => IssueJson {
			kind: "duplicate_marker",
			name: Some(name.to_string()),
			at: *at,
			first: Some(*first),
		},
		AuditIssue::UnboundValue { at } => IssueJson {
			kind: "unbound_value",
			name: None,
			at: *at,
			first: None,
		},
	}
}
