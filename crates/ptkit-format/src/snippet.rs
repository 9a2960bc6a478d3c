//! Comment-block snippets.
//!
//! A snippet lives inside a larger source text, between a begin line carrying a tag and
//! an optional whitespace mode, and an end line repeating the tag:
//!
//! ```text
//! fn rows() {
//!     /*<<<ROW;TRIM
//!         <tr><td>%s</td><td>%d</td></tr>
//!     ROW*/
//! }
//! ```
//!
//! The begin line may also open with `/*!`. Structural problems are soft failures:
//! [`format_snippet`] returns them inline as `FORMAT_ERROR:<diagnostic>` strings, while
//! substitution errors inside the body stay hard errors.

use std::sync::LazyLock;

use ptkit_value::Val;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{error::Result, format::format_template, whitespace::WhitespaceMode};

/// Sentinel returned in place of formatted text when formatting can't proceed
pub const FORMAT_ERROR: &str = "FORMAT_ERROR";

static BEGIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\t ]*/\*!?<<<([A-Za-z0-9_]+)(?:;((?:WS-)?(?:KEEP|OUTDENT|TRIM))?)?$")
		.expect("begin line pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
	#[error("snippet: begin marker line not found")]
	NoBeginMarker,
	#[error("snippet: end marker line not found for tag {0}")]
	NoEndMarker(String),
	#[error("snippet: configuration error: unknown whitespace mode {0:?}")]
	UnknownMode(String),
}

impl SnippetError {
	/// Inline form of this failure, as returned by [`format_snippet`]
	pub fn to_sentinel(&self) -> String {
		format!("{FORMAT_ERROR}:{self}")
	}
}

/// A located snippet, before substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetBlock<'s> {
	pub tag: &'s str,
	pub mode: WhitespaceMode,
	/// Index of the begin marker line
	pub begin_line: usize,
	/// Index of the end marker line
	pub end_line: usize,
	/// Lines strictly between the markers, joined with `\n`
	pub body: String,
}

/// Splits on `\r?\n`
fn split_lines(source: &str) -> Vec<&str> {
	let mut lines: Vec<&str> = source.split('\n').collect();
	let last = lines.len() - 1;
	for line in &mut lines[..last] {
		if let Some(stripped) = line.strip_suffix('\r') {
			*line = stripped;
		}
	}
	lines
}

fn is_end_line(line: &str, tag: &str) -> bool {
	line.trim_start_matches(|c| c == '\t' || c == ' ')
		.strip_prefix(tag)
		.is_some_and(|rest| rest.starts_with("*/"))
}

/// Locates the snippet in `source`.
///
/// Only the first begin line counts, and it must not be the very first line of the source.
pub fn parse_snippet(source: &str) -> Result<SnippetBlock<'_>, SnippetError> {
	let lines = split_lines(source);

	let (begin_line, captures) = lines
		.iter()
		.copied()
		.enumerate()
		.find_map(|(i, line)| BEGIN_LINE.captures(line).map(|c| (i, c)))
		.ok_or(SnippetError::NoBeginMarker)?;
	if begin_line == 0 {
		debug!("snippet begin marker is on the first line");
		return Err(SnippetError::NoBeginMarker);
	}
	let tag = captures.get(1).map_or("", |m| m.as_str());

	let end_line = lines[begin_line + 1..]
		.iter()
		.position(|line| is_end_line(line, tag))
		.map(|offset| begin_line + 1 + offset)
		.ok_or_else(|| SnippetError::NoEndMarker(tag.to_owned()))?;

	let mode = match captures.get(2).map(|m| m.as_str()) {
		Some(mode) => mode.parse()?,
		None => WhitespaceMode::default(),
	};
	debug!(tag, %mode, begin_line, end_line, "located snippet");

	Ok(SnippetBlock {
		tag,
		mode,
		begin_line,
		end_line,
		body: lines[begin_line + 1..end_line].join("\n"),
	})
}

/// Extracts the snippet from `source`, substitutes `values` into it and applies its
/// whitespace mode.
pub fn format_snippet(source: &str, values: &[Val]) -> Result<String> {
	let block = match parse_snippet(source) {
		Ok(block) => block,
		Err(e) => {
			debug!(error = %e, "snippet extraction failed");
			return Ok(e.to_sentinel());
		}
	};
	let content = format_template(&block.body, values)?;
	Ok(block.mode.apply(&content))
}
