use std::{fmt, str::FromStr};

use crate::snippet::SnippetError;

/// Post-processing applied to a snippet body after substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
	/// Body is returned as written
	Keep,
	/// Common leading indentation is removed, relative indentation survives
	#[default]
	Outdent,
	/// Outer blank lines are dropped and every line is trimmed
	Trim,
}

impl WhitespaceMode {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Keep => "KEEP",
			Self::Outdent => "OUTDENT",
			Self::Trim => "TRIM",
		}
	}

	pub fn apply(self, body: &str) -> String {
		match self {
			Self::Keep => body.to_owned(),
			Self::Outdent => outdent(body),
			Self::Trim => trim(body),
		}
	}
}

impl fmt::Display for WhitespaceMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Accepts both `TRIM` and the prefixed `WS-TRIM` spelling
impl FromStr for WhitespaceMode {
	type Err = SnippetError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.strip_prefix("WS-").unwrap_or(s) {
			"KEEP" => Self::Keep,
			"OUTDENT" => Self::Outdent,
			"TRIM" => Self::Trim,
			_ => return Err(SnippetError::UnknownMode(s.to_owned())),
		})
	}
}

fn indent_width(line: &str) -> usize {
	line.chars().take_while(|c| c.is_whitespace()).count()
}

fn skip_chars(line: &str, n: usize) -> &str {
	line.char_indices().nth(n).map_or("", |(i, _)| &line[i..])
}

fn outdent(body: &str) -> String {
	// Empty lines have zero indentation and pin the width to zero
	let width = body.split('\n').map(indent_width).min().unwrap_or(0);
	body.split('\n')
		.map(|line| skip_chars(line, width))
		.collect::<Vec<_>>()
		.join("\n")
}

const NEWLINES: &[char] = &['\r', '\n'];

fn trim(body: &str) -> String {
	let body = body.trim_start_matches(' ').trim_start_matches(NEWLINES);
	let body = body.trim_end_matches(' ').trim_end_matches(NEWLINES);
	body.split('\n')
		.map(str::trim)
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_mode() {
		assert_eq!("KEEP".parse::<WhitespaceMode>(), Ok(WhitespaceMode::Keep));
		assert_eq!("WS-OUTDENT".parse::<WhitespaceMode>(), Ok(WhitespaceMode::Outdent));
		assert_eq!("WS-TRIM".parse::<WhitespaceMode>(), Ok(WhitespaceMode::Trim));
		assert_eq!(
			"trim".parse::<WhitespaceMode>(),
			Err(SnippetError::UnknownMode("trim".to_owned()))
		);
	}

	#[test]
	fn outdent_uses_global_minimum() {
		let body = "      <ul>\n        <li>%s</li>\n    </ul>";
		assert_eq!(
			WhitespaceMode::Outdent.apply(body),
			"  <ul>\n    <li>%s</li>\n</ul>"
		);
	}

	#[test]
	fn outdent_with_empty_line_is_noop() {
		let body = "    a\n\n    b";
		assert_eq!(WhitespaceMode::Outdent.apply(body), body);
	}

	#[test]
	fn outdent_keeps_whitespace_only_lines_aligned() {
		assert_eq!(WhitespaceMode::Outdent.apply("\t\tx\n\t\t\n\t\t\ty"), "x\n\n\ty");
	}

	#[test]
	fn trim_strips_outer_blank_lines_only() {
		let body = "\n\n    first\n\n  second  \n\n";
		assert_eq!(WhitespaceMode::Trim.apply(body), "first\n\nsecond");
	}

	#[test]
	fn trim_collapses_one_leading_run() {
		// spaces, then newlines: indentation on a later blank line survives the collapse
		assert_eq!(WhitespaceMode::Trim.apply("  \n  \nx"), "\nx");
	}

	#[test]
	fn keep_is_identity() {
		let body = "  a\n\n b ";
		assert_eq!(WhitespaceMode::Keep.apply(body), body);
	}
}
