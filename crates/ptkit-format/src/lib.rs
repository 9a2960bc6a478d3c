//! String formatting for ptkit values.
//!
//! [`format`] is the single entry point: a string first argument is a printf-style
//! template, a snippet first argument is source text holding a comment-block snippet
//! (see [`snippet`]). Either way the remaining arguments are substituted left to right.

mod error;
mod format;
mod number;
pub mod snippet;
mod whitespace;

pub use error::{FormatError, Result};
pub use format::{
	format_code, format_template, parse_codes, parse_conversion_type, Codes, ConvType, Element,
};
pub use number::{format_number, NumberFormat, MAX_FIXED};
pub use ptkit_value::{Snippet, Val};
pub use snippet::{format_snippet, parse_snippet, SnippetBlock, SnippetError, FORMAT_ERROR};
pub use whitespace::WhitespaceMode;

use tracing::debug;

/// Formats `args[1..]` according to `args[0]`.
///
/// Unsupported first arguments produce the bare [`FORMAT_ERROR`] sentinel rather than an
/// `Err`.
pub fn format(args: &[Val]) -> Result<String> {
	let Some((first, values)) = args.split_first() else {
		return Ok(String::new());
	};
	match first {
		Val::Str(template) => format_template(template, values),
		Val::Snippet(snippet) => format_snippet(snippet.source(), values),
		other => {
			debug!(kind = %other.value_type(), "cannot format with this value");
			Ok(FORMAT_ERROR.to_owned())
		}
	}
}

/// Builds the argument list for [`format`] from anything convertible to [`Val`]
#[macro_export]
macro_rules! pt_format {
	($($arg:expr),* $(,)?) => {
		$crate::format(&[$($crate::Val::from($arg)),*])
	};
}
