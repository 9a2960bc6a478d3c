//! printf-style substitution: `%d`, `%f`, `%s`, plus the `%%` and `%\` escapes

use ptkit_value::{
	number::{fmt_number, parse_float, parse_int},
	Val,
};
use tracing::trace;

use crate::error::{FormatError::*, Result};

static UNDEFINED: Val = Val::Undefined;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvType {
	Decimal,
	Float,
	String,
	Percent,
	Backslash,
}

impl ConvType {
	pub const fn consumes_value(self) -> bool {
		matches!(self, Self::Decimal | Self::Float | Self::String)
	}
}

pub fn parse_conversion_type(code: char) -> Result<ConvType> {
	Ok(match code {
		'd' => ConvType::Decimal,
		'f' => ConvType::Float,
		's' => ConvType::String,
		'%' => ConvType::Percent,
		'\\' => ConvType::Backslash,
		// A marker can't span lines
		'\n' | '\r' | '\u{2028}' | '\u{2029}' => return Err(TruncatedFormatCode),
		c => return Err(UnrecognizedConversionType(c)),
	})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'s> {
	String(&'s str),
	Code(ConvType),
}

/// Lazily splits a template into literal runs and codes, so errors surface in scan order
pub struct Codes<'s> {
	rest: &'s str,
}

impl<'s> Iterator for Codes<'s> {
	type Item = Result<Element<'s>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.rest.is_empty() {
			return None;
		}
		if let Some(code) = self.rest.strip_prefix('%') {
			let mut chars = code.chars();
			let Some(c) = chars.next() else {
				self.rest = "";
				return Some(Err(TruncatedFormatCode));
			};
			self.rest = chars.as_str();
			return Some(parse_conversion_type(c).map(Element::Code));
		}
		let end = self.rest.find('%').unwrap_or(self.rest.len());
		let (literal, rest) = self.rest.split_at(end);
		self.rest = rest;
		Some(Ok(Element::String(literal)))
	}
}

pub fn parse_codes(template: &str) -> Codes<'_> {
	Codes { rest: template }
}

pub fn format_code(out: &mut String, value: &Val, convtype: ConvType) {
	match convtype {
		ConvType::Decimal => out.push_str(&fmt_number(parse_int(&value.to_string(), 10))),
		ConvType::Float => out.push_str(&fmt_number(parse_float(&value.to_string()))),
		ConvType::String => out.push_str(&value.to_string()),
		ConvType::Percent => out.push('%'),
		ConvType::Backslash => out.push('\\'),
	}
}

/// Substitutes `values` into `template`, left to right, one value per `%d`/`%f`/`%s`.
///
/// Values left over once the template is exhausted are ignored.
pub fn format_template(template: &str, mut values: &[Val]) -> Result<String> {
	let mut out = String::with_capacity(template.len());

	for element in parse_codes(template) {
		match element? {
			Element::String(s) => out.push_str(s),
			Element::Code(c) => {
				// %% and %\ should not consume a value
				let value = if c.consumes_value() {
					let Some((value, rest)) = values.split_first() else {
						return Err(NotEnoughValues);
					};
					values = rest;
					value
				} else {
					&UNDEFINED
				};
				format_code(&mut out, value, c);
			}
		}
	}

	if !values.is_empty() {
		trace!(unused = values.len(), "excess format values ignored");
	}
	Ok(out)
}
