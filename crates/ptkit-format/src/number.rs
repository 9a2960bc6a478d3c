//! Human-oriented number formatting: fixed decimals, percentages, thousands grouping.

use ptkit_value::{
	number::{fmt_number, parse_float},
	Val,
};
use serde::Deserialize;

use crate::error::{FormatError, Result};

/// Largest accepted `fixed`, same limit as the host `toFixed`
pub const MAX_FIXED: u32 = 100;

/// Extra digits printed to tell an exact tie from a value merely close to one
const TIE_PROBE_DIGITS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormat {
	/// Digits after the point. When unset, 0 to 2 digits are kept so that at least three
	/// significant digits from the units place up are shown.
	pub fixed: Option<u32>,
	/// Multiply by 100 and append `%`
	pub percentage: bool,
	/// Insert `,` between thousands
	pub grouping: bool,
	/// Returned as-is when the value is not a number
	pub nan_result: String,
}

impl Default for NumberFormat {
	fn default() -> Self {
		Self {
			fixed: None,
			percentage: false,
			grouping: true,
			nan_result: "-".to_owned(),
		}
	}
}

impl NumberFormat {
	pub fn fixed(mut self, fixed: u32) -> Self {
		self.fixed = Some(fixed);
		self
	}
	pub fn percentage(mut self) -> Self {
		self.percentage = true;
		self
	}
	pub fn without_grouping(mut self) -> Self {
		self.grouping = false;
		self
	}
	pub fn nan_result(mut self, nan_result: impl Into<String>) -> Self {
		self.nan_result = nan_result.into();
		self
	}
}

const fn auto_fixed(number: f64) -> u32 {
	if number >= 100.0 {
		0
	} else if number >= 10.0 {
		1
	} else {
		2
	}
}

/// Adds one unit in the last place of a non-negative decimal string
fn increment_last_digit(number: &str) -> String {
	let mut carry = true;
	let mut out: Vec<char> = number
		.chars()
		.rev()
		.map(|c| match c {
			'9' if carry => '0',
			'0'..='8' if carry => {
				carry = false;
				char::from(c as u8 + 1)
			}
			c => c,
		})
		.collect();
	if carry {
		out.push('1');
	}
	out.into_iter().rev().collect()
}

/// `toFixed` for non-negative numbers.
///
/// Rust rounds exact ties to even, `toFixed` picks the larger candidate.
fn to_fixed(number: f64, fixed: usize) -> String {
	if !number.is_finite() || number >= 1e21 {
		return fmt_number(number);
	}
	let probe = format!("{number:.prec$}", prec = fixed + TIE_PROBE_DIGITS);
	let (head, tail) = probe.split_at(probe.len() - TIE_PROBE_DIGITS);
	if tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0') {
		increment_last_digit(head.strip_suffix('.').unwrap_or(head))
	} else {
		format!("{number:.fixed$}")
	}
}

fn group_thousands(number: &str) -> String {
	let (int, frac) = number.split_at(number.find('.').unwrap_or(number.len()));
	if !int.bytes().all(|b| b.is_ascii_digit()) {
		return number.to_owned();
	}
	let mut out = String::with_capacity(number.len() + int.len() / 3);
	for (i, c) in int.chars().enumerate() {
		if i != 0 && (int.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out.push_str(frac);
	out
}

/// Formats `value` for display.
///
/// The value goes through `parseFloat` of its string form, so `"12.5%"` reads as `12.5`.
pub fn format_number(value: &Val, options: &NumberFormat) -> Result<String> {
	let mut number = parse_float(&value.to_string());
	if number.is_nan() {
		return Ok(options.nan_result.clone());
	}
	let sign = if number < 0.0 {
		number = -number;
		"-"
	} else {
		""
	};
	if options.percentage {
		number *= 100.0;
	}

	let fixed = match options.fixed {
		Some(fixed) if fixed > MAX_FIXED => return Err(FormatError::FixedOutOfRange(fixed)),
		Some(fixed) => fixed,
		None => auto_fixed(number),
	};
	let mut digits = to_fixed(number, fixed as usize);
	if options.grouping {
		digits = group_thousands(&digits);
	}

	let suffix = if options.percentage { "%" } else { "" };
	Ok(format!("{sign}{digits}{suffix}"))
}
