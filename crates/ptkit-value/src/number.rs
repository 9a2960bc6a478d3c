//! Number printing and lenient number parsing, following the host scripting rules
//! (`String(n)`, `parseInt`, `parseFloat`, `Number(str)`).

use std::iter;

/// Whitespace skipped by every numeric parser
pub fn is_js_whitespace(c: char) -> bool {
	matches!(
		c,
		'\u{9}'
			| '\u{a}' | '\u{b}'
			| '\u{c}' | '\u{d}'
			| ' ' | '\u{a0}'
			| '\u{1680}'
			| '\u{2000}'..='\u{200a}'
			| '\u{2028}'
			| '\u{2029}'
			| '\u{202f}'
			| '\u{205f}'
			| '\u{3000}'
			| '\u{feff}'
	)
}

/// Shortest string that round-trips to `n`.
///
/// Decimal exponents in `-7..21` are printed in positional notation, others as `1.5e+21`.
pub fn fmt_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_owned();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if n == 0.0 {
		// -0 prints as 0
		return "0".to_owned();
	}

	let mut out = String::new();
	if n < 0.0 {
		out.push('-');
	}
	// LowerExp without precision yields the shortest round-trip digits, e.g. `1.2345e3`
	let sci = format!("{:e}", n.abs());
	let (mantissa, exponent) = sci.split_once('e').expect("exponent is always printed");
	let exponent: i32 = exponent.parse().expect("exponent is an integer");
	let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

	let k = digits.len() as i32;
	// Position of the decimal point relative to the first digit
	let point = exponent + 1;
	if k <= point && point <= 21 {
		out.push_str(&digits);
		out.extend(iter::repeat_n('0', (point - k) as usize));
	} else if 0 < point && point <= 21 {
		out.push_str(&digits[..point as usize]);
		out.push('.');
		out.push_str(&digits[point as usize..]);
	} else if -6 < point && point <= 0 {
		out.push_str("0.");
		out.extend(iter::repeat_n('0', (-point) as usize));
		out.push_str(&digits);
	} else {
		out.push_str(&digits[..1]);
		if k > 1 {
			out.push('.');
			out.push_str(&digits[1..]);
		}
		out.push('e');
		out.push(if exponent >= 0 { '+' } else { '-' });
		out.push_str(&exponent.abs().to_string());
	}
	out
}

fn split_sign(str: &str) -> (bool, &str) {
	if let Some(rest) = str.strip_prefix('-') {
		(true, rest)
	} else {
		(false, str.strip_prefix('+').unwrap_or(str))
	}
}

/// `parseInt(str, radix)`.
///
/// `radix` 0 means "detect": base 16 with a `0x` prefix, base 10 otherwise.
/// Radixes outside `2..=36` and inputs without a leading digit yield `NaN`.
pub fn parse_int(str: &str, radix: u32) -> f64 {
	let str = str.trim_start_matches(is_js_whitespace);
	let (negative, mut str) = split_sign(str);

	let mut radix = radix;
	let strip_hex_prefix = match radix {
		0 => {
			radix = 10;
			true
		}
		16 => true,
		2..=36 => false,
		_ => return f64::NAN,
	};
	if strip_hex_prefix {
		if let Some(rest) = str.strip_prefix("0x").or_else(|| str.strip_prefix("0X")) {
			str = rest;
			radix = 16;
		}
	}

	let len = str
		.char_indices()
		.find(|(_, c)| !c.is_digit(radix))
		.map_or(str.len(), |(i, _)| i);
	let digits = &str[..len];
	if digits.is_empty() {
		return f64::NAN;
	}

	let value = if radix == 10 {
		// Correctly rounded even past 2^53
		digits.parse().unwrap_or(f64::NAN)
	} else {
		digits
			.chars()
			.filter_map(|c| c.to_digit(radix))
			.fold(0.0_f64, |acc, d| acc.mul_add(f64::from(radix), f64::from(d)))
	};
	if negative {
		-value
	} else {
		value
	}
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `parseFloat(str)`: longest decimal literal prefix, `NaN` when there is none.
pub fn parse_float(str: &str) -> f64 {
	let str = str.trim_start_matches(is_js_whitespace);
	let bytes = str.as_bytes();

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	if str[end..].starts_with("Infinity") {
		return if str.starts_with('-') {
			f64::NEG_INFINITY
		} else {
			f64::INFINITY
		};
	}

	let int_digits = count_digits(&bytes[end..]);
	end += int_digits;
	let mut frac_digits = 0;
	if bytes.get(end) == Some(&b'.') {
		frac_digits = count_digits(&bytes[end + 1..]);
		if int_digits > 0 || frac_digits > 0 {
			end += 1 + frac_digits;
		}
	}
	if int_digits == 0 && frac_digits == 0 {
		return f64::NAN;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exp_end = end + 1;
		if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
			exp_end += 1;
		}
		let exp_digits = count_digits(&bytes[exp_end..]);
		if exp_digits > 0 {
			end = exp_end + exp_digits;
		}
	}

	str[..end].parse().unwrap_or(f64::NAN)
}

/// `Number(str)`: the whole trimmed string must be a numeric literal.
pub fn string_to_number(str: &str) -> f64 {
	let str = str.trim_matches(is_js_whitespace);
	if str.is_empty() {
		return 0.0;
	}

	for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
		let stripped = str
			.strip_prefix(prefix)
			.or_else(|| str.strip_prefix(&prefix.to_ascii_uppercase()));
		if let Some(digits) = stripped {
			if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
				return f64::NAN;
			}
			return digits
				.chars()
				.filter_map(|c| c.to_digit(radix))
				.fold(0.0_f64, |acc, d| acc.mul_add(f64::from(radix), f64::from(d)));
		}
	}

	match str {
		"Infinity" | "+Infinity" => return f64::INFINITY,
		"-Infinity" => return f64::NEG_INFINITY,
		_ => {}
	}
	// Rust accepts `inf`, `nan` and friends, the host does not
	if !str
		.bytes()
		.all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
	{
		return f64::NAN;
	}
	str.parse().unwrap_or(f64::NAN)
}
