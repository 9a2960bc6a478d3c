//! Dynamic values passed through ptkit formatting and utility functions.
//!
//! [`Val`] mirrors the value kinds of a dynamically typed host, and the conversions in
//! this crate follow the host rules, so `%d` on `"12px"` gives `12`, an array stringifies
//! as `1,2,3`, and `"2" == 2` holds under [`Val::loose_eq`].

use std::{borrow::Cow, cmp::Ordering, fmt};

use indexmap::IndexMap;

mod json;
pub mod number;

use number::{fmt_number, string_to_number};

/// Object fields, in insertion order
pub type ObjValue = IndexMap<String, Val>;

/// Source text carrying comment-block snippets.
///
/// This is the "callable" value kind: formatting a snippet extracts a marked block
/// from its source instead of treating the text as a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snippet(String);

impl Snippet {
	pub fn new(source: impl Into<String>) -> Self {
		Self(source.into())
	}
	pub fn source(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValType {
	Undefined,
	Null,
	Bool,
	Num,
	Str,
	Arr,
	Obj,
	Snippet,
}

impl ValType {
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Undefined => "undefined",
			Self::Null => "null",
			Self::Bool => "boolean",
			Self::Num => "number",
			Self::Str => "string",
			Self::Arr => "array",
			Self::Obj => "object",
			Self::Snippet => "function",
		}
	}
}

impl fmt::Display for ValType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Val {
	#[default]
	Undefined,
	Null,
	Bool(bool),
	Num(f64),
	Str(String),
	Arr(Vec<Val>),
	Obj(ObjValue),
	Snippet(Snippet),
}

impl Val {
	pub const fn value_type(&self) -> ValType {
		match self {
			Self::Undefined => ValType::Undefined,
			Self::Null => ValType::Null,
			Self::Bool(_) => ValType::Bool,
			Self::Num(_) => ValType::Num,
			Self::Str(_) => ValType::Str,
			Self::Arr(_) => ValType::Arr,
			Self::Obj(_) => ValType::Obj,
			Self::Snippet(_) => ValType::Snippet,
		}
	}

	pub fn snippet(source: impl Into<String>) -> Self {
		Self::Snippet(Snippet::new(source))
	}

	/// Boolean coercion: `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy
	pub fn truthy(&self) -> bool {
		match self {
			Self::Undefined | Self::Null => false,
			Self::Bool(b) => *b,
			Self::Num(n) => *n != 0.0 && !n.is_nan(),
			Self::Str(s) => !s.is_empty(),
			Self::Arr(_) | Self::Obj(_) | Self::Snippet(_) => true,
		}
	}

	/// Numeric coercion, compound values go through their string form
	pub fn to_number(&self) -> f64 {
		match self {
			Self::Undefined => f64::NAN,
			Self::Null => 0.0,
			Self::Bool(b) => f64::from(u8::from(*b)),
			Self::Num(n) => *n,
			Self::Str(s) => string_to_number(s),
			Self::Arr(_) | Self::Obj(_) | Self::Snippet(_) => string_to_number(&self.to_string()),
		}
	}

	/// String form used when a compound value takes part in a comparison
	fn primitive_str(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Str(s) => Some(Cow::Borrowed(s)),
			Self::Arr(_) | Self::Obj(_) | Self::Snippet(_) => Some(Cow::Owned(self.to_string())),
			_ => None,
		}
	}

	/// Loose (`==`) equality.
	///
	/// Compound values of the same kind compare structurally.
	pub fn loose_eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Undefined | Self::Null, Self::Undefined | Self::Null) => true,
			(Self::Undefined | Self::Null, _) | (_, Self::Undefined | Self::Null) => false,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Num(a), Self::Num(b)) => a == b,
			(Self::Str(a), Self::Str(b)) => a == b,
			(Self::Arr(a), Self::Arr(b)) => a == b,
			(Self::Obj(a), Self::Obj(b)) => a == b,
			(Self::Snippet(a), Self::Snippet(b)) => a == b,
			(Self::Bool(_), _) => Self::Num(self.to_number()).loose_eq(other),
			(_, Self::Bool(_)) => self.loose_eq(&Self::Num(other.to_number())),
			(Self::Num(a), _) => *a == other.to_number(),
			(_, Self::Num(b)) => self.to_number() == *b,
			(Self::Str(a), _) => other.primitive_str().is_some_and(|b| *a == b),
			(_, Self::Str(b)) => self.primitive_str().is_some_and(|a| a == *b),
			_ => false,
		}
	}

	/// Relational comparison behind `<` and `>`.
	///
	/// Two string-like operands compare by UTF-16 code units, anything else compares
	/// numerically. `None` means the operands are unordered (one of them is `NaN`).
	pub fn compare(&self, other: &Self) -> Option<Ordering> {
		match (self.primitive_str(), other.primitive_str()) {
			(Some(a), Some(b)) => Some(a.encode_utf16().cmp(b.encode_utf16())),
			_ => self.to_number().partial_cmp(&other.to_number()),
		}
	}
}

/// Host string conversion
impl fmt::Display for Val {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undefined => f.write_str("undefined"),
			Self::Null => f.write_str("null"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Num(n) => f.write_str(&fmt_number(*n)),
			Self::Str(s) => f.write_str(s),
			Self::Arr(items) => {
				for (i, item) in items.iter().enumerate() {
					if i != 0 {
						f.write_str(",")?;
					}
					if !matches!(item, Self::Undefined | Self::Null) {
						write!(f, "{item}")?;
					}
				}
				Ok(())
			}
			Self::Obj(_) => f.write_str("[object Object]"),
			Self::Snippet(s) => f.write_str(s.source()),
		}
	}
}

impl From<bool> for Val {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<f64> for Val {
	fn from(value: f64) -> Self {
		Self::Num(value)
	}
}
impl From<i32> for Val {
	fn from(value: i32) -> Self {
		Self::Num(value.into())
	}
}
impl From<u32> for Val {
	fn from(value: u32) -> Self {
		Self::Num(value.into())
	}
}
impl From<&str> for Val {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}
impl From<String> for Val {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}
impl From<Vec<Val>> for Val {
	fn from(value: Vec<Val>) -> Self {
		Self::Arr(value)
	}
}
impl From<ObjValue> for Val {
	fn from(value: ObjValue) -> Self {
		Self::Obj(value)
	}
}
impl From<Snippet> for Val {
	fn from(value: Snippet) -> Self {
		Self::Snippet(value)
	}
}
impl<T: Into<Val>> From<Option<T>> for Val {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Undefined, Into::into)
	}
}
