use std::{borrow::Cow, fmt};

use ptkit_value::Val;

/// Attribute compared when none is given
pub const DEFAULT_ATTRIBUTE: &str = "id";

/// Position of an item inside an array or an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKey {
	Index(usize),
	Name(String),
}

impl fmt::Display for ListKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(i) => write!(f, "{i}"),
			Self::Name(name) => f.write_str(name),
		}
	}
}

fn entries(source: &Val) -> Box<dyn Iterator<Item = (ListKey, &Val)> + '_> {
	match source {
		Val::Arr(items) => Box::new(
			items
				.iter()
				.enumerate()
				.map(|(i, item)| (ListKey::Index(i), item)),
		),
		Val::Obj(fields) => Box::new(
			fields
				.iter()
				.map(|(name, item)| (ListKey::Name(name.clone()), item)),
		),
		_ => Box::new(std::iter::empty()),
	}
}

/// `item[attribute]`, missing attributes read as `undefined`.
///
/// Strings and arrays also expose `length` and their indices, strings counting in
/// UTF-16 units.
fn attribute_of<'v>(item: &'v Val, attribute: &str) -> Cow<'v, Val> {
	let index = || attribute.parse::<usize>().ok();
	let found = match item {
		Val::Obj(fields) => fields.get(attribute).map(Cow::Borrowed),
		Val::Arr(items) if attribute == "length" => Some(Cow::Owned(Val::from(items.len() as f64))),
		Val::Arr(items) => index().and_then(|i| items.get(i)).map(Cow::Borrowed),
		Val::Str(s) if attribute == "length" => {
			Some(Cow::Owned(Val::from(s.encode_utf16().count() as f64)))
		}
		Val::Str(s) => index()
			.and_then(|i| s.encode_utf16().nth(i))
			.map(|unit| Cow::Owned(Val::Str(String::from_utf16_lossy(&[unit])))),
		_ => None,
	};
	found.unwrap_or(Cow::Owned(Val::Undefined))
}

fn find_last<'v>(
	source: &'v Val,
	value: &Val,
	attribute: Option<&str>,
) -> Option<(ListKey, &'v Val)> {
	let attribute = attribute.unwrap_or(DEFAULT_ATTRIBUTE);
	entries(source)
		.filter(|(_, item)| attribute_of(item, attribute).loose_eq(value))
		.last()
}

/// Last item of an array or object whose `attribute` (default `id`) loosely equals `value`
pub fn find_item_from_list<'v>(
	source: &'v Val,
	value: &Val,
	attribute: Option<&str>,
) -> Option<&'v Val> {
	find_last(source, value, attribute).map(|(_, item)| item)
}

/// Key of the item [`find_item_from_list`] would return
pub fn find_key_from_list(source: &Val, value: &Val, attribute: Option<&str>) -> Option<ListKey> {
	find_last(source, value, attribute).map(|(key, _)| key)
}
