use std::mem;

use ptkit_value::{ObjValue, Val};

/// Copies `value` into `target`.
///
/// Objects are merged field by field, recursing into fields present on both sides, so
/// fields only `target` has survive. Arrays get a fresh shallow copy. Anything else,
/// snippets included, replaces `target` outright.
pub fn deep_copy(value: &Val, target: Option<Val>) -> Val {
	match value {
		Val::Arr(items) => Val::Arr(items.clone()),
		Val::Obj(fields) => {
			let mut target = match target {
				Some(Val::Obj(target)) => target,
				_ => ObjValue::new(),
			};
			for (name, field) in fields {
				let slot = target.entry(name.clone()).or_default();
				*slot = deep_copy(field, Some(mem::take(slot)));
			}
			Val::Obj(target)
		}
		value => value.clone(),
	}
}

/// Own enumerable keys: field names, or indices for arrays and strings
pub fn keys(v: &Val) -> Vec<String> {
	match v {
		Val::Obj(fields) => fields.keys().cloned().collect(),
		Val::Arr(items) => (0..items.len()).map(|i| i.to_string()).collect(),
		Val::Str(s) => (0..s.chars().count()).map(|i| i.to_string()).collect(),
		_ => vec![],
	}
}

/// Values matching [`keys`], copied by assignment
pub fn values(v: &Val) -> Vec<Val> {
	match v {
		Val::Obj(fields) => fields.values().cloned().collect(),
		Val::Arr(items) => items.clone(),
		Val::Str(s) => s.chars().map(|c| Val::Str(c.to_string())).collect(),
		_ => vec![],
	}
}
