use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::Val;

impl From<Value> for Val {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => Self::Num(n.as_f64().unwrap_or(f64::NAN)),
			Value::String(s) => Self::Str(s),
			Value::Array(items) => Self::Arr(items.into_iter().map(Self::from).collect()),
			Value::Object(fields) => {
				Self::Obj(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
			}
		}
	}
}

/// `undefined` serializes as `null`, snippets as their source text
impl Serialize for Val {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Undefined | Self::Null => serializer.serialize_unit(),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::Num(n) => serializer.serialize_f64(*n),
			Self::Str(s) => serializer.serialize_str(s),
			Self::Arr(items) => serializer.collect_seq(items),
			Self::Obj(fields) => serializer.collect_map(fields),
			Self::Snippet(s) => serializer.serialize_str(s.source()),
		}
	}
}

impl<'de> Deserialize<'de> for Val {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Value::deserialize(deserializer).map(Self::from)
	}
}
