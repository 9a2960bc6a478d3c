use ptkit_value::{number::parse_int, Val};

pub const fn is_boolean(v: &Val) -> bool {
	matches!(v, Val::Bool(_))
}
pub const fn is_number(v: &Val) -> bool {
	matches!(v, Val::Num(_))
}
pub const fn is_string(v: &Val) -> bool {
	matches!(v, Val::Str(_))
}
pub const fn is_array(v: &Val) -> bool {
	matches!(v, Val::Arr(_))
}
/// Arrays are objects too, `null` is not
pub const fn is_object(v: &Val) -> bool {
	matches!(v, Val::Obj(_) | Val::Arr(_))
}
pub const fn is_function(v: &Val) -> bool {
	matches!(v, Val::Snippet(_))
}

/// Whether the integer prefix of `v` is loosely equal to `v` itself
pub fn is_int(v: &Val) -> bool {
	Val::Num(parse_int(&v.to_string(), 10)).loose_eq(v)
}
