use ptkit_value::{
	number::{parse_float, parse_int},
	Val,
};

pub fn to_bool(v: &Val) -> bool {
	v.truthy()
}

/// `parseInt` of the string form, `None` and `Some(0)` mean base 10
pub fn to_int(v: &Val, radix: Option<u32>) -> f64 {
	let radix = radix.filter(|&r| r != 0).unwrap_or(10);
	parse_int(&v.to_string(), radix)
}

pub fn to_float(v: &Val) -> f64 {
	parse_float(&v.to_string())
}

pub fn to_str(v: &Val) -> String {
	v.to_string()
}

/// Wraps a single value into an array, `undefined` and `null` become empty
pub fn to_array(v: Val) -> Vec<Val> {
	match v {
		Val::Undefined | Val::Null => vec![],
		Val::Arr(items) => items,
		v => vec![v],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers() {
		assert_eq!(to_int(&Val::from("ff"), Some(16)), 255.0);
		assert_eq!(to_int(&Val::from("0x1A"), Some(16)), 26.0);
		assert_eq!(to_int(&Val::from("017"), Some(0)), 17.0);
		assert_eq!(to_int(&Val::from("12.9em"), None), 12.0);
		assert!(to_int(&Val::from("z"), None).is_nan());
		assert_eq!(to_float(&Val::from(".5e1x")), 5.0);
	}

	#[test]
	fn arrays() {
		assert_eq!(to_array(Val::Null), vec![]);
		assert_eq!(to_array(Val::Undefined), vec![]);
		assert_eq!(to_array(Val::from(1)), vec![Val::from(1)]);
		assert_eq!(
			to_array(Val::Arr(vec![Val::from("a")])),
			vec![Val::from("a")]
		);
	}

	#[test]
	fn strings() {
		assert_eq!(to_str(&Val::Arr(vec![Val::from(1), Val::Null, Val::from(2)])), "1,,2");
		assert!(!to_bool(&Val::from("")));
		assert!(to_bool(&Val::from("0")));
	}
}
