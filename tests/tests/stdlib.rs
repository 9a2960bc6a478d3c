use ptkit_stdlib::{
	deep_copy, error, find_item_from_list, find_key_from_list, is_int, keys, max, min, range,
	sort, sort_by, to_array, values, ListKey, StdError,
};
use ptkit_value::Val;

fn json(source: &str) -> Val {
	serde_json::from_str(source).unwrap()
}

#[test]
fn sort_records_by_field() {
	let Val::Arr(mut rows) = json(
		r#"[
			{"id": 1, "score": 7},
			{"id": 2, "score": 3},
			{"id": 3, "score": 7},
			{"id": 4, "score": 3}
		]"#,
	) else {
		unreachable!()
	};
	sort_by(&mut rows, |a, b| {
		let score = |v: &Val| match v {
			Val::Obj(fields) => fields.get("score").cloned().unwrap_or_default(),
			_ => Val::Undefined,
		};
		score(b).compare(&score(a)).unwrap_or(std::cmp::Ordering::Equal)
	});
	let ids: Vec<String> = rows
		.iter()
		.map(|row| match row {
			Val::Obj(fields) => fields["id"].to_string(),
			_ => String::new(),
		})
		.collect();
	assert_eq!(ids, ["1", "3", "2", "4"]);
}

#[test]
fn mixed_values() {
	let mut mixed = vec![Val::from("b"), Val::from(2), Val::from("a"), Val::from(1)];
	sort(&mut mixed);
	assert_eq!(mixed.len(), 4);

	let numbers = json("[4, 11, 2]");
	let Val::Arr(numbers) = numbers else {
		unreachable!()
	};
	assert_eq!(max(&numbers), Some(&Val::from(11)));
	assert_eq!(min(&numbers), Some(&Val::from(2)));
}

#[test]
fn lookup_in_parsed_records() {
	let users = json(r#"[{"id": "7", "name": "ann"}, {"id": 8, "name": "bob"}]"#);
	assert_eq!(
		find_item_from_list(&users, &Val::from(7), None),
		Some(&json(r#"{"id": "7", "name": "ann"}"#))
	);
	assert_eq!(
		find_key_from_list(&users, &Val::from("bob"), Some("name")),
		Some(ListKey::Index(1))
	);

	let by_name = json(r#"{"ann": {"id": 7}, "bob": {"id": 8}}"#);
	assert_eq!(
		find_key_from_list(&by_name, &Val::from(8), None)
			.unwrap()
			.to_string(),
		"bob"
	);
}

#[test]
fn merge_settings() {
	let defaults = json(r#"{"theme": {"color": "red", "size": 12}, "tags": ["a"]}"#);
	let overrides = json(r#"{"theme": {"size": 14}, "tags": ["b", "c"]}"#);
	let merged = deep_copy(&overrides, Some(deep_copy(&defaults, None)));
	assert_eq!(
		merged,
		json(r#"{"theme": {"color": "red", "size": 14}, "tags": ["b", "c"]}"#)
	);
	assert_eq!(keys(&merged), ["theme", "tags"]);
	assert_eq!(values(&json("[1, 2]")), [Val::from(1), Val::from(2)]);
}

#[test]
fn helpers() {
	assert!(is_int(&json("10")));
	assert!(!is_int(&json("10.5")));
	assert_eq!(to_array(json("null")), Vec::<Val>::new());
	assert_eq!(range(3.0).unwrap(), [0.0, 1.0, 2.0]);
}

#[test]
fn raise_formatted_errors() {
	let err = error::<()>(&["bad row %d: %s".into(), Val::from(3), "empty".into()]).unwrap_err();
	assert_eq!(err, StdError::Raised("bad row 3: empty".to_owned()));
	assert_eq!(err.to_string(), "bad row 3: empty");
}
