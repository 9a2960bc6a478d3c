use ptkit_format::{format, pt_format, FormatError, Snippet, Val, FORMAT_ERROR};

#[test]
fn entry_point() {
	assert_eq!(format(&[]).unwrap(), "");
	assert_eq!(pt_format!("string without format").unwrap(), "string without format");
	assert_eq!(pt_format!("%f%%", 12.3).unwrap(), "12.3%");
	assert_eq!(
		pt_format!(r#"<div id="%s"></div>"#, "hello").unwrap(),
		r#"<div id="hello"></div>"#
	);
	assert_eq!(pt_format!("%s%s", "hello", "world").unwrap(), "helloworld");
	assert_eq!(pt_format!("%%test").unwrap(), "%test");
}

#[test]
fn arrays_substitute_as_one_value() {
	let words = Val::Arr(vec!["hello".into(), "world".into()]);
	assert_eq!(
		format(&["%s".into(), words.clone()]).unwrap(),
		"hello,world"
	);
	assert_eq!(
		format(&["%s%s".into(), words]),
		Err(FormatError::NotEnoughValues)
	);
}

#[test]
fn hard_failures() {
	assert_eq!(
		pt_format!("%k"),
		Err(FormatError::UnrecognizedConversionType('k'))
	);
	assert_eq!(pt_format!("%s"), Err(FormatError::NotEnoughValues));
	assert_eq!(
		pt_format!("%%%t"),
		Err(FormatError::UnrecognizedConversionType('t'))
	);
	assert_eq!(pt_format!("100%"), Err(FormatError::TruncatedFormatCode));
	// the first failing marker is reported
	assert_eq!(
		pt_format!("%s %k", "x"),
		Err(FormatError::UnrecognizedConversionType('k'))
	);
	assert_eq!(
		pt_format!("%k %s"),
		Err(FormatError::UnrecognizedConversionType('k'))
	);
}

#[test]
fn unsupported_first_argument() {
	assert_eq!(pt_format!(12, "a").unwrap(), FORMAT_ERROR);
	assert_eq!(format(&[Val::Null]).unwrap(), FORMAT_ERROR);
}

#[test]
fn coercions() {
	assert_eq!(
		pt_format!("%d|%f|%s", "0x1F", "1e3 units", true).unwrap(),
		"0|1000|true"
	);
	assert_eq!(pt_format!("%d", 1e21).unwrap(), "1");
	assert_eq!(pt_format!("%f", 0.1 + 0.2).unwrap(), "0.30000000000000004");
	assert_eq!(pt_format!("%s", Snippet::new("src")).unwrap(), "src");
}

#[test]
fn excess_values_are_ignored() {
	assert_eq!(pt_format!("%d apples", 3, 4, 5).unwrap(), "3 apples");
}
