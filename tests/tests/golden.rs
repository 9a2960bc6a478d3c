use std::{
	fs, io,
	path::{Path, PathBuf},
};

use ptkit_format::format_snippet;
use ptkit_value::Val;

const ARGS_PREFIX: &str = "// args: ";

/// Sources carry their arguments as a JSON array on the first line
fn run(file: &Path) -> String {
	let source = fs::read_to_string(file).unwrap();
	let args: Vec<Val> = source
		.lines()
		.next()
		.and_then(|line| line.strip_prefix(ARGS_PREFIX))
		.map(|json| serde_json::from_str(json).unwrap())
		.unwrap_or_default();
	match format_snippet(&source, &args) {
		Ok(out) => out,
		Err(e) => format!("error: {e}"),
	}
}

#[test]
fn test() -> io::Result<()> {
	let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	root.push("golden");

	for entry in fs::read_dir(&root)? {
		let entry = entry?;
		if entry.path().extension().is_none_or(|e| e != "js") {
			continue;
		}

		let result = run(&entry.path());

		let mut golden_path = entry.path();
		golden_path.set_extension("js.golden");

		if golden_path.exists() {
			let golden = fs::read_to_string(golden_path)?;
			assert_eq!(
				result,
				golden,
				"golden didn't match for {}",
				entry.path().display()
			);
		} else {
			fs::write(golden_path, &result)?;
		}
	}

	Ok(())
}
