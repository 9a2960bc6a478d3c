//! Configuration file support for ptfmt
//!
//! A `.ptfmt.json` file in the working directory or any of its parents provides defaults
//! for the `number` subcommand. Flags given on the command line override it.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ptkit_format::NumberFormat;
use serde::Deserialize;
use tracing::debug;

/// The name of the config file ptfmt looks for
pub const CONFIG_FILE_NAME: &str = ".ptfmt.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PtfmtConfig {
	/// Defaults for `ptfmt number`
	pub number: NumberFormat,
}

impl PtfmtConfig {
	/// Loads `explicit` when given, otherwise the nearest [`CONFIG_FILE_NAME`] above
	/// `start_dir`, otherwise the defaults
	pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load_from_file(path);
		}
		match find_config_file(start_dir) {
			Some(path) => Self::load_from_file(&path),
			None => Ok(Self::default()),
		}
	}

	pub fn load_from_file(path: &Path) -> Result<Self> {
		debug!(path = %path.display(), "loading config");
		let content = fs::read_to_string(path)
			.with_context(|| format!("failed to read config file: {}", path.display()))?;
		serde_json::from_str(&content)
			.with_context(|| format!("failed to parse config file: {}", path.display()))
	}
}

/// Search for a config file starting from `start_dir` and walking up to the filesystem root
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
	let start = start_dir
		.canonicalize()
		.unwrap_or_else(|_| start_dir.to_path_buf());
	start
		.ancestors()
		.map(|dir| dir.join(CONFIG_FILE_NAME))
		.find(|path| path.is_file())
}
