use std::{
	fs,
	io::{self, Read, Write},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ptkit_format::{format_number, format_snippet, format_template, NumberFormat};
use ptkit_value::Val;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;

use config::PtfmtConfig;

#[derive(Parser)]
#[command(name = "ptfmt")]
#[command(about = "Format values with printf-style templates and comment-block snippets", long_about = None)]
#[command(version)]
struct Cli {
	/// Log level (trace, debug, info, warn, error)
	#[arg(long, global = true, env = "PTFMT_LOG", default_value = "warn")]
	log_level: String,

	/// Config file to use instead of the nearest `.ptfmt.json`
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Substitute values into a template
	Template {
		template: String,
		/// Values, parsed as JSON when possible and taken as plain strings otherwise
		#[arg(allow_hyphen_values = true)]
		args: Vec<String>,
	},

	/// Extract a comment-block snippet from a file and substitute values into it
	Snippet {
		/// Source file, `-` for stdin
		file: PathBuf,
		/// Values, parsed as JSON when possible and taken as plain strings otherwise
		#[arg(allow_hyphen_values = true)]
		args: Vec<String>,
	},

	/// Format a number for display
	Number(NumberArgs),
}

#[derive(Args)]
struct NumberArgs {
	#[arg(allow_hyphen_values = true)]
	value: String,
	/// Digits after the decimal point
	#[arg(long)]
	fixed: Option<u32>,
	/// Multiply by 100 and append `%`
	#[arg(long)]
	percentage: bool,
	/// Don't separate thousands with `,`
	#[arg(long)]
	no_grouping: bool,
	/// Output for values that are not numbers
	#[arg(long)]
	nan_result: Option<String>,
}

impl NumberArgs {
	/// Flags given on the command line override `defaults`
	fn options(&self, defaults: NumberFormat) -> NumberFormat {
		let mut options = defaults;
		if self.fixed.is_some() {
			options.fixed = self.fixed;
		}
		if self.percentage {
			options.percentage = true;
		}
		if self.no_grouping {
			options.grouping = false;
		}
		if let Some(nan_result) = &self.nan_result {
			options.nan_result.clone_from(nan_result);
		}
		options
	}
}

/// Initialize tracing, writing to stderr so stdout only carries the output
fn init_logger(level: &str) {
	let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

/// JSON when it parses, the raw string otherwise
fn parse_value(arg: &str) -> Val {
	serde_json::from_str::<serde_json::Value>(arg).map_or_else(|_| Val::from(arg), Val::from)
}

fn parse_values(args: &[String]) -> Vec<Val> {
	args.iter().map(|arg| parse_value(arg)).collect()
}

fn read_source(file: &Path) -> Result<String> {
	if file.as_os_str() == "-" {
		let mut source = String::new();
		io::stdin()
			.read_to_string(&mut source)
			.context("failed to read snippet source from stdin")?;
		return Ok(source);
	}
	fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn run(cli: &Cli) -> Result<String> {
	match &cli.command {
		Commands::Template { template, args } => {
			Ok(format_template(template, &parse_values(args))?)
		}
		Commands::Snippet { file, args } => {
			let source = read_source(file)?;
			Ok(format_snippet(&source, &parse_values(args))?)
		}
		Commands::Number(args) => {
			let cwd = std::env::current_dir().context("failed to get current directory")?;
			let config = PtfmtConfig::load(cli.config.as_deref(), &cwd)?;
			let options = args.options(config.number);
			debug!(?options, "formatting number");
			Ok(format_number(&parse_value(&args.value), &options)?)
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logger(&cli.log_level);

	let output = run(&cli)?;
	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{output}")?;
	Ok(())
}
