use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bootstrap-layout", about = "Inspect and verify the process event record layout")]
pub struct Cli {
	#[arg(short, long, global = true, help = "Log at debug level when RUST_LOG is not set")]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print size and offset of every record field.
	Describe {
		#[arg(long, value_enum, default_value = "text")]
		format: ReportFormat,
	},
	/// Check the compiled record against an expected layout.
	Verify {
		#[arg(long, help = "TOML layout file (e.g. produced by `describe --format toml`). Defaults to the built-in contract")]
		expected: Option<PathBuf>,
	},
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
	Text,
	Toml,
}
