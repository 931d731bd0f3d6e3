// region:    --- Modules
mod cli;
mod error;
mod layout_file;
mod report;
// endregion: --- Modules

use std::process::ExitCode;

use crate::{
	cli::args::{Cli, Command},
	layout_file::LayoutFile,
};

pub use self::error::{Error, Result};
use bootstrap_common::{layout, Event};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let args = Cli::parse();

	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
	tracing_subscriber::fmt()
		.with_target(false)
		.with_writer(std::io::stderr)
		.with_env_filter(env_filter)
		.init();

	match run(args.command) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Command) -> Result<()> {
	// Nothing runs with a record definition that drifted from the contract.
	layout::verify()?;
	debug!("Event layout matches the built-in contract ({} bytes)", std::mem::size_of::<Event>());

	match command {
		Command::Describe { format } => {
			let record = layout::record_layout();
			print!("{}", report::render(&record, format)?);
		}

		Command::Verify { expected } => match expected {
			Some(path) => {
				debug!("Verifying against '{}'", path.display());
				LayoutFile::from_file(&path)?.verify()?;
				info!("Event layout matches '{}'", path.display());
			}
			None => info!("Event layout matches the built-in contract"),
		},
	}

	Ok(())
}

// region:    --- Tests


// endregion: --- Tests
