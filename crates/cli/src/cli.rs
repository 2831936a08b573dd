//! Command-line schema for the herald binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Replay boot popup scenarios")]
#[command(version)]
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Replay a scenario file and print what gets presented
	Run {
		/// Scenario TOML file
		#[arg(value_name = "PATH")]
		scenario: PathBuf,

		/// Boot popup configuration TOML file
		#[arg(long, short = 'c', value_name = "PATH")]
		config: Option<PathBuf>,

		/// Print presented descriptors as JSON lines
		#[arg(long)]
		json: bool,
	},
	/// List popup kinds and the modal each one opens
	Kinds,
	/// Validate a configuration file
	CheckConfig {
		/// Configuration TOML file
		#[arg(value_name = "PATH")]
		path: PathBuf,
	},
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_run_with_config() {
		let cli = Cli::parse_from(["herald", "-v", "run", "boot.toml", "--config", "popups.toml", "--json"]);
		assert!(cli.verbose);
		match cli.command {
			Command::Run { scenario, config, json } => {
				assert_eq!(scenario, PathBuf::from("boot.toml"));
				assert_eq!(config, Some(PathBuf::from("popups.toml")));
				assert!(json);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}
}
