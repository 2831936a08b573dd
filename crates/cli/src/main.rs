//! `herald` binary: replays boot popup scenarios against in-memory
//! collaborators.

mod cli;
mod scenario;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use herald_popups::BootPopupConfig;
use herald_primitives::PopupKind;
use scenario::Scenario;
use strum::IntoEnumIterator;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Run { scenario, config, json } => run(&scenario, config.as_deref(), json),
		Command::Kinds => {
			for kind in PopupKind::iter() {
				let channel = if kind.is_modal() { "modal" } else { "small popup" };
				println!("{:<22} {:<24} {channel}", kind.to_string(), kind.modal().to_string());
			}
			Ok(())
		}
		Command::CheckConfig { path } => {
			let config = load_config(Some(&path))?;
			println!("{} ok: {:?}", path.display(), config);
			Ok(())
		}
	}
}

fn run(scenario_path: &Path, config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
	let config = load_config(config_path)?;
	let scenario = Scenario::load(scenario_path)?;
	info!(frames = scenario.frames.len(), path = %scenario_path.display(), "replaying scenario");

	for event in scenario::replay(&scenario, config) {
		if json {
			println!("{}", event.to_json());
		} else {
			println!("{event}");
		}
	}
	Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BootPopupConfig> {
	match path {
		Some(path) => BootPopupConfig::load(path).with_context(|| format!("failed to load config {}", path.display())),
		None => Ok(BootPopupConfig::default()),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("HERALD_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("herald_popups=trace,herald=debug,info")
		} else {
			EnvFilter::new("herald_popups=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
