//! Boot popup configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! reputation-threshold = 250
//! selection = { ranked = ["streak-milestone", "reputation-milestone"] }
//! disabled-rules = ["generic-referral"]
//! ```
//!
//! Every key is optional. `selection` defaults to `"first-registered"`.

use std::path::Path;

use serde::{Deserialize, Serialize};

mod error;

pub use error::{ConfigError, Result};

use crate::registry::SelectionPolicy;
use crate::rules::RuleId;

/// Reputation at which the privileges popup is offered.
pub const DEFAULT_REPUTATION_THRESHOLD: i64 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BootPopupConfig {
	pub reputation_threshold: i64,
	pub selection: SelectionPolicy,
	pub disabled_rules: Vec<RuleId>,
}

impl Default for BootPopupConfig {
	fn default() -> Self {
		Self {
			reputation_threshold: DEFAULT_REPUTATION_THRESHOLD,
			selection: SelectionPolicy::FirstRegistered,
			disabled_rules: Vec::new(),
		}
	}
}

impl BootPopupConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses, and validates a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	pub fn validate(&self) -> Result<()> {
		if let SelectionPolicy::Ranked(order) = &self.selection {
			for (index, kind) in order.iter().enumerate() {
				if !kind.is_modal() {
					return Err(ConfigError::NonModalRank(*kind));
				}
				if order[..index].contains(kind) {
					return Err(ConfigError::DuplicateRank(*kind));
				}
			}
		}
		Ok(())
	}

	pub fn is_rule_enabled(&self, id: RuleId) -> bool {
		!self.disabled_rules.contains(&id)
	}
}

#[cfg(test)]
mod tests;
