//! Error types for boot popup configuration.

use std::path::PathBuf;

use herald_primitives::PopupKind;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A kind appears more than once in a ranked selection.
	#[error("popup kind ranked more than once: {0}")]
	DuplicateRank(PopupKind),

	/// A non-modal kind appears in a ranked selection.
	#[error("popup kind never competes for the boot modal: {0}")]
	NonModalRank(PopupKind),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
