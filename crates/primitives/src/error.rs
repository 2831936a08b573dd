use thiserror::Error;

/// Error returned when a string does not name a known primitive value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// Unknown popup kind name.
	#[error("unknown popup kind: {0}")]
	PopupKind(String),
	/// Unknown action type name.
	#[error("unknown action type: {0}")]
	ActionType(String),
	/// Unknown marketing CTA variant name.
	#[error("unknown marketing cta variant: {0}")]
	MarketingCtaVariant(String),
}
