use serde::{Deserialize, Serialize};
use strum::Display;

/// Analytics event names emitted by boot popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogEventName {
	Impression,
}

/// Analytics target classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TargetType {
	MarketingCtaPopover,
}

/// One analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEvent {
	pub event_name: LogEventName,
	pub target_type: TargetType,
	pub target_id: String,
}

impl LogEvent {
	/// Impression of a marketing CTA popover for `campaign_id`.
	pub fn marketing_popover_impression(campaign_id: impl Into<String>) -> Self {
		Self {
			event_name: LogEventName::Impression,
			target_type: TargetType::MarketingCtaPopover,
			target_id: campaign_id.into(),
		}
	}
}
