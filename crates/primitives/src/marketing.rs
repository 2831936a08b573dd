use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ParseError;

/// Placement variant of a marketing call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MarketingCtaVariant {
	/// In-feed card.
	Card,
	/// Large boot modal.
	Popover,
	/// Small non-modal popup anchored to the page edge.
	PopoverSmall,
	/// Plus upgrade button.
	Plus,
}

impl MarketingCtaVariant {
	/// Parses a kebab-case variant name.
	pub fn parse(name: &str) -> Result<Self, ParseError> {
		Self::from_str(name).map_err(|_| ParseError::MarketingCtaVariant(name.to_string()))
	}
}

/// Display copy attached to a marketing CTA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketingCtaFlags {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cta_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cta_text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag_color: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag_text: Option<String>,
}

/// Marketing campaign payload supplied by the boot data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCta {
	pub campaign_id: String,
	pub variant: MarketingCtaVariant,
	#[serde(default)]
	pub flags: MarketingCtaFlags,
}

impl MarketingCta {
	/// Built-in promotion announcing the reading streaks migration.
	pub fn migrate_streaks() -> Self {
		Self {
			campaign_id: "migrate_streaks".to_string(),
			variant: MarketingCtaVariant::Popover,
			flags: MarketingCtaFlags {
				title: "Reading streaks are here".to_string(),
				description: Some("Read a post every day to build your streak. We counted the days you already read.".to_string()),
				image: None,
				cta_url: None,
				cta_text: Some("Got it".to_string()),
				tag_color: Some("avocado".to_string()),
				tag_text: Some("New feature".to_string()),
			},
		}
	}
}
