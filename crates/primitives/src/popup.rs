use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::ParseError;

/// Closed set of boot popup kinds.
///
/// The registry holds at most one candidate per kind. String forms are
/// kebab-case (`reputation-milestone`, `streak-recovery`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PopupKind {
	ReputationMilestone,
	MarketingCta,
	SmallMarketingCta,
	GenericReferral,
	StreakMigration,
	StreakMilestone,
	StreakRecovery,
}

impl PopupKind {
	/// Modal the presentation layer renders for this kind.
	pub const fn modal(self) -> LazyModal {
		match self {
			Self::ReputationMilestone => LazyModal::ReputationPrivileges,
			Self::MarketingCta | Self::SmallMarketingCta | Self::StreakMigration => LazyModal::MarketingCta,
			Self::GenericReferral => LazyModal::GenericReferral,
			Self::StreakMilestone => LazyModal::NewStreak,
			Self::StreakRecovery => LazyModal::RecoverStreak,
		}
	}

	/// Returns true for kinds that compete for the boot modal slot.
	///
	/// The small marketing CTA is presented on its own channel and never
	/// enters the registry.
	pub const fn is_modal(self) -> bool {
		!matches!(self, Self::SmallMarketingCta)
	}

	/// Parses a kebab-case kind name.
	pub fn parse(name: &str) -> Result<Self, ParseError> {
		Self::from_str(name).map_err(|_| ParseError::PopupKind(name.to_string()))
	}
}

/// Lazily loaded modal components known to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LazyModal {
	ReputationPrivileges,
	MarketingCta,
	GenericReferral,
	NewStreak,
	RecoverStreak,
}
