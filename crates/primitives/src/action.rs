use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ParseError;

/// One-shot actions tracked per user.
///
/// Once completed an action stays completed; popups use them as
/// "already acknowledged" or "opted out" markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
	/// User acknowledged the 250 reputation privileges popup.
	#[serde(rename = "ack_rep250")]
	#[strum(serialize = "ack_rep250")]
	AckRep250,
	/// User opted out of reading streak milestone popups.
	DisableReadingStreakMilestone,
	/// User opted out of streak recovery popups.
	DisableReadingStreakRecover,
	/// Existing user has seen the streaks migration promotion.
	ExistingUserSeenStreaks,
}

impl ActionType {
	/// Parses a snake_case action name.
	pub fn parse(name: &str) -> Result<Self, ParseError> {
		Self::from_str(name).map_err(|_| ParseError::ActionType(name.to_string()))
	}
}
