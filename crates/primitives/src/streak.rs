use serde::{Deserialize, Serialize};

/// Reading streak counters for the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadingStreak {
	/// Consecutive reading days, zero when broken.
	pub current: u32,
	/// Longest streak ever reached.
	pub max: u32,
	/// First day of the user's week (0 = Sunday).
	pub week_start: u8,
}
