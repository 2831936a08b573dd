use serde::{Deserialize, Serialize};

/// Persisted per-user alert flags relevant to boot popups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Alerts {
	/// A new streak milestone is waiting to be celebrated.
	pub show_streak_milestone: bool,
	/// The generic referral campaign should be offered.
	pub show_generic_referral: bool,
	/// A broken streak can be recovered.
	pub show_recover_streak: bool,
	/// Daily boot popup budget is still available.
	pub boot_popup: bool,
}

impl Alerts {
	/// Applies a partial update, leaving unset fields untouched.
	pub fn apply(&mut self, update: &AlertsUpdate) {
		if let Some(v) = update.show_streak_milestone {
			self.show_streak_milestone = v;
		}
		if let Some(v) = update.show_generic_referral {
			self.show_generic_referral = v;
		}
		if let Some(v) = update.show_recover_streak {
			self.show_recover_streak = v;
		}
		if let Some(v) = update.boot_popup {
			self.boot_popup = v;
		}
	}
}

/// Partial alert update. `None` fields are left as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_streak_milestone: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_generic_referral: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_recover_streak: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub boot_popup: Option<bool>,
}

impl AlertsUpdate {
	/// Update that clears the pending streak milestone flag.
	pub const fn clear_streak_milestone() -> Self {
		Self {
			show_streak_milestone: Some(false),
			show_generic_referral: None,
			show_recover_streak: None,
			boot_popup: None,
		}
	}

	/// Returns true when the update changes nothing.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}
