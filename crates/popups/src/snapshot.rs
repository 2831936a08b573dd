//! Point-in-time copy of every upstream input the rules read.

use std::collections::BTreeMap;

use herald_primitives::{ActionType, Alerts, MarketingCta, MarketingCtaVariant, ReadingStreak, User};
use strum::IntoEnumIterator;

use crate::collaborators::{ActionTracker, Collaborators};

/// Action completion state as seen at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActionSnapshot {
	pub fetched: bool,
	/// Known completion per action. Missing entries are unknown.
	pub completed: BTreeMap<ActionType, bool>,
}

impl ActionSnapshot {
	pub fn capture(tracker: &dyn ActionTracker) -> Self {
		Self {
			fetched: tracker.is_actions_fetched(),
			completed: ActionType::iter()
				.filter_map(|action| tracker.check_has_completed(action).map(|done| (action, done)))
				.collect(),
		}
	}

	/// Fetched snapshot with the given actions completed and every other action known-incomplete.
	pub fn fetched_with(completed: impl IntoIterator<Item = ActionType>) -> Self {
		let mut snapshot = Self {
			fetched: true,
			completed: ActionType::iter().map(|action| (action, false)).collect(),
		};
		for action in completed {
			snapshot.completed.insert(action, true);
		}
		snapshot
	}

	pub fn check_has_completed(&self, action: ActionType) -> Option<bool> {
		self.completed.get(&action).copied()
	}
}

/// Inputs for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BootSnapshot {
	pub alerts_loaded: bool,
	pub alerts: Alerts,
	pub actions: ActionSnapshot,
	pub user: Option<User>,
	pub marketing_popover: Option<MarketingCta>,
	pub marketing_popover_small: Option<MarketingCta>,
	pub streak: Option<ReadingStreak>,
	pub streak_should_show_popup: bool,
	pub streaks_enabled: bool,
}

impl BootSnapshot {
	pub fn capture(collaborators: &Collaborators) -> Self {
		Self {
			alerts_loaded: collaborators.alerts.is_loaded(),
			alerts: collaborators.alerts.alerts(),
			actions: ActionSnapshot::capture(collaborators.actions.as_ref()),
			user: collaborators.session.user(),
			marketing_popover: collaborators.marketing.marketing_cta(MarketingCtaVariant::Popover),
			marketing_popover_small: collaborators.marketing.marketing_cta(MarketingCtaVariant::PopoverSmall),
			streak: collaborators.streaks.streak(),
			streak_should_show_popup: collaborators.streaks.should_show_popup(),
			streaks_enabled: collaborators.streaks.is_streaks_enabled(),
		}
	}

	/// Readiness gate for draining: alerts loaded and today's budget unused.
	pub fn is_ready(&self) -> bool {
		self.alerts_loaded && self.alerts.boot_popup
	}
}
