//! Reading streak popups: migration announcement, milestone, recovery.

use std::hash::Hash;

use herald_primitives::{ActionType, AlertsUpdate, MarketingCta, PopupKind};
use rustc_hash::FxHasher;

use super::{BootRule, RuleId};
use crate::descriptor::{PopupDescriptor, PopupEffect, PopupProps};
use crate::snapshot::BootSnapshot;

/// Introduces reading streaks to existing users.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakMigrationRule;

impl BootRule for StreakMigrationRule {
	fn id(&self) -> RuleId {
		RuleId::StreakMigration
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		(snapshot.streak_should_show_popup, snapshot.actions.fetched).hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		if !snapshot.streak_should_show_popup || !snapshot.actions.fetched {
			return None;
		}

		Some(
			PopupDescriptor::new(
				PopupKind::StreakMigration,
				PopupProps::MarketingCta {
					marketing_cta: MarketingCta::migrate_streaks(),
				},
			)
			.on_open(PopupEffect::MarkBootPopupShown)
			.on_open(PopupEffect::CompleteAction(ActionType::ExistingUserSeenStreaks)),
		)
	}
}

/// Celebrates a new streak milestone.
///
/// The opt-out action must be known before the rule can fire: an unresolved
/// completion state counts as not eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakMilestoneRule;

impl BootRule for StreakMilestoneRule {
	fn id(&self) -> RuleId {
		RuleId::StreakMilestone
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		snapshot.streaks_enabled.hash(state);
		snapshot.actions.fetched.hash(state);
		snapshot.actions.check_has_completed(ActionType::DisableReadingStreakMilestone).hash(state);
		snapshot.alerts.show_streak_milestone.hash(state);
		snapshot.streak.hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		if !snapshot.streaks_enabled || !snapshot.actions.fetched || !snapshot.alerts.show_streak_milestone {
			return None;
		}
		if snapshot.actions.check_has_completed(ActionType::DisableReadingStreakMilestone) != Some(false) {
			return None;
		}
		let streak = snapshot.streak.filter(|streak| streak.current > 0)?;

		Some(
			PopupDescriptor::new(
				PopupKind::StreakMilestone,
				PopupProps::NewStreak {
					current_streak: streak.current,
					max_streak: streak.max,
				},
			)
			.on_close(PopupEffect::MarkBootPopupShown)
			.on_close(PopupEffect::UpdateAlerts(AlertsUpdate::clear_streak_milestone())),
		)
	}
}

/// Offers to restore a broken streak.
///
/// An unknown opt-out state counts as not opted out.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakRecoveryRule;

impl BootRule for StreakRecoveryRule {
	fn id(&self) -> RuleId {
		RuleId::StreakRecovery
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		snapshot.alerts.hash(state);
		snapshot.user.hash(state);
		snapshot.actions.hash(state);
		snapshot.streak.hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		if !snapshot.alerts.show_recover_streak {
			return None;
		}
		let user = snapshot.user.clone()?;
		if snapshot.actions.check_has_completed(ActionType::DisableReadingStreakRecover) == Some(true) {
			return None;
		}

		Some(PopupDescriptor::new(PopupKind::StreakRecovery, PopupProps::RecoverStreak { user }))
	}
}
