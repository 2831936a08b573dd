use herald_primitives::{MarketingCta, ReadingStreak};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use super::*;
use crate::descriptor::{PopupEffect, PopupProps};

fn candidate(kind: PopupKind) -> PopupDescriptor {
	let props = match kind {
		PopupKind::ReputationMilestone => PopupProps::ReputationPrivileges,
		PopupKind::GenericReferral => PopupProps::GenericReferral,
		PopupKind::StreakMilestone => PopupProps::NewStreak {
			current_streak: 1,
			max_streak: 1,
		},
		PopupKind::StreakRecovery => PopupProps::RecoverStreak { user: Default::default() },
		_ => PopupProps::MarketingCta {
			marketing_cta: MarketingCta::migrate_streaks(),
		},
	};
	PopupDescriptor::new(kind, props)
}

#[test]
fn drain_presents_first_registered_kind() {
	let mut registry = PopupRegistry::new();
	registry.register(candidate(PopupKind::GenericReferral));
	registry.register(candidate(PopupKind::StreakMilestone));
	registry.register(candidate(PopupKind::StreakRecovery));

	let drained = registry.drain(&SelectionPolicy::FirstRegistered).expect("registry is non-empty");
	assert_eq!(drained.winner.kind, PopupKind::GenericReferral);
	assert_eq!(drained.discarded, vec![PopupKind::StreakMilestone, PopupKind::StreakRecovery]);
	assert!(registry.is_empty());
}

#[test]
fn reregistration_keeps_position_and_takes_new_props() {
	let mut registry = PopupRegistry::new();
	registry.register(candidate(PopupKind::StreakMilestone));
	registry.register(candidate(PopupKind::GenericReferral));

	let streak = ReadingStreak {
		current: 9,
		max: 12,
		week_start: 1,
	};
	let updated = PopupDescriptor::new(
		PopupKind::StreakMilestone,
		PopupProps::NewStreak {
			current_streak: streak.current,
			max_streak: streak.max,
		},
	)
	.on_close(PopupEffect::MarkBootPopupShown);
	assert!(registry.register(updated.clone()));
	assert_eq!(registry.len(), 2);

	let drained = registry.drain(&SelectionPolicy::FirstRegistered).expect("registry is non-empty");
	assert_eq!(drained.winner, updated);
	assert_eq!(drained.discarded, vec![PopupKind::GenericReferral]);
}

#[test]
fn drain_on_empty_registry_is_none() {
	let mut registry = PopupRegistry::new();
	assert!(registry.drain(&SelectionPolicy::FirstRegistered).is_none());
	assert!(registry.drain(&SelectionPolicy::Ranked(vec![PopupKind::StreakRecovery])).is_none());
}

#[test]
fn ranked_policy_overrides_registration_order() {
	let mut registry = PopupRegistry::new();
	registry.register(candidate(PopupKind::MarketingCta));
	registry.register(candidate(PopupKind::GenericReferral));
	registry.register(candidate(PopupKind::StreakRecovery));

	let policy = SelectionPolicy::Ranked(vec![PopupKind::StreakRecovery, PopupKind::MarketingCta]);
	let drained = registry.drain(&policy).expect("registry is non-empty");
	assert_eq!(drained.winner.kind, PopupKind::StreakRecovery);
	assert_eq!(drained.discarded, vec![PopupKind::MarketingCta, PopupKind::GenericReferral]);
}

#[test]
fn ranked_policy_falls_back_to_registration_order_for_unranked_kinds() {
	let mut registry = PopupRegistry::new();
	registry.register(candidate(PopupKind::GenericReferral));
	registry.register(candidate(PopupKind::ReputationMilestone));

	let policy = SelectionPolicy::Ranked(vec![PopupKind::StreakMigration]);
	let drained = registry.drain(&policy).expect("registry is non-empty");
	assert_eq!(drained.winner.kind, PopupKind::GenericReferral);
}

#[test]
fn clear_reports_dropped_count() {
	let mut registry = PopupRegistry::new();
	registry.register(candidate(PopupKind::GenericReferral));
	registry.register(candidate(PopupKind::GenericReferral));
	assert_eq!(registry.clear(), 1);
	assert!(registry.is_empty());
}

fn modal_kind() -> impl Strategy<Value = PopupKind> {
	let kinds: Vec<PopupKind> = PopupKind::iter().filter(|k| k.is_modal()).collect();
	proptest::sample::select(kinds)
}

proptest! {
	#[test]
	fn registry_holds_one_entry_per_kind_with_latest_descriptor(
		writes in proptest::collection::vec((modal_kind(), any::<bool>()), 1..40),
	) {
		let mut registry = PopupRegistry::new();
		let mut first_seen: Vec<PopupKind> = Vec::new();
		for (kind, persist) in &writes {
			let mut descriptor = candidate(*kind);
			descriptor.persist_on_route_change = *persist;
			registry.register(descriptor);
			if !first_seen.contains(kind) {
				first_seen.push(*kind);
			}
		}

		prop_assert_eq!(registry.kinds().collect::<Vec<_>>(), first_seen.clone());
		for kind in &first_seen {
			let latest = writes.iter().rev().find(|(k, _)| k == kind).map(|(_, p)| *p);
			prop_assert_eq!(registry.get(*kind).map(|d| d.persist_on_route_change), latest);
		}

		let drained = registry.drain(&SelectionPolicy::FirstRegistered);
		prop_assert!(registry.is_empty());
		let drained = drained.expect("at least one write");
		prop_assert_eq!(drained.winner.kind, first_seen[0]);
		prop_assert_eq!(drained.discarded.len() + 1, first_seen.len());
	}
}
