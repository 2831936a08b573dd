use std::hash::Hash;

use herald_primitives::{ActionType, PopupKind};
use rustc_hash::FxHasher;

use super::{BootRule, RuleId};
use crate::descriptor::{PopupDescriptor, PopupEffect, PopupProps};
use crate::snapshot::BootSnapshot;

/// Announces reputation privileges once the user crosses the threshold.
#[derive(Debug, Clone, Copy)]
pub struct ReputationPrivilegesRule {
	threshold: i64,
}

impl ReputationPrivilegesRule {
	pub const fn new(threshold: i64) -> Self {
		Self { threshold }
	}
}

impl BootRule for ReputationPrivilegesRule {
	fn id(&self) -> RuleId {
		RuleId::ReputationPrivileges
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		snapshot.actions.fetched.hash(state);
		snapshot.actions.check_has_completed(ActionType::AckRep250).hash(state);
		snapshot.user.as_ref().map(|user| user.reputation).hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		if !snapshot.actions.fetched {
			return None;
		}
		if snapshot.actions.check_has_completed(ActionType::AckRep250) == Some(true) {
			return None;
		}
		let reputation = snapshot.user.as_ref()?.reputation;
		if reputation < self.threshold {
			return None;
		}

		Some(
			PopupDescriptor::new(PopupKind::ReputationMilestone, PopupProps::ReputationPrivileges)
				.persist_on_route_change()
				.on_close(PopupEffect::MarkBootPopupShown),
		)
	}
}
