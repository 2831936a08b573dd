use std::hash::Hash;

use herald_primitives::PopupKind;
use rustc_hash::FxHasher;

use super::{BootRule, RuleId};
use crate::descriptor::{PopupDescriptor, PopupEffect, PopupProps};
use crate::snapshot::BootSnapshot;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericReferralRule;

impl BootRule for GenericReferralRule {
	fn id(&self) -> RuleId {
		RuleId::GenericReferral
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		snapshot.alerts.show_generic_referral.hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		snapshot
			.alerts
			.show_generic_referral
			.then(|| PopupDescriptor::new(PopupKind::GenericReferral, PopupProps::GenericReferral).on_open(PopupEffect::MarkBootPopupShown))
	}
}
