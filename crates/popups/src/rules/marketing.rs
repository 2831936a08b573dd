use std::hash::Hash;

use herald_primitives::{LogEvent, PopupKind};
use rustc_hash::FxHasher;

use super::{BootRule, RuleId};
use crate::descriptor::{PopupDescriptor, PopupEffect, PopupProps};
use crate::snapshot::BootSnapshot;

/// Large marketing popover campaign.
///
/// The small popover variant is not a rule; it lives on the
/// [small popup channel](crate::small_popup).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketingCtaRule;

impl BootRule for MarketingCtaRule {
	fn id(&self) -> RuleId {
		RuleId::MarketingCta
	}

	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher) {
		snapshot.marketing_popover.hash(state);
	}

	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor> {
		let cta = snapshot.marketing_popover.clone()?;
		let impression = LogEvent::marketing_popover_impression(cta.campaign_id.clone());

		Some(
			PopupDescriptor::new(PopupKind::MarketingCta, PopupProps::MarketingCta { marketing_cta: cta })
				.on_open(PopupEffect::LogEvent(impression))
				.on_close(PopupEffect::MarkBootPopupShown),
		)
	}
}
