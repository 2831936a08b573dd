//! Small interactive popup channel.
//!
//! Independent of the boot modal registry: holds zero or one non-modal popup
//! derived from the small marketing CTA. The popup is rebuilt whole whenever
//! the source changes and cleared when the source goes away.

use herald_primitives::MarketingCta;

use crate::descriptor::InteractivePopup;

#[derive(Debug, Default)]
pub struct SmallPopupChannel {
	source: Option<MarketingCta>,
	popup: Option<InteractivePopup>,
}

impl SmallPopupChannel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Recomputes the popup from `source`. Returns true when it changed.
	pub fn sync(&mut self, source: Option<&MarketingCta>) -> bool {
		if self.source.as_ref() == source {
			return false;
		}
		self.source = source.cloned();
		self.popup = source.cloned().map(InteractivePopup::marketing);
		true
	}

	pub fn current(&self) -> Option<&InteractivePopup> {
		self.popup.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use herald_primitives::{MarketingCtaFlags, MarketingCtaVariant, PopupKind};

	use super::*;
	use crate::descriptor::InteractivePopupPosition;

	fn small(campaign_id: &str) -> MarketingCta {
		MarketingCta {
			campaign_id: campaign_id.to_string(),
			variant: MarketingCtaVariant::PopoverSmall,
			flags: MarketingCtaFlags::default(),
		}
	}

	#[test]
	fn sync_replaces_and_clears() {
		let mut channel = SmallPopupChannel::new();
		assert!(!channel.sync(None));
		assert!(channel.current().is_none());

		assert!(channel.sync(Some(&small("a"))));
		let popup = channel.current().expect("popup set");
		assert_eq!(popup.kind, PopupKind::SmallMarketingCta);
		assert_eq!(popup.position, InteractivePopupPosition::RightEnd);
		assert!(popup.is_drawer_on_mobile);
		assert!(popup.disable_overlay);

		assert!(!channel.sync(Some(&small("a"))), "same source is not a change");
		assert!(channel.sync(Some(&small("b"))));
		assert_eq!(channel.current().map(|p| p.marketing_cta.campaign_id.as_str()), Some("b"));

		assert!(channel.sync(None));
		assert!(channel.current().is_none());
	}
}
