//! Boot popup rules.
//!
//! A rule watches a slice of the [`BootSnapshot`] and, when its condition
//! holds, produces a candidate. [`BootPopups`](crate::BootPopups) only
//! re-evaluates a rule when the inputs it watches change, so a rule fires at
//! most once per distinct input state.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::BootPopupConfig;
use crate::descriptor::PopupDescriptor;
use crate::snapshot::BootSnapshot;

mod marketing;
mod referral;
mod reputation;
mod streak;

pub use marketing::MarketingCtaRule;
pub use referral::GenericReferralRule;
pub use reputation::ReputationPrivilegesRule;
pub use streak::{StreakMigrationRule, StreakMilestoneRule, StreakRecoveryRule};

/// Identifier for each built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RuleId {
	ReputationPrivileges,
	MarketingCta,
	GenericReferral,
	StreakMigration,
	StreakMilestone,
	StreakRecovery,
}

pub trait BootRule: Send + Sync {
	fn id(&self) -> RuleId;

	/// Feeds the inputs this rule depends on into `state`.
	fn watch(&self, snapshot: &BootSnapshot, state: &mut FxHasher);

	/// Returns a candidate when the rule's condition holds.
	fn evaluate(&self, snapshot: &BootSnapshot) -> Option<PopupDescriptor>;
}

/// Dependency fingerprint of `rule` for `snapshot`.
pub fn fingerprint(rule: &dyn BootRule, snapshot: &BootSnapshot) -> u64 {
	let mut state = FxHasher::default();
	rule.id().hash(&mut state);
	rule.watch(snapshot, &mut state);
	state.finish()
}

/// Built-in rules in evaluation order, minus those disabled by `config`.
pub fn builtin_rules(config: &BootPopupConfig) -> Vec<Box<dyn BootRule>> {
	let rules: [Box<dyn BootRule>; 6] = [
		Box::new(ReputationPrivilegesRule::new(config.reputation_threshold)),
		Box::new(MarketingCtaRule),
		Box::new(GenericReferralRule),
		Box::new(StreakMigrationRule),
		Box::new(StreakMilestoneRule),
		Box::new(StreakRecoveryRule),
	];
	rules.into_iter().filter(|rule| config.is_rule_enabled(rule.id())).collect()
}
