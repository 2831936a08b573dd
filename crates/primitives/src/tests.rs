use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use super::*;

#[test]
fn popup_kind_string_forms_are_kebab_case() {
	assert_eq!(PopupKind::ReputationMilestone.to_string(), "reputation-milestone");
	assert_eq!(PopupKind::parse("streak-recovery"), Ok(PopupKind::StreakRecovery));
	assert_eq!(PopupKind::parse("nope"), Err(ParseError::PopupKind("nope".to_string())));
}

#[test]
fn popup_kind_serde_matches_display() {
	for kind in PopupKind::iter() {
		let json = serde_json::to_string(&kind).unwrap();
		assert_eq!(json, format!("\"{kind}\""));
	}
}

#[test]
fn streak_migration_reuses_marketing_modal() {
	assert_eq!(PopupKind::StreakMigration.modal(), LazyModal::MarketingCta);
	assert_eq!(PopupKind::StreakMilestone.modal(), LazyModal::NewStreak);
	assert!(!PopupKind::SmallMarketingCta.is_modal());
	assert_eq!(PopupKind::iter().filter(|k| k.is_modal()).count(), 6);
}

#[test]
fn action_type_parses_snake_case() {
	assert_eq!(ActionType::parse("ack_rep250"), Ok(ActionType::AckRep250));
	assert_eq!(
		ActionType::parse("disable_reading_streak_milestone"),
		Ok(ActionType::DisableReadingStreakMilestone)
	);
	assert!(ActionType::parse("AckRep250").is_err());
}

#[test]
fn alerts_update_only_touches_set_fields() {
	let mut alerts = Alerts {
		show_streak_milestone: true,
		show_generic_referral: true,
		show_recover_streak: false,
		boot_popup: true,
	};
	alerts.apply(&AlertsUpdate::clear_streak_milestone());
	assert_eq!(
		alerts,
		Alerts {
			show_streak_milestone: false,
			show_generic_referral: true,
			show_recover_streak: false,
			boot_popup: true,
		}
	);
	assert!(AlertsUpdate::default().is_empty());
	assert!(!AlertsUpdate::clear_streak_milestone().is_empty());
}

#[test]
fn marketing_cta_uses_camel_case_wire_names() {
	let cta: MarketingCta = serde_json::from_str(r#"{"campaignId":"c1","variant":"popover-small","flags":{"title":"Hi","ctaUrl":"https://x"}}"#).unwrap();
	assert_eq!(cta.campaign_id, "c1");
	assert_eq!(cta.variant, MarketingCtaVariant::PopoverSmall);
	assert_eq!(cta.flags.cta_url.as_deref(), Some("https://x"));
	assert_eq!(MarketingCtaVariant::parse("popover"), Ok(MarketingCtaVariant::Popover));
}

#[test]
fn impression_event_targets_campaign() {
	let event = LogEvent::marketing_popover_impression("spring");
	assert_eq!(event.event_name, LogEventName::Impression);
	assert_eq!(event.target_type, TargetType::MarketingCtaPopover);
	assert_eq!(event.target_id, "spring");
}
