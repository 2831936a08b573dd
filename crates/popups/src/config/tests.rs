use std::io::Write;

use herald_primitives::PopupKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_document_yields_defaults() {
	let config = BootPopupConfig::from_toml_str("").unwrap();
	assert_eq!(config, BootPopupConfig::default());
	assert_eq!(config.reputation_threshold, 250);
}

#[test]
fn parses_ranked_selection_and_disabled_rules() {
	let config = BootPopupConfig::from_toml_str(
		r#"
		reputation-threshold = 500
		selection = { ranked = ["streak-milestone", "reputation-milestone"] }
		disabled-rules = ["generic-referral"]
		"#,
	)
	.unwrap();
	assert_eq!(config.reputation_threshold, 500);
	assert_eq!(
		config.selection,
		SelectionPolicy::Ranked(vec![PopupKind::StreakMilestone, PopupKind::ReputationMilestone])
	);
	assert!(!config.is_rule_enabled(RuleId::GenericReferral));
	assert!(config.is_rule_enabled(RuleId::StreakMilestone));
}

#[test]
fn parses_first_registered_selection() {
	let config = BootPopupConfig::from_toml_str(r#"selection = "first-registered""#).unwrap();
	assert_eq!(config.selection, SelectionPolicy::FirstRegistered);
}

#[test]
fn rejects_duplicate_and_non_modal_ranks() {
	let err = BootPopupConfig::from_toml_str(r#"selection = { ranked = ["streak-recovery", "streak-recovery"] }"#).unwrap_err();
	assert!(matches!(err, ConfigError::DuplicateRank(PopupKind::StreakRecovery)), "{err}");

	let err = BootPopupConfig::from_toml_str(r#"selection = { ranked = ["small-marketing-cta"] }"#).unwrap_err();
	assert!(matches!(err, ConfigError::NonModalRank(PopupKind::SmallMarketingCta)), "{err}");
}

#[test]
fn rejects_unknown_keys() {
	let err = BootPopupConfig::from_toml_str("reputation = 3").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reports_missing_file_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");
	let err = BootPopupConfig::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("expected io error, got {other}"),
	}
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "reputation-threshold = 10").unwrap();
	let config = BootPopupConfig::load(file.path()).unwrap();
	assert_eq!(config.reputation_threshold, 10);
}
