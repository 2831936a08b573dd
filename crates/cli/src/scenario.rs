//! Scenario files.
//!
//! A scenario is a sequence of frames. Each frame patches the in-memory
//! collaborator state, then the orchestrator ticks once.
//!
//! ```toml
//! auto-ack = true
//!
//! [[frames]]
//! label = "alerts"
//! alerts-loaded = true
//! alerts = { boot_popup = true, show_generic_referral = true }
//!
//! [[frames]]
//! label = "actions"
//! actions-fetched = true
//! completed = ["ack_rep250"]
//! user = { id = "u1", username = "ada", reputation = 300 }
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use herald_popups::memory::{MemoryBackend, MemoryState};
use herald_popups::{BootPopupConfig, BootPopups, Collaborators, InteractivePopup, PopupDescriptor};
use herald_primitives::{ActionType, AlertsUpdate, MarketingCta, MarketingCtaVariant, ReadingStreak, User};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Scenario {
	/// Open and close every presented modal right after it is presented.
	pub auto_ack: bool,
	pub frames: Vec<Frame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Frame {
	pub label: Option<String>,
	pub alerts_loaded: Option<bool>,
	pub alerts: Option<AlertsUpdate>,
	pub actions_fetched: Option<bool>,
	pub completed: Vec<ActionType>,
	pub user: Option<User>,
	pub sign_out: bool,
	pub marketing_cta: Vec<MarketingCta>,
	pub clear_marketing: Vec<MarketingCtaVariant>,
	pub streak: Option<ReadingStreak>,
	pub streak_should_show_popup: Option<bool>,
	pub streaks_enabled: Option<bool>,
	/// Unmount the orchestrator instead of ticking. Later frames are skipped.
	pub unmount: bool,
}

impl Frame {
	fn apply(&self, state: &mut MemoryState) {
		if let Some(loaded) = self.alerts_loaded {
			state.alerts_loaded = loaded;
		}
		if let Some(update) = &self.alerts {
			state.alerts.apply(update);
		}
		if let Some(fetched) = self.actions_fetched {
			state.actions_fetched = fetched;
		}
		state.completed.extend(self.completed.iter().copied());
		if let Some(user) = &self.user {
			state.user = Some(user.clone());
		}
		if self.sign_out {
			state.user = None;
		}
		for cta in &self.marketing_cta {
			state.set_marketing(cta.variant, Some(cta.clone()));
		}
		for variant in &self.clear_marketing {
			state.set_marketing(*variant, None);
		}
		if let Some(streak) = self.streak {
			state.streak = Some(streak);
		}
		if let Some(show) = self.streak_should_show_popup {
			state.streak_should_show_popup = show;
		}
		if let Some(enabled) = self.streaks_enabled {
			state.streaks_enabled = enabled;
		}
	}

	fn name(&self, index: usize) -> String {
		self.label.clone().unwrap_or_else(|| format!("#{index}"))
	}
}

impl Scenario {
	pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
		toml::from_str(input).context("invalid scenario")
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let input = std::fs::read_to_string(path).with_context(|| format!("failed to read scenario {}", path.display()))?;
		Self::from_toml_str(&input).with_context(|| format!("in {}", path.display()))
	}
}

/// Something observable that happened during a replay.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	Presented { frame: String, descriptor: PopupDescriptor },
	SmallPopup { frame: String, popup: Option<InteractivePopup> },
	Unmounted { frame: String, discarded: usize },
}

impl Event {
	pub fn to_json(&self) -> Value {
		match self {
			Self::Presented { frame, descriptor } => json!({ "frame": frame, "event": "presented", "descriptor": descriptor.to_json() }),
			Self::SmallPopup { frame, popup } => json!({ "frame": frame, "event": "small-popup", "popup": popup }),
			Self::Unmounted { frame, discarded } => json!({ "frame": frame, "event": "unmounted", "discarded": discarded }),
		}
	}
}

impl std::fmt::Display for Event {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Presented { frame, descriptor } => write!(f, "[{frame}] presented {} ({})", descriptor.kind, descriptor.modal()),
			Self::SmallPopup { frame, popup: Some(popup) } => write!(f, "[{frame}] small popup {}", popup.marketing_cta.campaign_id),
			Self::SmallPopup { frame, popup: None } => write!(f, "[{frame}] small popup cleared"),
			Self::Unmounted { frame, discarded } => write!(f, "[{frame}] unmounted, {discarded} pending discarded"),
		}
	}
}

/// Replays `scenario` against fresh in-memory collaborators.
pub fn replay(scenario: &Scenario, config: BootPopupConfig) -> Vec<Event> {
	let backend = Arc::new(MemoryBackend::default());
	let mut popups = BootPopups::new(Collaborators::from_backend(backend.clone()), config);
	let mut events = Vec::new();

	for (index, frame) in scenario.frames.iter().enumerate() {
		let name = frame.name(index);
		if frame.unmount {
			let discarded = popups.unmount();
			events.push(Event::Unmounted { frame: name, discarded });
			return events;
		}

		backend.update(|state| frame.apply(state));
		let report = popups.tick();
		debug!(frame = %name, ?report, "frame ticked");

		if report.small_popup_changed {
			events.push(Event::SmallPopup {
				frame: name.clone(),
				popup: popups.small_popup().cloned(),
			});
		}
		if report.presented.is_some()
			&& let Some(descriptor) = backend.snapshot().opened.last().cloned()
		{
			events.push(Event::Presented { frame: name, descriptor });
			if scenario.auto_ack {
				popups.on_modal_opened();
				popups.on_modal_closed();
			}
		}
	}

	events
}
