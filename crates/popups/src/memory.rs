//! In-memory collaborators.
//!
//! [`MemoryBackend`] implements every collaborator trait over one shared
//! [`MemoryState`]. Input mutations bump a revision published on a
//! [`watch`] channel so a [driver](crate::driver) can tick on change.
//! Presentation and analytics calls are recorded but do not bump the revision.

use std::collections::{BTreeMap, BTreeSet};

use herald_primitives::{ActionType, Alerts, AlertsUpdate, LogEvent, MarketingCta, MarketingCtaVariant, ReadingStreak, User};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::collaborators::{ActionTracker, AlertStore, EventLogger, MarketingSource, PresentationSink, SessionSource, StreakSource};
use crate::descriptor::{InteractivePopup, PopupDescriptor};

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
	pub alerts_loaded: bool,
	pub alerts: Alerts,
	pub actions_fetched: bool,
	pub completed: BTreeSet<ActionType>,
	pub user: Option<User>,
	pub marketing: BTreeMap<MarketingCtaVariant, MarketingCta>,
	pub streak: Option<ReadingStreak>,
	pub streak_should_show_popup: bool,
	pub streaks_enabled: bool,

	/// Number of `update_last_boot_popup` calls.
	pub boot_popup_marks: usize,
	pub logged: Vec<LogEvent>,
	pub opened: Vec<PopupDescriptor>,
	pub interactive: Option<InteractivePopup>,
	/// Number of `set_interactive_popup` calls.
	pub interactive_updates: usize,
}

impl MemoryState {
	/// Sets or clears the CTA for `variant`.
	pub fn set_marketing(&mut self, variant: MarketingCtaVariant, cta: Option<MarketingCta>) {
		match cta {
			Some(cta) => {
				self.marketing.insert(variant, cta);
			}
			None => {
				self.marketing.remove(&variant);
			}
		}
	}
}

pub struct MemoryBackend {
	state: Mutex<MemoryState>,
	revision: watch::Sender<u64>,
}

impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new(MemoryState::default())
	}
}

impl MemoryBackend {
	pub fn new(state: MemoryState) -> Self {
		let (revision, _) = watch::channel(0);
		Self {
			state: Mutex::new(state),
			revision,
		}
	}

	/// Receiver notified after every input mutation.
	pub fn subscribe(&self) -> watch::Receiver<u64> {
		self.revision.subscribe()
	}

	pub fn revision(&self) -> u64 {
		*self.revision.borrow()
	}

	/// Mutates inputs and publishes a new revision.
	pub fn update(&self, f: impl FnOnce(&mut MemoryState)) {
		f(&mut self.state.lock());
		self.bump();
	}

	/// Copy of the current state.
	pub fn snapshot(&self) -> MemoryState {
		self.state.lock().clone()
	}

	fn bump(&self) {
		self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
	}
}

impl std::fmt::Debug for MemoryBackend {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryBackend").field("revision", &self.revision()).finish_non_exhaustive()
	}
}

impl AlertStore for MemoryBackend {
	fn is_loaded(&self) -> bool {
		self.state.lock().alerts_loaded
	}

	fn alerts(&self) -> Alerts {
		self.state.lock().alerts
	}

	fn update_last_boot_popup(&self) {
		self.update(|state| {
			state.alerts.boot_popup = false;
			state.boot_popup_marks += 1;
		});
	}

	fn update_alerts(&self, update: AlertsUpdate) {
		self.update(|state| state.alerts.apply(&update));
	}
}

impl ActionTracker for MemoryBackend {
	fn is_actions_fetched(&self) -> bool {
		self.state.lock().actions_fetched
	}

	fn check_has_completed(&self, action: ActionType) -> Option<bool> {
		let state = self.state.lock();
		state.actions_fetched.then(|| state.completed.contains(&action))
	}

	fn complete_action(&self, action: ActionType) {
		self.update(|state| {
			state.completed.insert(action);
		});
	}
}

impl MarketingSource for MemoryBackend {
	fn marketing_cta(&self, variant: MarketingCtaVariant) -> Option<MarketingCta> {
		self.state.lock().marketing.get(&variant).cloned()
	}
}

impl StreakSource for MemoryBackend {
	fn streak(&self) -> Option<ReadingStreak> {
		self.state.lock().streak
	}

	fn should_show_popup(&self) -> bool {
		self.state.lock().streak_should_show_popup
	}

	fn is_streaks_enabled(&self) -> bool {
		self.state.lock().streaks_enabled
	}
}

impl SessionSource for MemoryBackend {
	fn user(&self) -> Option<User> {
		self.state.lock().user.clone()
	}
}

impl EventLogger for MemoryBackend {
	fn log_event(&self, event: LogEvent) {
		self.state.lock().logged.push(event);
	}
}

impl PresentationSink for MemoryBackend {
	fn open_modal(&self, descriptor: &PopupDescriptor) {
		self.state.lock().opened.push(descriptor.clone());
	}

	fn set_interactive_popup(&self, popup: Option<&InteractivePopup>) {
		let mut state = self.state.lock();
		state.interactive = popup.cloned();
		state.interactive_updates += 1;
	}
}
